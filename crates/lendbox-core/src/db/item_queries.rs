//! Item CRUD operations and search.

use rusqlite::{params, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Item, NewItem, PageRequest},
    store::ItemDirectory,
};

const ITEM_COLUMNS: &str = "id, owner_id, name, description, available, request_id";
const INSERT_ITEM_SQL: &str = "INSERT INTO items (owner_id, name, description, available, request_id) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_ITEM_SQL: &str =
    "UPDATE items SET name = ?1, description = ?2, available = ?3 WHERE id = ?4";

impl super::Database {
    /// Lists a new item. The caller checks that the owner and the answered
    /// request exist.
    pub fn create_item(&mut self, item: &NewItem) -> Result<Item> {
        self.connection
            .execute(
                INSERT_ITEM_SQL,
                params![
                    item.owner_id as i64,
                    &item.name,
                    &item.description,
                    item.available,
                    item.request_id.map(|id| id as i64)
                ],
            )
            .db_context("Failed to insert item")?;

        Ok(Item {
            id: self.connection.last_insert_rowid() as u64,
            owner_id: item.owner_id,
            name: item.name.clone(),
            description: item.description.clone(),
            available: item.available,
            request_id: item.request_id,
        })
    }

    /// Retrieves an item by ID.
    pub fn get_item(&self, id: u64) -> Result<Option<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], Self::build_item_from_row)
            .optional()
            .db_context("Failed to query item")
    }

    /// Writes back the editable fields of an item. Returns whether the item
    /// exists.
    pub fn update_item(&mut self, item: &Item) -> Result<bool> {
        let rows = self
            .connection
            .execute(
                UPDATE_ITEM_SQL,
                params![&item.name, &item.description, item.available, item.id as i64],
            )
            .db_context("Failed to update item")?;
        Ok(rows > 0)
    }

    /// One page of the items a user owns, oldest first.
    pub fn get_items_by_owner(&self, owner_id: u64, page: PageRequest) -> Result<Vec<Item>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE owner_id = ?1 ORDER BY id LIMIT ?2 OFFSET ?3"
        );
        self.collect_items(
            &sql,
            params![owner_id as i64, page.size as i64, page.from as i64],
        )
    }

    /// Items listed in answer to a request, oldest first.
    pub fn get_items_for_request(&self, request_id: u64) -> Result<Vec<Item>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE request_id = ?1 ORDER BY id");
        self.collect_items(&sql, params![request_id as i64])
    }

    /// One page of available items whose name or description contains
    /// `text`, ignoring ASCII case, ordered by id.
    pub fn search_items(&self, text: &str, page: PageRequest) -> Result<Vec<Item>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE available = 1 \
             AND (lower(name) LIKE ?1 ESCAPE '\\' OR lower(description) LIKE ?1 ESCAPE '\\') \
             ORDER BY id LIMIT ?2 OFFSET ?3"
        );
        let pattern = format!("%{}%", escape_like(&text.to_lowercase()));
        self.collect_items(
            &sql,
            params![pattern, page.size as i64, page.from as i64],
        )
    }

    fn collect_items(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<Item>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(params, Self::build_item_from_row)
            .db_context("Failed to query items")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read items")?;

        Ok(items)
    }

    fn build_item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
        Ok(Item {
            id: row.get::<_, i64>(0)? as u64,
            owner_id: row.get::<_, i64>(1)? as u64,
            name: row.get(2)?,
            description: row.get(3)?,
            available: row.get(4)?,
            request_id: row.get::<_, Option<i64>>(5)?.map(|id| id as u64),
        })
    }
}

/// Escapes LIKE wildcards so user text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl ItemDirectory for super::Database {
    fn find_item(&self, id: u64) -> Result<Option<Item>> {
        self.get_item(id)
    }

    fn items_by_owner(&self, owner_id: u64, page: PageRequest) -> Result<Vec<Item>> {
        self.get_items_by_owner(owner_id, page)
    }
}
