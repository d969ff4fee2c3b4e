//! Item request persistence.

use rusqlite::{params, OptionalExtension, Row};

use super::utils::{micros_column, stored, to_micros};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{ItemRequest, NewItemRequest, PageRequest},
};

const INSERT_REQUEST_SQL: &str =
    "INSERT INTO requests (requester_id, description, created_at) VALUES (?1, ?2, ?3)";
const SELECT_REQUEST_SQL: &str =
    "SELECT id, requester_id, description, created_at FROM requests WHERE id = ?1";
const SELECT_REQUESTS_BY_REQUESTER_SQL: &str = "SELECT id, requester_id, description, created_at FROM requests WHERE requester_id = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3";
const SELECT_REQUESTS_BY_OTHERS_SQL: &str = "SELECT id, requester_id, description, created_at FROM requests WHERE requester_id <> ?1 ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3";

impl super::Database {
    /// Persists a request. The returned request has no items yet.
    pub fn create_request(&mut self, request: &NewItemRequest) -> Result<ItemRequest> {
        let created_at = stored(request.created_at)?;

        self.connection
            .execute(
                INSERT_REQUEST_SQL,
                params![
                    request.requester_id as i64,
                    &request.description,
                    to_micros(created_at)
                ],
            )
            .db_context("Failed to insert request")?;

        Ok(ItemRequest {
            id: self.connection.last_insert_rowid() as u64,
            requester_id: request.requester_id,
            description: request.description.clone(),
            created_at,
            items: Vec::new(),
        })
    }

    /// Retrieves a request by ID together with the items answering it.
    pub fn get_request(&self, id: u64) -> Result<Option<ItemRequest>> {
        let request = self
            .connection
            .query_row(
                SELECT_REQUEST_SQL,
                params![id as i64],
                Self::build_request_from_row,
            )
            .optional()
            .db_context("Failed to query request")?;

        request.map(|r| self.with_items(r)).transpose()
    }

    /// One page of a user's own requests, newest first.
    pub fn get_requests_by_requester(
        &self,
        requester_id: u64,
        page: PageRequest,
    ) -> Result<Vec<ItemRequest>> {
        self.collect_requests(SELECT_REQUESTS_BY_REQUESTER_SQL, requester_id, page)
    }

    /// One page of requests posted by anyone but `user_id`, newest first.
    pub fn get_requests_by_others(
        &self,
        user_id: u64,
        page: PageRequest,
    ) -> Result<Vec<ItemRequest>> {
        self.collect_requests(SELECT_REQUESTS_BY_OTHERS_SQL, user_id, page)
    }

    fn collect_requests(
        &self,
        sql: &str,
        user_id: u64,
        page: PageRequest,
    ) -> Result<Vec<ItemRequest>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let requests = stmt
            .query_map(
                params![user_id as i64, page.size as i64, page.from as i64],
                Self::build_request_from_row,
            )
            .db_context("Failed to query requests")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read requests")?;

        requests.into_iter().map(|r| self.with_items(r)).collect()
    }

    fn with_items(&self, mut request: ItemRequest) -> Result<ItemRequest> {
        request.items = self.get_items_for_request(request.id)?;
        Ok(request)
    }

    fn build_request_from_row(row: &Row<'_>) -> rusqlite::Result<ItemRequest> {
        Ok(ItemRequest {
            id: row.get::<_, i64>(0)? as u64,
            requester_id: row.get::<_, i64>(1)? as u64,
            description: row.get(2)?,
            created_at: micros_column(3, row.get(3)?)?,
            items: Vec::new(),
        })
    }
}
