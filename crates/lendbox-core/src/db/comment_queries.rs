//! Comment persistence.

use rusqlite::{params, Row};

use super::utils::{micros_column, stored, to_micros};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Comment, NewComment},
    store::CommentStore,
};

const INSERT_COMMENT_SQL: &str =
    "INSERT INTO comments (item_id, author_id, text, created_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_COMMENTS_BY_ITEM_SQL: &str = "SELECT id, item_id, author_id, text, created_at FROM comments WHERE item_id = ?1 ORDER BY created_at DESC, id DESC";

impl super::Database {
    /// Persists a comment and returns it with its assigned id.
    pub fn create_comment(&mut self, comment: &NewComment) -> Result<Comment> {
        let created_at = stored(comment.created_at)?;

        self.connection
            .execute(
                INSERT_COMMENT_SQL,
                params![
                    comment.item_id as i64,
                    comment.author_id as i64,
                    &comment.text,
                    to_micros(created_at)
                ],
            )
            .db_context("Failed to insert comment")?;

        Ok(Comment {
            id: self.connection.last_insert_rowid() as u64,
            item_id: comment.item_id,
            author_id: comment.author_id,
            text: comment.text.clone(),
            created_at,
        })
    }

    /// Lists comments on an item, newest first.
    pub fn get_comments(&self, item_id: u64) -> Result<Vec<Comment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COMMENTS_BY_ITEM_SQL)
            .db_context("Failed to prepare query")?;

        let comments = stmt
            .query_map(params![item_id as i64], Self::build_comment_from_row)
            .db_context("Failed to query comments")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read comments")?;

        Ok(comments)
    }

    fn build_comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
        Ok(Comment {
            id: row.get::<_, i64>(0)? as u64,
            item_id: row.get::<_, i64>(1)? as u64,
            author_id: row.get::<_, i64>(2)? as u64,
            text: row.get(3)?,
            created_at: micros_column(4, row.get(4)?)?,
        })
    }
}

impl CommentStore for super::Database {
    fn insert_comment(&mut self, comment: &NewComment) -> Result<Comment> {
        self.create_comment(comment)
    }

    fn comments_for_item(&self, item_id: u64) -> Result<Vec<Comment>> {
        self.get_comments(item_id)
    }
}
