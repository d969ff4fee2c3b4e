//! User CRUD operations.

use rusqlite::{params, ErrorCode, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, LendError, Result},
    models::User,
    store::UserDirectory,
};

const INSERT_USER_SQL: &str = "INSERT INTO users (name, email) VALUES (?1, ?2)";
const SELECT_USER_SQL: &str = "SELECT id, name, email FROM users WHERE id = ?1";

impl super::Database {
    /// Registers a new user. Emails are unique.
    pub fn create_user(&mut self, name: &str, email: &str) -> Result<User> {
        let inserted = self
            .connection
            .execute(INSERT_USER_SQL, params![name, email]);

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                return Err(LendError::invalid_input("email")
                    .with_reason(format!("'{email}' is already registered")));
            }
            Err(e) => return Err(LendError::database("Failed to insert user").with_source(e)),
        }

        Ok(User {
            id: self.connection.last_insert_rowid() as u64,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    /// Retrieves a user by ID.
    pub fn get_user(&self, id: u64) -> Result<Option<User>> {
        self.connection
            .query_row(SELECT_USER_SQL, params![id as i64], |row| {
                Ok(User {
                    id: row.get::<_, i64>(0)? as u64,
                    name: row.get(1)?,
                    email: row.get(2)?,
                })
            })
            .optional()
            .db_context("Failed to query user")
    }
}

impl UserDirectory for super::Database {
    fn find_user(&self, id: u64) -> Result<Option<User>> {
        self.get_user(id)
    }
}
