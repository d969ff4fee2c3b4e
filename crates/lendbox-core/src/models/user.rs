//! User model definition.

use serde::{Deserialize, Serialize};

/// A registered user. Users own items and book items owned by others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}
