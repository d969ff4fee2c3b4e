//! Comment model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A renter's comment on an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: u64,
    pub item_id: u64,
    pub author_id: u64,
    pub text: String,
    /// Instant the comment was accepted (UTC)
    pub created_at: Timestamp,
}

/// A comment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub item_id: u64,
    pub author_id: u64,
    pub text: String,
    pub created_at: Timestamp,
}
