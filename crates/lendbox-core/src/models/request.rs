//! Item request model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Item;

/// A user's call for an item nobody has listed yet. Owners answer it by
/// listing an item that references the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRequest {
    pub id: u64,

    /// User looking for the item
    pub requester_id: u64,

    /// What the requester is looking for
    pub description: String,

    /// Instant the request was posted (UTC)
    pub created_at: Timestamp,

    /// Items listed in answer, oldest first
    #[serde(default)]
    pub items: Vec<Item>,
}

/// A request that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemRequest {
    pub requester_id: u64,
    pub description: String,
    pub created_at: Timestamp,
}
