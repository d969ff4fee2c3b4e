//! Item model definition.

use serde::{Deserialize, Serialize};

/// An item listed for sharing by its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: u64,

    /// User who listed the item
    pub owner_id: u64,

    /// Short name of the item
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Whether new bookings are accepted
    pub available: bool,

    /// Request this item was listed in answer to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
}

impl Item {
    /// Whether `user_id` listed this item.
    pub fn is_owned_by(&self, user_id: u64) -> bool {
        self.owner_id == user_id
    }
}

/// An item that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub owner_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub available: bool,
    pub request_id: Option<u64>,
}
