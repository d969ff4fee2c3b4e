//! Parameter structures for lendbox operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry only
//! the data an operation needs. The acting user is never part of them: each
//! interface resolves who is calling and passes that id separately.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema derives are only compiled with the `schema` feature, which the
//! MCP server enables.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::PageRequest;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for registering a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateUser {
    /// Display name
    pub name: String,
    /// Email address, unique across users
    pub email: String,
}

/// Parameters for listing an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateItem {
    /// Name of the item (required)
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Whether the item accepts new bookings
    #[serde(default = "default_available")]
    pub available: bool,
    /// ID of the item request this item answers
    #[serde(default)]
    pub request_id: Option<u64>,
}

impl Default for CreateItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            available: true,
            request_id: None,
        }
    }
}

fn default_available() -> bool {
    true
}

/// Parameters for editing an item. Absent fields stay as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateItem {
    /// ID of the item
    pub item_id: u64,
    /// New name, must not be blank
    pub name: Option<String>,
    /// New description; a blank value clears it
    pub description: Option<String>,
    /// New availability flag
    pub available: Option<bool>,
}

impl UpdateItem {
    /// Whether any field is set.
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.description.is_some() || self.available.is_some()
    }
}

/// Parameters for paging through the items a user owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListItems {
    /// Zero-based offset of the first item
    #[serde(default)]
    pub from: i64,
    /// Maximum number of items to return
    #[serde(default = "default_size")]
    pub size: i64,
}

impl Default for ListItems {
    fn default() -> Self {
        Self {
            from: 0,
            size: default_size(),
        }
    }
}

/// Parameters for searching available items by text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SearchItems {
    /// Text to look for in item names and descriptions, ignoring case
    pub text: String,
    /// Zero-based offset of the first match
    #[serde(default)]
    pub from: i64,
    /// Maximum number of matches to return
    #[serde(default = "default_size")]
    pub size: i64,
}

impl Default for SearchItems {
    fn default() -> Self {
        Self {
            text: String::new(),
            from: 0,
            size: default_size(),
        }
    }
}

/// Parameters for asking for an item nobody has listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateRequest {
    /// What the requester is looking for (required)
    pub description: String,
}

/// Parameters for listing item requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRequests {
    /// List requests posted by other users instead of the caller's own
    #[serde(default)]
    pub others: bool,
    /// Zero-based offset of the first request
    #[serde(default)]
    pub from: i64,
    /// Maximum number of requests to return
    #[serde(default = "default_size")]
    pub size: i64,
}

impl Default for ListRequests {
    fn default() -> Self {
        Self {
            others: false,
            from: 0,
            size: default_size(),
        }
    }
}

/// Parameters for requesting a booking.
///
/// Both instants are RFC 3339 timestamps. The window must be non-empty and
/// must not start in the past.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateBooking {
    /// ID of the item to book
    pub item_id: u64,
    /// Start of the rental window
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub start: Timestamp,
    /// End of the rental window
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub end: Timestamp,
}

/// Parameters for approving or rejecting a waiting booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DecideBooking {
    /// ID of the booking to decide
    pub booking_id: u64,
    /// true to approve, false to reject
    pub approved: bool,
}

/// Parameters for listing bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListBookings {
    /// One of ALL, CURRENT, PAST, FUTURE, WAITING, REJECTED (any case)
    #[serde(default = "default_state")]
    pub state: String,
    /// Zero-based offset of the first booking
    #[serde(default)]
    pub from: i64,
    /// Maximum number of bookings to return
    #[serde(default = "default_size")]
    pub size: i64,
    /// List bookings of items the caller owns instead of the caller's own
    #[serde(default)]
    pub owner: bool,
}

impl Default for ListBookings {
    fn default() -> Self {
        Self {
            state: default_state(),
            from: 0,
            size: default_size(),
            owner: false,
        }
    }
}

fn default_state() -> String {
    "ALL".to_string()
}

fn default_size() -> i64 {
    PageRequest::DEFAULT_SIZE as i64
}

/// Parameters for checking whether the caller may comment on an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CanComment {
    /// ID of the item
    pub item_id: u64,
}

/// Parameters for commenting on an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddComment {
    /// ID of the item
    pub item_id: u64,
    /// Comment text (required)
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_bookings_defaults_from_empty_json() {
        let params: ListBookings = serde_json::from_str("{}").unwrap();
        assert_eq!(params.state, "ALL");
        assert_eq!(params.from, 0);
        assert_eq!(params.size, 20);
        assert!(!params.owner);
    }

    #[test]
    fn test_create_item_available_by_default() {
        let params: CreateItem = serde_json::from_str(r#"{"name": "Drill"}"#).unwrap();
        assert!(params.available);
        assert!(params.description.is_none());
        assert!(params.request_id.is_none());
        assert!(CreateItem::default().available);
    }

    #[test]
    fn test_paging_defaults_for_item_and_request_listings() {
        let items: ListItems = serde_json::from_str("{}").unwrap();
        assert_eq!((items.from, items.size), (0, 20));

        let search: SearchItems = serde_json::from_str(r#"{"text": "tent"}"#).unwrap();
        assert_eq!((search.from, search.size), (0, 20));

        let requests: ListRequests = serde_json::from_str("{}").unwrap();
        assert!(!requests.others);
        assert_eq!(requests.size, 20);
    }

    #[test]
    fn test_update_item_without_fields_has_no_changes() {
        let params: UpdateItem = serde_json::from_str(r#"{"item_id": 3}"#).unwrap();
        assert!(!params.has_changes());

        let params: UpdateItem =
            serde_json::from_str(r#"{"item_id": 3, "available": false}"#).unwrap();
        assert!(params.has_changes());
    }

    #[test]
    fn test_create_booking_parses_rfc3339() {
        let params: CreateBooking = serde_json::from_str(
            r#"{"item_id": 4, "start": "2030-01-01T10:00:00Z", "end": "2030-01-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(params.item_id, 4);
        assert_eq!(
            params.end.duration_since(params.start),
            jiff::SignedDuration::from_hours(2)
        );
    }
}
