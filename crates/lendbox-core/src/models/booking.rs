//! Booking model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{BookingStatus, Item, User};

/// A time-bounded reservation of an item by a user, subject to owner
/// approval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: u64,

    /// Item being booked
    pub item_id: u64,

    /// User who requested the booking
    pub booker_id: u64,

    /// Start of the rental window (UTC)
    pub start: Timestamp,

    /// End of the rental window (UTC), strictly after `start`
    pub end: Timestamp,

    /// Lifecycle status
    #[serde(default)]
    pub status: BookingStatus,
}

/// A booking that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub item_id: u64,
    pub booker_id: u64,
    pub start: Timestamp,
    pub end: Timestamp,
    pub status: BookingStatus,
}

/// A booking together with the item and booker it links to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub item: Item,
    pub booker: User,
}
