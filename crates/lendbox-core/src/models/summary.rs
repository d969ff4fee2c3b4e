//! Item summary enriched with booking history.

use serde::{Deserialize, Serialize};

use super::{Booking, Comment, Item};

/// An item as seen by a requester: its comments and, for the owner only, the
/// neighbouring approved bookings around "now".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemBookings {
    pub item: Item,

    /// Latest approved booking that has already started
    pub last_booking: Option<Booking>,

    /// Earliest approved booking that has not started yet
    pub next_booking: Option<Booking>,

    /// Comments on the item, newest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}
