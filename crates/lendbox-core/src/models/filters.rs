//! Filter types for querying bookings.

use jiff::Timestamp;

use super::BookingStatus;
use crate::error::{LendError, Result};

/// Whose bookings a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    /// Bookings the user requested
    Booker(u64),

    /// Bookings of items the user owns, joined through the item
    Owner(u64),
}

impl Party {
    pub fn user_id(&self) -> u64 {
        match self {
            Party::Booker(id) | Party::Owner(id) => *id,
        }
    }
}

/// Concrete predicate a store evaluates for one booking query.
///
/// Time-relative selections carry the instant they were classified against
/// so the store never samples a clock of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No filter
    Any,

    /// `start <= now <= end`
    Overlapping(Timestamp),

    /// `end < now`
    EndedBefore(Timestamp),

    /// `start > now`
    StartingAfter(Timestamp),

    /// `status == status`
    WithStatus(BookingStatus),
}

/// Offset-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based offset of the first row
    pub from: u64,

    /// Maximum number of rows, at least 1
    pub size: u64,
}

impl PageRequest {
    /// Default page size used by the interface layers.
    pub const DEFAULT_SIZE: u64 = 20;

    /// Validates raw page parameters as supplied by a caller.
    pub fn new(from: i64, size: i64) -> Result<Self> {
        if from < 0 {
            return Err(LendError::invalid_input("from").with_reason("must not be negative"));
        }
        if size < 1 {
            return Err(LendError::invalid_input("size").with_reason("must be at least 1"));
        }
        Ok(Self {
            from: from as u64,
            size: size as u64,
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            from: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// A fully classified booking query handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingQuery {
    pub party: Party,
    pub selection: Selection,
    pub page: PageRequest,
}
