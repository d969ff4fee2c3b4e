//! Status and state enumerations for bookings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LendError;

/// Persisted lifecycle status of a booking.
///
/// `Waiting` is the only entry state. `Approved` and `Rejected` are terminal:
/// once a booking leaves `Waiting` no further transition is accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Awaiting the owner's decision
    #[default]
    Waiting,

    /// Accepted by the owner
    Approved,

    /// Declined by the owner
    Rejected,
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            _ => Err(format!("Invalid booking status: {s}")),
        }
    }
}

impl BookingStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }

    /// The status reached by an owner's decision.
    pub fn decided(approve: bool) -> Self {
        if approve {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        }
    }

    /// Whether the booking can no longer change status.
    pub fn is_terminal(&self) -> bool {
        match self {
            BookingStatus::Waiting => false,
            BookingStatus::Approved | BookingStatus::Rejected => true,
        }
    }

    /// Get status with a leading icon for display.
    ///
    /// ```rust
    /// use lendbox_core::models::BookingStatus;
    ///
    /// assert_eq!(BookingStatus::Approved.with_icon(), "✓ Approved");
    /// assert_eq!(BookingStatus::Waiting.with_icon(), "○ Waiting");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "○ Waiting",
            BookingStatus::Approved => "✓ Approved",
            BookingStatus::Rejected => "✗ Rejected",
        }
    }
}

/// Caller-facing filter over bookings, derived per query from the persisted
/// status and the booking window relative to "now".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingState {
    #[default]
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Every recognised state, in declaration order.
    pub const VARIANTS: [BookingState; 6] = [
        BookingState::All,
        BookingState::Current,
        BookingState::Past,
        BookingState::Future,
        BookingState::Waiting,
        BookingState::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingState::All => "ALL",
            BookingState::Current => "CURRENT",
            BookingState::Past => "PAST",
            BookingState::Future => "FUTURE",
            BookingState::Waiting => "WAITING",
            BookingState::Rejected => "REJECTED",
        }
    }
}

impl FromStr for BookingState {
    type Err = LendError;

    /// Parses a state token case-insensitively. Unknown tokens fail with
    /// [`LendError::BadState`] carrying the token as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingState::VARIANTS
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LendError::BadState {
                token: s.to_string(),
            })
    }
}
