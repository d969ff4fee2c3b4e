//! Booking lifecycle and eligibility engine.
//!
//! The engine owns every rule with real invariants: creation preconditions,
//! the single status transition, authority checks, the time-relative query
//! classification and the comment eligibility gate. It runs synchronously
//! against any backend implementing [`Store`] and never samples a clock;
//! each operation receives the instant it should be evaluated at.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Lender      │    │  BookingEngine  │    │   Store traits  │
//! │ (async facade,  │───▶│ (lifecycle,     │───▶│  (db::Database) │
//! │  samples clock) │    │  classifier,    │    │                 │
//! │                 │    │  eligibility)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`lifecycle`]: create, decide and fetch bookings
//! - [`classifier`]: map a [`BookingState`](crate::models::BookingState) and
//!   an instant to a store query
//! - [`eligibility`]: comment gate and the item summaries, one item or an
//!   owner's page of items

use crate::{
    error::{LendError, Result},
    models::{Booking, Item},
    store::Store,
};

pub mod classifier;
pub mod eligibility;
pub mod lifecycle;


pub use classifier::classify;

/// How authority failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// Indistinguishable from non-existence
    #[default]
    Concealed,

    /// Reported as [`LendError::Forbidden`]
    Strict,
}

impl AccessPolicy {
    /// Error for a user who may not see or act on a booking.
    pub fn deny_booking(&self, user_id: u64, booking_id: u64) -> LendError {
        match self {
            AccessPolicy::Concealed => LendError::NoAuthority {
                user_id,
                booking_id,
            },
            AccessPolicy::Strict => LendError::Forbidden {
                user_id,
                resource: format!("booking {booking_id}"),
            },
        }
    }

    /// Error for an owner trying to book their own item.
    pub fn deny_self_booking(&self, user_id: u64, item_id: u64) -> LendError {
        match self {
            AccessPolicy::Concealed => LendError::SelfBooking { item_id },
            AccessPolicy::Strict => LendError::Forbidden {
                user_id,
                resource: format!("item {item_id}"),
            },
        }
    }

    /// Error for a user who may not manage an item.
    pub fn deny_item(&self, user_id: u64, item_id: u64) -> LendError {
        match self {
            AccessPolicy::Concealed => LendError::ItemNotFound { id: item_id },
            AccessPolicy::Strict => LendError::Forbidden {
                user_id,
                resource: format!("item {item_id}"),
            },
        }
    }
}

/// What a user wants to do with a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read the booking
    View,

    /// Approve or reject the booking
    Decide,
}

/// The single authority predicate for bookings.
///
/// Owners of the booked item may view and decide; the booker may only view.
pub fn may_act(user_id: u64, item: &Item, booking: &Booking, action: Action) -> bool {
    match action {
        Action::View => item.is_owned_by(user_id) || booking.booker_id == user_id,
        Action::Decide => item.is_owned_by(user_id),
    }
}

/// Rejects empty or whitespace-only text fields.
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LendError::invalid_input(field).with_reason("must not be blank"));
    }
    Ok(())
}

/// Booking engine bound to one store for the duration of an operation.
pub struct BookingEngine<'s, S> {
    store: &'s mut S,
    policy: AccessPolicy,
}

impl<'s, S: Store> BookingEngine<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self {
            store,
            policy: AccessPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    fn require_user(&self, id: u64) -> Result<crate::models::User> {
        self.store
            .find_user(id)?
            .ok_or(LendError::UserNotFound { id })
    }

    fn require_item(&self, id: u64) -> Result<Item> {
        self.store
            .find_item(id)?
            .ok_or(LendError::ItemNotFound { id })
    }

    fn require_booking(&self, id: u64) -> Result<Booking> {
        self.store
            .find_booking(id)?
            .ok_or(LendError::BookingNotFound { id })
    }
}
