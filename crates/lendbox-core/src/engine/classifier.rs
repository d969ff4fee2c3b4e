//! Time-relative booking classification.

use jiff::Timestamp;
use log::debug;

use super::BookingEngine;
use crate::{
    error::Result,
    models::{Booking, BookingQuery, BookingState, BookingStatus, PageRequest, Party, Selection},
    params::ListBookings,
    store::Store,
};

/// Maps a requested state to the store predicate evaluated at `now`.
///
/// `Current`, `Past` and `Future` partition every booking by its window:
/// a booking whose start or end equals `now` exactly counts as current.
/// `Waiting` and `Rejected` filter by status regardless of time.
pub fn classify(state: BookingState, now: Timestamp) -> Selection {
    match state {
        BookingState::All => Selection::Any,
        BookingState::Current => Selection::Overlapping(now),
        BookingState::Past => Selection::EndedBefore(now),
        BookingState::Future => Selection::StartingAfter(now),
        BookingState::Waiting => Selection::WithStatus(BookingStatus::Waiting),
        BookingState::Rejected => Selection::WithStatus(BookingStatus::Rejected),
    }
}

impl<S: Store> BookingEngine<'_, S> {
    /// Bookings the user requested, filtered by state.
    pub fn list_for_booker(
        &self,
        booker_id: u64,
        params: &ListBookings,
        now: Timestamp,
    ) -> Result<Vec<Booking>> {
        self.list_bookings(Party::Booker(booker_id), params, now)
    }

    /// Bookings of every item the user owns, filtered by state.
    pub fn list_for_owner(
        &self,
        owner_id: u64,
        params: &ListBookings,
        now: Timestamp,
    ) -> Result<Vec<Booking>> {
        self.list_bookings(Party::Owner(owner_id), params, now)
    }

    // The state token is rejected before anything touches the store.
    fn list_bookings(
        &self,
        party: Party,
        params: &ListBookings,
        now: Timestamp,
    ) -> Result<Vec<Booking>> {
        let state: BookingState = params.state.parse()?;
        let page = PageRequest::new(params.from, params.size)?;

        self.require_user(party.user_id())?;

        let query = BookingQuery {
            party,
            selection: classify(state, now),
            page,
        };
        debug!("listing bookings: {query:?}");

        self.store.query_bookings(&query)
    }
}
