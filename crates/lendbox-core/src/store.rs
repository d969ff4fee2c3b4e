//! Interfaces the engine consumes.
//!
//! The booking engine only talks to users, items, bookings and comments
//! through these traits. [`crate::db::Database`] implements all of them over
//! SQLite; other backends only need to honour the same contracts.

use jiff::Timestamp;

use crate::{
    error::Result,
    models::{
        Booking, BookingQuery, BookingStatus, Comment, Item, NewBooking, NewComment, PageRequest,
        User,
    },
};

/// Read access to user identity.
pub trait UserDirectory {
    fn find_user(&self, id: u64) -> Result<Option<User>>;
}

/// Read access to item records and their availability flag.
pub trait ItemDirectory {
    fn find_item(&self, id: u64) -> Result<Option<Item>>;

    /// One page of the items `owner_id` listed, ordered by id.
    fn items_by_owner(&self, owner_id: u64, page: PageRequest) -> Result<Vec<Item>>;
}

/// Durable booking collection.
pub trait BookingStore {
    /// Persists a new booking and returns it with its assigned id.
    fn insert_booking(&mut self, booking: &NewBooking) -> Result<Booking>;

    fn find_booking(&self, id: u64) -> Result<Option<Booking>>;

    /// Sets `status` to `new` only if the stored status is still `expected`.
    ///
    /// Returns the updated booking, or `None` when the booking is missing or
    /// its status no longer matches. Implementations must make the check and
    /// the write a single atomic step.
    fn update_status_if(
        &mut self,
        id: u64,
        expected: BookingStatus,
        new: BookingStatus,
    ) -> Result<Option<Booking>>;

    /// Runs a classified query, ordered by `start` descending then `id`
    /// descending, restricted to the query's page window.
    fn query_bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>>;

    /// Whether `booker_id` holds an approved booking of `item_id` whose
    /// window started strictly before `now`.
    fn has_started_approved_booking(
        &self,
        booker_id: u64,
        item_id: u64,
        now: Timestamp,
    ) -> Result<bool>;

    /// Approved booking of the item with the latest `start <= now`.
    fn last_approved_booking(&self, item_id: u64, now: Timestamp) -> Result<Option<Booking>>;

    /// Approved booking of the item with the earliest `start > now`.
    fn next_approved_booking(&self, item_id: u64, now: Timestamp) -> Result<Option<Booking>>;
}

/// Durable comment collection.
pub trait CommentStore {
    fn insert_comment(&mut self, comment: &NewComment) -> Result<Comment>;

    /// Comments on an item, newest first.
    fn comments_for_item(&self, item_id: u64) -> Result<Vec<Comment>>;
}

/// Everything the engine needs from a backend.
pub trait Store: UserDirectory + ItemDirectory + BookingStore + CommentStore {}

impl<T> Store for T where T: UserDirectory + ItemDirectory + BookingStore + CommentStore {}
