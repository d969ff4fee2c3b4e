//! Booking lifecycle, listings, comments and item summaries for the Lender.

use super::Lender;
use crate::{
    error::Result,
    models::{Booking, BookingDetails, Comment, ItemBookings},
    params::{AddComment, CreateBooking, DecideBooking, Id, ListBookings, ListItems},
};

impl Lender {
    /// Requests a booking on behalf of `requester_id`.
    pub async fn create_booking(
        &self,
        requester_id: u64,
        params: &CreateBooking,
    ) -> Result<Booking> {
        let params = params.clone();
        self.with_engine(move |engine, now| engine.create_booking(&params, requester_id, now))
            .await
    }

    /// Approves or rejects a waiting booking as the item's owner.
    pub async fn decide_booking(
        &self,
        requester_id: u64,
        params: &DecideBooking,
    ) -> Result<Booking> {
        let booking_id = params.booking_id;
        let approved = params.approved;
        self.with_engine(move |engine, _| {
            engine.update_booking_status(booking_id, approved, requester_id)
        })
        .await
    }

    /// Fetches a booking the requester may see.
    pub async fn get_booking(&self, requester_id: u64, params: &Id) -> Result<BookingDetails> {
        let booking_id = params.id;
        self.with_engine(move |engine, _| engine.get_booking(booking_id, requester_id))
            .await
    }

    /// Lists the requester's bookings, or bookings of the requester's items
    /// when `params.owner` is set.
    pub async fn list_bookings(
        &self,
        requester_id: u64,
        params: &ListBookings,
    ) -> Result<Vec<Booking>> {
        let params = params.clone();
        self.with_engine(move |engine, now| {
            if params.owner {
                engine.list_for_owner(requester_id, &params, now)
            } else {
                engine.list_for_booker(requester_id, &params, now)
            }
        })
        .await
    }

    /// Whether the user may comment on the item right now.
    pub async fn can_comment(&self, user_id: u64, item_id: u64) -> Result<bool> {
        self.with_engine(move |engine, now| engine.can_comment(user_id, item_id, now))
            .await
    }

    /// Comments on an item the author has rented.
    pub async fn add_comment(&self, author_id: u64, params: &AddComment) -> Result<Comment> {
        let params = params.clone();
        self.with_engine(move |engine, now| engine.add_comment(&params, author_id, now))
            .await
    }

    /// Comments on an item, newest first.
    pub async fn list_comments(&self, params: &Id) -> Result<Vec<Comment>> {
        let item_id = params.id;
        self.with_engine(move |engine, _| engine.list_comments(item_id))
            .await
    }

    /// An item with its comments and, for the owner, its neighbouring
    /// approved bookings.
    pub async fn item_bookings(&self, requester_id: u64, params: &Id) -> Result<ItemBookings> {
        let item_id = params.id;
        self.with_engine(move |engine, now| engine.item_bookings(item_id, requester_id, now))
            .await
    }

    /// One page of the owner's items, each with its comments and
    /// neighbouring approved bookings.
    pub async fn owner_items(
        &self,
        owner_id: u64,
        params: &ListItems,
    ) -> Result<Vec<ItemBookings>> {
        let params = params.clone();
        self.with_engine(move |engine, now| engine.owner_items(owner_id, &params, now))
            .await
    }
}
