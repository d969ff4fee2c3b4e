//! Lender operations that return display wrappers, shared by the CLI and the
//! MCP server.

use super::Lender;
use crate::{
    display::{Bookings, Comments, CreateResult, ItemRequests, Items, OwnedItems, UpdateResult},
    error::Result,
    models::{Booking, BookingStatus, Comment, Item, ItemRequest, User},
    params::{
        AddComment, CreateBooking, CreateItem, CreateRequest, CreateUser, DecideBooking, Id,
        ListBookings, ListItems, ListRequests, SearchItems, UpdateItem,
    },
};

impl Lender {
    pub async fn create_user_result(&self, params: &CreateUser) -> Result<CreateResult<User>> {
        self.create_user(params).await.map(CreateResult::new)
    }

    pub async fn create_item_result(
        &self,
        owner_id: u64,
        params: &CreateItem,
    ) -> Result<CreateResult<Item>> {
        self.create_item(owner_id, params).await.map(CreateResult::new)
    }

    /// Item edit, reported with every field that actually changed.
    pub async fn update_item_result(
        &self,
        requester_id: u64,
        params: &UpdateItem,
    ) -> Result<UpdateResult<Item>> {
        // Get item before update to report changes
        let before = self.get_item(&Id { id: params.item_id }).await?;
        let item = self.update_item(requester_id, params).await?;

        let changes = before
            .map(|before| item_changes(&before, &item))
            .unwrap_or_default();
        Ok(UpdateResult::with_changes(item, changes))
    }

    pub async fn search_items_result(&self, params: &SearchItems) -> Result<Items> {
        self.search_items(params).await.map(Items)
    }

    pub async fn owner_items_result(
        &self,
        owner_id: u64,
        params: &ListItems,
    ) -> Result<OwnedItems> {
        self.owner_items(owner_id, params).await.map(OwnedItems)
    }

    pub async fn create_request_result(
        &self,
        requester_id: u64,
        params: &CreateRequest,
    ) -> Result<CreateResult<ItemRequest>> {
        self.create_request(requester_id, params)
            .await
            .map(CreateResult::new)
    }

    pub async fn list_requests_result(
        &self,
        requester_id: u64,
        params: &ListRequests,
    ) -> Result<ItemRequests> {
        self.list_requests(requester_id, params)
            .await
            .map(ItemRequests)
    }

    pub async fn create_booking_result(
        &self,
        requester_id: u64,
        params: &CreateBooking,
    ) -> Result<CreateResult<Booking>> {
        self.create_booking(requester_id, params)
            .await
            .map(CreateResult::new)
    }

    /// Decision outcome, reported as a status change away from `WAITING`.
    pub async fn decide_booking_result(
        &self,
        requester_id: u64,
        params: &DecideBooking,
    ) -> Result<UpdateResult<Booking>> {
        let booking = self.decide_booking(requester_id, params).await?;
        let change = format!("Status: {} -> {}", BookingStatus::Waiting, booking.status);
        Ok(UpdateResult::with_changes(booking, vec![change]))
    }

    pub async fn list_bookings_result(
        &self,
        requester_id: u64,
        params: &ListBookings,
    ) -> Result<Bookings> {
        self.list_bookings(requester_id, params).await.map(Bookings)
    }

    pub async fn add_comment_result(
        &self,
        author_id: u64,
        params: &AddComment,
    ) -> Result<CreateResult<Comment>> {
        self.add_comment(author_id, params).await.map(CreateResult::new)
    }

    pub async fn list_comments_result(&self, params: &Id) -> Result<Comments> {
        self.list_comments(params).await.map(Comments)
    }
}

fn open_or_closed(available: bool) -> &'static str {
    if available {
        "open"
    } else {
        "closed"
    }
}

fn item_changes(before: &Item, after: &Item) -> Vec<String> {
    let mut changes = Vec::new();
    if before.name != after.name {
        changes.push(format!("Name: {} -> {}", before.name, after.name));
    }
    if before.description != after.description {
        changes.push(match &after.description {
            Some(_) => "Description: updated".to_string(),
            None => "Description: cleared".to_string(),
        });
    }
    if before.available != after.available {
        changes.push(format!(
            "Availability: {} -> {}",
            open_or_closed(before.available),
            open_or_closed(after.available)
        ));
    }
    changes
}
