//! Comment eligibility and the item summaries.

use jiff::Timestamp;
use log::{debug, info};

use super::{require_text, BookingEngine};
use crate::{
    error::{LendError, Result},
    models::{Comment, Item, ItemBookings, NewComment, PageRequest},
    params::{AddComment, ListItems},
    store::Store,
};

impl<S: Store> BookingEngine<'_, S> {
    /// Whether the user holds an approved booking of the item that started
    /// before `now`. Ongoing rentals qualify.
    pub fn can_comment(&self, user_id: u64, item_id: u64, now: Timestamp) -> Result<bool> {
        self.store
            .has_started_approved_booking(user_id, item_id, now)
    }

    /// Adds a comment stamped with `now`, gated on [`Self::can_comment`].
    pub fn add_comment(
        &mut self,
        params: &AddComment,
        author_id: u64,
        now: Timestamp,
    ) -> Result<Comment> {
        self.require_user(author_id)?;
        let item = self.require_item(params.item_id)?;
        require_text("text", &params.text)?;

        if !self.can_comment(author_id, item.id, now)? {
            debug!("user {author_id} has no started booking of item {}", item.id);
            return Err(LendError::CommentNotAllowed {
                user_id: author_id,
                item_id: item.id,
            });
        }

        let comment = self.store.insert_comment(&NewComment {
            item_id: item.id,
            author_id,
            text: params.text.clone(),
            created_at: now,
        })?;

        info!("comment {} added to item {} by user {author_id}", comment.id, item.id);
        Ok(comment)
    }

    /// Comments on an item, newest first.
    pub fn list_comments(&self, item_id: u64) -> Result<Vec<Comment>> {
        self.require_item(item_id)?;
        self.store.comments_for_item(item_id)
    }

    /// An item with its comments. The owner also sees the latest approved
    /// booking that has started and the earliest one that has not.
    pub fn item_bookings(
        &self,
        item_id: u64,
        requester_id: u64,
        now: Timestamp,
    ) -> Result<ItemBookings> {
        let item = self.require_item(item_id)?;
        let with_neighbours = item.is_owned_by(requester_id);
        self.summarize(item, with_neighbours, now)
    }

    /// One page of the items a user owns, oldest first, each with its
    /// comments and neighbouring approved bookings.
    pub fn owner_items(
        &self,
        owner_id: u64,
        params: &ListItems,
        now: Timestamp,
    ) -> Result<Vec<ItemBookings>> {
        let page = PageRequest::new(params.from, params.size)?;
        self.require_user(owner_id)?;

        debug!(
            "listing items of user {owner_id} from {} size {}",
            page.from, page.size
        );
        self.store
            .items_by_owner(owner_id, page)?
            .into_iter()
            .map(|item| self.summarize(item, true, now))
            .collect()
    }

    fn summarize(
        &self,
        item: Item,
        with_neighbours: bool,
        now: Timestamp,
    ) -> Result<ItemBookings> {
        let comments = self.store.comments_for_item(item.id)?;

        let (last_booking, next_booking) = if with_neighbours {
            (
                self.store.last_approved_booking(item.id, now)?,
                self.store.next_approved_booking(item.id, now)?,
            )
        } else {
            (None, None)
        };

        Ok(ItemBookings {
            item,
            last_booking,
            next_booking,
            comments,
        })
    }
}
