//! Booking creation, decision and retrieval.

use jiff::Timestamp;
use log::{debug, info};

use super::{may_act, Action, BookingEngine};
use crate::{
    db::utils::stored,
    error::{LendError, Result},
    models::{Booking, BookingDetails, BookingStatus, NewBooking},
    params::CreateBooking,
    store::Store,
};

impl<S: Store> BookingEngine<'_, S> {
    /// Requests a booking of an item on behalf of `requester_id`.
    ///
    /// The window is validated first, at the microsecond precision the store
    /// keeps, then the preconditions in order: the
    /// requester exists, the item exists, the item is available, and the
    /// requester does not own the item. The first failure wins and nothing is
    /// written. The new booking always starts out `Waiting`.
    pub fn create_booking(
        &mut self,
        params: &CreateBooking,
        requester_id: u64,
        now: Timestamp,
    ) -> Result<Booking> {
        // Checks run on the instants as they will be persisted
        let start = stored(params.start)?;
        let end = stored(params.end)?;
        let now = stored(now)?;

        if end <= start {
            return Err(LendError::invalid_input("end").with_reason(format!(
                "must be after start ({end} <= {start})"
            )));
        }
        if start < now {
            return Err(LendError::invalid_input("start")
                .with_reason(format!("must not be in the past ({start})")));
        }

        self.require_user(requester_id)?;
        let item = self.require_item(params.item_id)?;

        if !item.available {
            debug!("item {} is not available for booking", item.id);
            return Err(LendError::ItemNotAvailable { id: item.id });
        }
        if item.is_owned_by(requester_id) {
            debug!("user {requester_id} tried to book own item {}", item.id);
            return Err(self.policy.deny_self_booking(requester_id, item.id));
        }

        let booking = self.store.insert_booking(&NewBooking {
            item_id: item.id,
            booker_id: requester_id,
            start,
            end,
            status: BookingStatus::Waiting,
        })?;

        info!(
            "booking {} created for item {} by user {}",
            booking.id, booking.item_id, booking.booker_id
        );
        Ok(booking)
    }

    /// Approves or rejects a waiting booking. Only the item's owner may
    /// decide, and only once.
    ///
    /// The write is a compare-and-swap on the `Waiting` status: when another
    /// decision lands between the check and the write, this call fails with
    /// [`LendError::AlreadyDecided`] instead of overwriting it.
    pub fn update_booking_status(
        &mut self,
        booking_id: u64,
        approve: bool,
        requester_id: u64,
    ) -> Result<Booking> {
        let booking = self.require_booking(booking_id)?;
        let item = self.require_item(booking.item_id)?;

        if !may_act(requester_id, &item, &booking, Action::Decide) {
            debug!("user {requester_id} may not decide booking {booking_id}");
            return Err(self.policy.deny_booking(requester_id, booking_id));
        }

        if booking.status.is_terminal() {
            return Err(LendError::AlreadyDecided {
                id: booking_id,
                status: booking.status,
            });
        }

        let target = BookingStatus::decided(approve);
        match self
            .store
            .update_status_if(booking_id, BookingStatus::Waiting, target)?
        {
            Some(updated) => {
                info!("booking {booking_id} moved to {}", updated.status.as_str());
                Ok(updated)
            }
            None => {
                // Lost the race: report whatever decision won.
                let current = self.require_booking(booking_id)?;
                Err(LendError::AlreadyDecided {
                    id: booking_id,
                    status: current.status,
                })
            }
        }
    }

    /// Fetches a booking with its item and booker. Visible to the item's
    /// owner and to the booker.
    pub fn get_booking(&self, booking_id: u64, requester_id: u64) -> Result<BookingDetails> {
        let booking = self.require_booking(booking_id)?;
        let item = self.require_item(booking.item_id)?;

        if !may_act(requester_id, &item, &booking, Action::View) {
            debug!("user {requester_id} may not view booking {booking_id}");
            return Err(self.policy.deny_booking(requester_id, booking_id));
        }

        let booker = self.require_user(booking.booker_id)?;
        Ok(BookingDetails {
            booking,
            item,
            booker,
        })
    }
}
