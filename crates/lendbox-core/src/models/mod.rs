//! Data models for users, items, item requests, bookings and comments.
//!
//! This module contains the core domain models of the lendbox system. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! # Bookings
//!
//! A [`Booking`] carries a persisted [`BookingStatus`] (the lifecycle value)
//! and a rental window. Callers filter bookings with a [`BookingState`], a
//! query-only classification that combines the status with the window
//! relative to an instant supplied by the caller.
//!
//! ```rust
//! use jiff::Timestamp;
//! use lendbox_core::models::{Booking, BookingStatus};
//!
//! let booking = Booking {
//!     id: 1,
//!     item_id: 7,
//!     booker_id: 3,
//!     start: Timestamp::from_second(1_700_000_000).unwrap(),
//!     end: Timestamp::from_second(1_700_003_600).unwrap(),
//!     status: BookingStatus::Waiting,
//! };
//!
//! assert!(!booking.status.is_terminal());
//! assert!(booking.start < booking.end);
//! ```

pub mod booking;
pub mod comment;
pub mod filters;
pub mod item;
pub mod request;
pub mod status;
pub mod summary;
pub mod user;


pub use booking::{Booking, BookingDetails, NewBooking};
pub use comment::{Comment, NewComment};
pub use filters::{BookingQuery, PageRequest, Party, Selection};
pub use item::{Item, NewItem};
pub use request::{ItemRequest, NewItemRequest};
pub use status::{BookingState, BookingStatus};
pub use summary::ItemBookings;
pub use user::User;
