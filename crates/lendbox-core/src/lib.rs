//! Core library for the lendbox item-sharing service.
//!
//! Users list items, other users request time-bounded bookings of them, the
//! owner approves or rejects each request once, and renters who have actually
//! used an item may comment on it.
//!
//! # Layers
//!
//! - **Engine** ([`engine`]): booking lifecycle, time-relative listings and
//!   the comment eligibility gate, generic over the [`store`] traits and
//!   evaluated at an explicit instant
//! - **Storage** ([`db`]): SQLite implementation of the store traits
//! - **Facade** ([`lender`]): async [`Lender`] that samples a [`clock`] and
//!   runs engine operations on the blocking pool
//! - **Display** ([`display`]): markdown rendering of models and results
//!
//! # Quick Start
//!
//! ```rust
//! use lendbox_core::{
//!     params::{CreateBooking, CreateItem, CreateUser, ListBookings},
//!     LenderBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let lender = LenderBuilder::new()
//!     .with_database_path(Some(dir.path().join("lendbox.db")))
//!     .build()
//!     .await?;
//!
//! let owner = lender
//!     .create_user(&CreateUser {
//!         name: "Ada".to_string(),
//!         email: "ada@example.com".to_string(),
//!     })
//!     .await?;
//! let renter = lender
//!     .create_user(&CreateUser {
//!         name: "Grace".to_string(),
//!         email: "grace@example.com".to_string(),
//!     })
//!     .await?;
//! let item = lender
//!     .create_item(
//!         owner.id,
//!         &CreateItem {
//!             name: "Drill".to_string(),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!
//! let start = lender.now() + jiff::SignedDuration::from_hours(1);
//! let booking = lender
//!     .create_booking(
//!         renter.id,
//!         &CreateBooking {
//!             item_id: item.id,
//!             start,
//!             end: start + jiff::SignedDuration::from_hours(2),
//!         },
//!     )
//!     .await?;
//! println!("{booking}");
//!
//! let waiting = lender
//!     .list_bookings(renter.id, &ListBookings::default())
//!     .await?;
//! assert_eq!(waiting.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod lender;
pub mod models;
pub mod params;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use display::{
    Bookings, Comments, CreateResult, ItemRequests, Items, LocalDateTime, OwnedItems, UpdateResult,
};
pub use engine::{AccessPolicy, BookingEngine};
pub use error::{ErrorKind, LendError, Result};
pub use lender::{Lender, LenderBuilder};
pub use models::{
    Booking, BookingDetails, BookingState, BookingStatus, Comment, Item, ItemBookings,
    ItemRequest, User,
};
