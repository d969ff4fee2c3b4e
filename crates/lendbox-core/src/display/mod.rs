//! Markdown rendering for domain models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes are wrapped in newtypes so every
//! interface prints the same markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Booking, Item) │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Bookings, Comments, Items,
//!   OwnedItems, ItemRequests)
//! - [`results`]: Operation result types (CreateResult, UpdateResult)
//! - [`datetime`]: Timestamp formatting in the system timezone
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use lendbox_core::{display::CreateResult, models::User};
//!
//! let user = User {
//!     id: 3,
//!     name: "Ada".to_string(),
//!     email: "ada@example.com".to_string(),
//! };
//!
//! let output = CreateResult::new(user).to_string();
//! assert!(output.contains("Created user with ID: 3"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Bookings, Comments, ItemRequests, Items, OwnedItems};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, UpdateResult};
