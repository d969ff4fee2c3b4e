//! Async facade over the booking engine.
//!
//! [`Lender`] is what the CLI and MCP server talk to. Each operation samples
//! the configured [`Clock`] once, opens a database connection on a blocking
//! task and runs the engine against it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │     Engine      │
//! │  (display       │───▶│ (booking_ops,   │───▶│  + Database     │
//! │   wrappers)     │    │  directory_ops, │    │                 │
//! │                 │    │  request_ops)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Lender`] instances with configuration
//! - [`booking_ops`]: Booking lifecycle, listings, comments and item
//!   summaries
//! - [`directory_ops`]: Users, item edits and item search
//! - [`request_ops`]: Item requests
//! - [`handlers`]: Operations returning display wrappers
//!
//! # Usage
//!
//! ```rust
//! use lendbox_core::{
//!     params::{CreateItem, CreateUser},
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
//!
//! let item = lender
//!     .create_item(
//!         owner.id,
//!         &CreateItem {
//!             name: "Drill".to_string(),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//! assert!(item.available);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use jiff::Timestamp;
use tokio::task;

use crate::{
    clock::Clock,
    db::{utils::stored, Database},
    engine::{AccessPolicy, BookingEngine},
    error::{LendError, Result},
};

pub mod booking_ops;
pub mod builder;
pub mod directory_ops;
pub mod handlers;
pub mod request_ops;


pub use builder::LenderBuilder;

/// Main interface for the lending service.
pub struct Lender {
    pub(crate) db_path: PathBuf,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) policy: AccessPolicy,
}

impl Lender {
    pub(crate) fn new(db_path: PathBuf, clock: Arc<dyn Clock>, policy: AccessPolicy) -> Self {
        Self {
            db_path,
            clock,
            policy,
        }
    }

    /// The instant the clock reports right now.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn access_policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| LendError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Runs `op` with an engine and the instant sampled for this call,
    /// truncated to the precision the store keeps.
    pub(crate) async fn with_engine<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut BookingEngine<'_, Database>, Timestamp) -> Result<T> + Send + 'static,
    {
        let now = stored(self.clock.now())?;
        let policy = self.policy;

        self.with_database(move |db| {
            let mut engine = BookingEngine::new(db).with_policy(policy);
            op(&mut engine, now)
        })
        .await
    }
}
