//! Builder for creating and configuring Lender instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Lender;
use crate::{
    clock::{Clock, SystemClock},
    db::Database,
    engine::AccessPolicy,
    error::{LendError, Result},
};

/// Builder for creating and configuring Lender instances.
#[derive(Clone)]
pub struct LenderBuilder {
    database_path: Option<PathBuf>,
    clock: Arc<dyn Clock>,
    policy: AccessPolicy,
}

impl LenderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            clock: Arc::new(SystemClock),
            policy: AccessPolicy::default(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lendbox/lendbox.db` or
    /// `~/.local/share/lendbox/lendbox.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the system clock, e.g. with a [`crate::clock::FixedClock`]
    /// in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Chooses how authority failures are reported.
    pub fn with_access_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the configured lender.
    ///
    /// # Errors
    ///
    /// Returns `LendError::FileSystem` if the database directory cannot be
    /// created and `LendError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Lender> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LendError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), LendError>(())
        })
        .await
        .map_err(|e| LendError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!("lender ready at {}", db_path.display());
        Ok(Lender::new(db_path, self.clock, self.policy))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lendbox")
            .place_data_file("lendbox.db")
            .map_err(|e| LendError::XdgDirectory(e.to_string()))
    }
}

impl Default for LenderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
