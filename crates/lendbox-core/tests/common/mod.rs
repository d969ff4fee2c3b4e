use std::sync::Arc;

use jiff::Timestamp;
use lendbox_core::{FixedClock, Lender, LenderBuilder};
use tempfile::TempDir;

/// Fixed starting instant shared by the integration tests.
pub fn epoch() -> Timestamp {
    "2031-03-01T12:00:00Z".parse().expect("valid timestamp")
}

/// Helper function to create a test lender driven by a fixed clock
pub async fn create_test_lender() -> (TempDir, Lender, Arc<FixedClock>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let clock = Arc::new(FixedClock::new(epoch()));
    let lender = LenderBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(clock.clone())
        .build()
        .await
        .expect("Failed to create lender");
    (temp_dir, lender, clock)
}
