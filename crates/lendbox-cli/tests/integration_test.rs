//! Integration tests comparing CLI output with the core Display impls
//!
//! The CLI, in plain mode, must print exactly what the lender's results
//! render to, so MCP and terminal users see the same text.

use std::process::Command;

use lendbox_core::{
    display::{Bookings, CreateResult, Items},
    params::{Id, ListBookings, SearchItems},
    Lender, LenderBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test lender with a temporary database
async fn create_test_lender() -> (Lender, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let lender = LenderBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create lender");

    (lender, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lendbox"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    assert!(
        output.status.success(),
        "lendbox {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn seed_booking(db: &str) {
    run_cli_command(db, &["user", "add", "Olga", "olga@example.com"]);
    run_cli_command(db, &["user", "add", "Boris", "boris@example.com"]);
    run_cli_command(db, &["item", "add", "--as", "1", "Tent"]);
    run_cli_command(
        db,
        &[
            "booking",
            "create",
            "--as",
            "2",
            "--item",
            "1",
            "--start",
            "2099-07-01T09:00:00Z",
            "--end",
            "2099-07-08T09:00:00Z",
        ],
    );
}

#[tokio::test]
async fn test_user_creation_consistency() {
    let (lender, temp_dir) = create_test_lender().await;
    let db_path = temp_dir.path().join("test.db");
    let db = db_path.to_str().unwrap();

    let cli_output = run_cli_command(db, &["user", "add", "Olga", "olga@example.com"]);

    let user = lender
        .get_user(&Id { id: 1 })
        .await
        .unwrap()
        .expect("user created by the CLI");
    assert_eq!(cli_output, CreateResult::new(user).to_string());
}

#[tokio::test]
async fn test_show_booking_consistency() {
    let (lender, temp_dir) = create_test_lender().await;
    let db_path = temp_dir.path().join("test.db");
    let db = db_path.to_str().unwrap();
    seed_booking(db);

    let cli_output = run_cli_command(db, &["booking", "show", "1", "--as", "2"]);

    let details = lender.get_booking(2, &Id { id: 1 }).await.unwrap();
    assert_eq!(cli_output, details.to_string());
    assert!(cli_output.contains("- Item: Tent (ID: 1)"));
}

#[tokio::test]
async fn test_list_bookings_consistency() {
    let (lender, temp_dir) = create_test_lender().await;
    let db_path = temp_dir.path().join("test.db");
    let db = db_path.to_str().unwrap();
    seed_booking(db);

    let cli_output = run_cli_command(
        db,
        &["booking", "list", "--as", "1", "--owner", "--state", "waiting"],
    );

    let params = ListBookings {
        state: "waiting".to_string(),
        owner: true,
        ..Default::default()
    };
    let bookings: Bookings = lender.list_bookings_result(1, &params).await.unwrap();
    assert_eq!(
        cli_output,
        format!("## Bookings of your items (WAITING)\n\n{bookings}")
    );
    assert_eq!(bookings.len(), 1);
}

#[tokio::test]
async fn test_item_show_consistency() {
    let (lender, temp_dir) = create_test_lender().await;
    let db_path = temp_dir.path().join("test.db");
    let db = db_path.to_str().unwrap();
    seed_booking(db);

    let cli_output = run_cli_command(db, &["item", "show", "1", "--as", "1"]);

    let summary = lender.item_bookings(1, &Id { id: 1 }).await.unwrap();
    assert_eq!(cli_output, summary.to_string());
}

#[tokio::test]
async fn test_request_show_consistency() {
    let (lender, temp_dir) = create_test_lender().await;
    let db_path = temp_dir.path().join("test.db");
    let db = db_path.to_str().unwrap();
    seed_booking(db);
    run_cli_command(db, &["request", "add", "--as", "2", "Two-person tent"]);
    run_cli_command(db, &["item", "add", "--as", "1", "Dome tent", "--request", "1"]);

    let cli_output = run_cli_command(db, &["request", "show", "1", "--as", "2"]);

    let request = lender.get_request(2, &Id { id: 1 }).await.unwrap();
    assert_eq!(cli_output, request.to_string());
    assert_eq!(request.items.len(), 1);
}

#[tokio::test]
async fn test_item_search_consistency() {
    let (lender, temp_dir) = create_test_lender().await;
    let db_path = temp_dir.path().join("test.db");
    let db = db_path.to_str().unwrap();
    seed_booking(db);

    let cli_output = run_cli_command(db, &["item", "search", "tent"]);

    let params = SearchItems {
        text: "tent".to_string(),
        ..Default::default()
    };
    let items: Items = lender.search_items_result(&params).await.unwrap();
    assert_eq!(cli_output, format!("## Available items\n\n{items}"));
    assert_eq!(items.len(), 1);
}
