mod common;

use common::{create_test_lender, epoch};
use jiff::SignedDuration;
use lendbox_core::{
    params::{
        AddComment, CreateBooking, CreateItem, CreateRequest, CreateUser, DecideBooking, Id,
        ListBookings, ListRequests, SearchItems,
    },
    BookingStatus, ErrorKind, Lender, LenderBuilder,
};

async fn user(lender: &Lender, name: &str) -> u64 {
    lender
        .create_user(&CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
        .await
        .expect("Failed to create user")
        .id
}

async fn item(lender: &Lender, owner_id: u64, name: &str) -> u64 {
    lender
        .create_item(
            owner_id,
            &CreateItem {
                name: name.to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create item")
        .id
}

fn hours_from_epoch(start: i64, end: i64, item_id: u64) -> CreateBooking {
    CreateBooking {
        item_id,
        start: epoch() + SignedDuration::from_hours(start),
        end: epoch() + SignedDuration::from_hours(end),
    }
}

fn listing(state: &str, owner: bool) -> ListBookings {
    ListBookings {
        state: state.to_string(),
        owner,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_rental_journey() {
    let (_temp_dir, lender, clock) = create_test_lender().await;
    let owner = user(&lender, "Owner").await;
    let renter = user(&lender, "Renter").await;
    let bike = item(&lender, owner, "Bike").await;

    let booking = lender
        .create_booking(renter, &hours_from_epoch(1, 2, bike))
        .await
        .unwrap();

    let waiting = lender.list_bookings(owner, &listing("WAITING", true)).await.unwrap();
    assert_eq!(waiting.len(), 1);
    assert_eq!(waiting[0].id, booking.id);

    lender
        .decide_booking(
            owner,
            &DecideBooking {
                booking_id: booking.id,
                approved: true,
            },
        )
        .await
        .unwrap();

    let future = lender.list_bookings(renter, &listing("future", false)).await.unwrap();
    assert_eq!(future.len(), 1);

    clock.advance(SignedDuration::from_mins(90));
    let current = lender.list_bookings(renter, &listing("CURRENT", false)).await.unwrap();
    assert_eq!(current.len(), 1);
    assert!(lender.list_bookings(renter, &listing("PAST", false)).await.unwrap().is_empty());

    let comment = lender
        .add_comment(
            renter,
            &AddComment {
                item_id: bike,
                text: "Smooth gears".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(comment.author_id, renter);

    clock.advance(SignedDuration::from_hours(1));
    let past = lender.list_bookings(renter, &listing("PAST", false)).await.unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].status, BookingStatus::Approved);

    let summary = lender.item_bookings(owner, &Id { id: bike }).await.unwrap();
    assert_eq!(summary.last_booking.map(|b| b.id), Some(booking.id));
    assert_eq!(summary.comments.len(), 1);
}

#[tokio::test]
async fn test_decisions_are_final() {
    let (_temp_dir, lender, _clock) = create_test_lender().await;
    let owner = user(&lender, "Owner").await;
    let renter = user(&lender, "Renter").await;
    let tent = item(&lender, owner, "Tent").await;

    let booking = lender
        .create_booking(renter, &hours_from_epoch(2, 4, tent))
        .await
        .unwrap();

    let reject = DecideBooking {
        booking_id: booking.id,
        approved: false,
    };
    lender.decide_booking(owner, &reject).await.unwrap();

    let err = lender
        .decide_booking(
            owner,
            &DecideBooking {
                booking_id: booking.id,
                approved: true,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAvailable);

    let details = lender.get_booking(renter, &Id { id: booking.id }).await.unwrap();
    assert_eq!(details.booking.status, BookingStatus::Rejected);
}

#[tokio::test]
async fn test_foreign_bookings_are_hidden() {
    let (_temp_dir, lender, _clock) = create_test_lender().await;
    let owner = user(&lender, "Owner").await;
    let renter = user(&lender, "Renter").await;
    let stranger = user(&lender, "Stranger").await;
    let canoe = item(&lender, owner, "Canoe").await;

    let booking = lender
        .create_booking(renter, &hours_from_epoch(1, 5, canoe))
        .await
        .unwrap();

    let err = lender
        .get_booking(stranger, &Id { id: booking.id })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = lender
        .get_booking(stranger, &Id { id: booking.id + 100 })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_bad_state_token() {
    let (_temp_dir, lender, _clock) = create_test_lender().await;
    let renter = user(&lender, "Renter").await;

    let err = lender
        .list_bookings(renter, &listing("alll", false))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadState);
    assert_eq!(err.to_string(), "Unknown state: alll");
}

#[tokio::test]
async fn test_request_answered_then_found_and_booked() {
    let (_temp_dir, lender, _clock) = create_test_lender().await;
    let owner = user(&lender, "Owner").await;
    let renter = user(&lender, "Renter").await;

    let request = lender
        .create_request(
            renter,
            &CreateRequest {
                description: "Anyone have a stand mixer?".to_string(),
            },
        )
        .await
        .unwrap();

    let open = lender
        .list_requests(
            owner,
            &ListRequests {
                others: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, request.id);

    let mixer = lender
        .create_item(
            owner,
            &CreateItem {
                name: "Stand mixer".to_string(),
                description: Some("Five litre bowl".to_string()),
                request_id: Some(request.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let mine = lender
        .list_requests(renter, &ListRequests::default())
        .await
        .unwrap();
    assert_eq!(mine[0].items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![mixer.id]);

    let found = lender
        .search_items(&SearchItems {
            text: "MIXER".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    let booking = lender
        .create_booking(renter, &hours_from_epoch(1, 5, found[0].id))
        .await
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Waiting);
}

#[tokio::test]
async fn test_data_survives_rebuild() {
    let (temp_dir, lender, _clock) = create_test_lender().await;
    let owner = user(&lender, "Owner").await;
    drop(lender);

    let reopened = LenderBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to reopen lender");

    let found = reopened.get_user(&Id { id: owner }).await.unwrap();
    assert_eq!(found.map(|u| u.name), Some("Owner".to_string()));
}

#[tokio::test]
async fn test_builder_creates_missing_directories() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b").join("lendbox.db");

    let _lender = LenderBuilder::new()
        .with_database_path(Some(&nested))
        .build()
        .await
        .expect("Failed to create lender");

    assert!(nested.exists());
}
