use jiff::{SignedDuration, Timestamp};
use lendbox_core::{
    models::{
        BookingQuery, BookingStatus, NewBooking, NewComment, NewItem, NewItemRequest, PageRequest,
        Party, Selection,
    },
    store::{BookingStore, CommentStore, ItemDirectory, UserDirectory},
    Database, LendError,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn at(hours: i64) -> Timestamp {
    let base: Timestamp = "2032-01-01T00:00:00Z".parse().unwrap();
    base + SignedDuration::from_hours(hours)
}

fn new_item(owner_id: u64, name: &str, description: Option<&str>) -> NewItem {
    NewItem {
        owner_id,
        name: name.to_string(),
        description: description.map(String::from),
        available: true,
        request_id: None,
    }
}

/// Owner, renter and one item owned by the owner.
fn seed(db: &mut Database) -> (u64, u64, u64) {
    let owner = db.create_user("Owner", "owner@example.com").unwrap();
    let renter = db.create_user("Renter", "renter@example.com").unwrap();
    let item = db
        .create_item(&new_item(owner.id, "Saw", Some("Japanese pull saw")))
        .unwrap();
    (owner.id, renter.id, item.id)
}

fn new_booking(item_id: u64, booker_id: u64, start: i64, end: i64) -> NewBooking {
    NewBooking {
        item_id,
        booker_id,
        start: at(start),
        end: at(end),
        status: BookingStatus::Waiting,
    }
}

fn query(party: Party, selection: Selection) -> BookingQuery {
    BookingQuery {
        party,
        selection,
        page: PageRequest::default(),
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_users_and_items_roundtrip() {
    let (_temp_file, mut db) = create_test_db();
    let (owner, _, item) = seed(&mut db);

    let user = db.find_user(owner).unwrap().expect("User should exist");
    assert_eq!(user.email, "owner@example.com");

    let stored = db.find_item(item).unwrap().expect("Item should exist");
    assert_eq!(stored.owner_id, owner);
    assert_eq!(stored.description.as_deref(), Some("Japanese pull saw"));
    assert!(stored.available);

    assert!(stored.request_id.is_none());

    let mut edited = stored.clone();
    edited.name = "Pull saw".to_string();
    edited.description = None;
    edited.available = false;
    assert!(db.update_item(&edited).unwrap());
    assert_eq!(db.get_item(item).unwrap(), Some(edited.clone()));

    edited.id = 999;
    assert!(!db.update_item(&edited).unwrap());
}

#[test]
fn test_duplicate_email_is_invalid_input() {
    let (_temp_file, mut db) = create_test_db();
    db.create_user("A", "same@example.com").unwrap();

    let err = db.create_user("B", "same@example.com").unwrap_err();
    assert!(matches!(err, LendError::InvalidInput { ref field, .. } if field == "email"));
}

#[test]
fn test_item_requires_existing_owner() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.create_item(&new_item(77, "Orphan", None)).unwrap_err();
    assert!(matches!(err, LendError::Database { .. }));
}

#[test]
fn test_booking_persists_across_connections() {
    let (temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);

    let booking = db.insert_booking(&new_booking(item, renter, 1, 3)).unwrap();
    drop(db);

    let reopened = Database::new(temp_file.path()).unwrap();
    let found = reopened
        .find_booking(booking.id)
        .unwrap()
        .expect("Booking should exist");
    assert_eq!(found, booking);
    assert_eq!(found.status, BookingStatus::Waiting);
}

#[test]
fn test_booking_window_is_truncated_to_microseconds() {
    let (_temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);

    let mut precise = new_booking(item, renter, 1, 2);
    precise.start = Timestamp::new(at(1).as_second(), 999_999_999).unwrap();

    let booking = db.insert_booking(&precise).unwrap();
    assert_eq!(booking.start.subsec_nanosecond(), 999_999_000);
    assert_eq!(db.find_booking(booking.id).unwrap().unwrap().start, booking.start);
}

#[test]
fn test_empty_window_violates_check() {
    let (_temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);

    let err = db.insert_booking(&new_booking(item, renter, 2, 2)).unwrap_err();
    assert!(matches!(err, LendError::Database { .. }));
}

#[test]
fn test_update_status_if_is_compare_and_swap() {
    let (_temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);
    let booking = db.insert_booking(&new_booking(item, renter, 1, 2)).unwrap();

    let approved = db
        .update_status_if(booking.id, BookingStatus::Waiting, BookingStatus::Approved)
        .unwrap()
        .expect("First decision should win");
    assert_eq!(approved.status, BookingStatus::Approved);

    let second = db
        .update_status_if(booking.id, BookingStatus::Waiting, BookingStatus::Rejected)
        .unwrap();
    assert!(second.is_none());
    assert_eq!(
        db.find_booking(booking.id).unwrap().unwrap().status,
        BookingStatus::Approved
    );

    let missing = db
        .update_status_if(999, BookingStatus::Waiting, BookingStatus::Approved)
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_query_orders_by_start_then_id_descending() {
    let (_temp_file, mut db) = create_test_db();
    let (owner, renter, item) = seed(&mut db);

    let a = db.insert_booking(&new_booking(item, renter, 5, 6)).unwrap();
    let b = db.insert_booking(&new_booking(item, renter, 1, 2)).unwrap();
    let c = db.insert_booking(&new_booking(item, renter, 5, 7)).unwrap();

    let rows = db.query_bookings(&query(Party::Booker(renter), Selection::Any)).unwrap();
    let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![c.id, a.id, b.id]);

    let by_owner = db.query_bookings(&query(Party::Owner(owner), Selection::Any)).unwrap();
    assert_eq!(by_owner, rows);

    let none = db.query_bookings(&query(Party::Booker(owner), Selection::Any)).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_query_selections() {
    let (_temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);

    let past = db.insert_booking(&new_booking(item, renter, 1, 2)).unwrap();
    let current = db.insert_booking(&new_booking(item, renter, 3, 5)).unwrap();
    let future = db.insert_booking(&new_booking(item, renter, 6, 8)).unwrap();
    db.update_status_if(past.id, BookingStatus::Waiting, BookingStatus::Rejected)
        .unwrap();

    let select = |selection| {
        db.query_bookings(&query(Party::Booker(renter), selection))
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect::<Vec<_>>()
    };

    assert_eq!(select(Selection::Overlapping(at(4))), vec![current.id]);
    assert_eq!(select(Selection::Overlapping(at(5))), vec![current.id]);
    assert_eq!(select(Selection::EndedBefore(at(4))), vec![past.id]);
    assert_eq!(select(Selection::StartingAfter(at(4))), vec![future.id]);
    assert_eq!(
        select(Selection::WithStatus(BookingStatus::Rejected)),
        vec![past.id]
    );
    assert_eq!(
        select(Selection::WithStatus(BookingStatus::Waiting)),
        vec![future.id, current.id]
    );
}

#[test]
fn test_query_page_window() {
    let (_temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);

    for h in 0..5 {
        db.insert_booking(&new_booking(item, renter, h * 2, h * 2 + 1)).unwrap();
    }

    let page = BookingQuery {
        party: Party::Booker(renter),
        selection: Selection::Any,
        page: PageRequest::new(1, 2).unwrap(),
    };
    let rows = db.query_bookings(&page).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].start, at(6));
    assert_eq!(rows[1].start, at(4));
}

#[test]
fn test_started_approved_booking_check() {
    let (_temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);
    let booking = db.insert_booking(&new_booking(item, renter, 2, 4)).unwrap();

    assert!(!db.has_started_approved_booking(renter, item, at(3)).unwrap());

    db.update_status_if(booking.id, BookingStatus::Waiting, BookingStatus::Approved)
        .unwrap();

    assert!(!db.has_started_approved_booking(renter, item, at(1)).unwrap());
    assert!(!db.has_started_approved_booking(renter, item, at(2)).unwrap());
    assert!(db.has_started_approved_booking(renter, item, at(3)).unwrap());
    assert!(db.has_started_approved_booking(renter, item, at(10)).unwrap());
}

#[test]
fn test_neighbouring_approved_bookings() {
    let (_temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);

    let first = db.insert_booking(&new_booking(item, renter, 1, 2)).unwrap();
    let second = db.insert_booking(&new_booking(item, renter, 4, 5)).unwrap();
    let third = db.insert_booking(&new_booking(item, renter, 8, 9)).unwrap();
    let waiting = db.insert_booking(&new_booking(item, renter, 6, 7)).unwrap();
    for id in [first.id, second.id, third.id] {
        db.update_status_if(id, BookingStatus::Waiting, BookingStatus::Approved)
            .unwrap();
    }

    let last = db.last_approved_booking(item, at(5)).unwrap();
    assert_eq!(last.map(|b| b.id), Some(second.id));

    // Waiting bookings are skipped
    let next = db.next_approved_booking(item, at(5)).unwrap();
    assert_eq!(next.map(|b| b.id), Some(third.id));
    assert_ne!(third.id, waiting.id);

    // Start equal to now counts as last, not next
    assert_eq!(
        db.last_approved_booking(item, at(4)).unwrap().map(|b| b.id),
        Some(second.id)
    );
    assert!(db.next_approved_booking(item, at(9)).unwrap().is_none());
    assert!(db.last_approved_booking(item, at(0)).unwrap().is_none());
}

#[test]
fn test_comments_newest_first() {
    let (_temp_file, mut db) = create_test_db();
    let (_, renter, item) = seed(&mut db);

    for (h, text) in [(1, "one"), (3, "three"), (2, "two")] {
        db.insert_comment(&NewComment {
            item_id: item,
            author_id: renter,
            text: text.to_string(),
            created_at: at(h),
        })
        .unwrap();
    }

    let texts: Vec<String> = db
        .comments_for_item(item)
        .unwrap()
        .into_iter()
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, vec!["three", "two", "one"]);
    assert!(db.comments_for_item(999).unwrap().is_empty());
}

#[test]
fn test_items_by_owner_pages_by_id() {
    let (_temp_file, mut db) = create_test_db();
    let (owner, renter, first) = seed(&mut db);
    let second = db.create_item(&new_item(owner, "Plane", None)).unwrap();
    let third = db.create_item(&new_item(owner, "Chisel", None)).unwrap();
    db.create_item(&new_item(renter, "Rake", None)).unwrap();

    let all = db.items_by_owner(owner, PageRequest::default()).unwrap();
    let ids: Vec<u64> = all.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![first, second.id, third.id]);

    let page = db.items_by_owner(owner, PageRequest::new(1, 1).unwrap()).unwrap();
    assert_eq!(page, vec![second]);
}

#[test]
fn test_search_matches_name_or_description_literally() {
    let (_temp_file, mut db) = create_test_db();
    let (owner, _, saw) = seed(&mut db);
    let drill = db
        .create_item(&new_item(owner, "Drill", Some("100% cordless, SAW blade kit")))
        .unwrap();
    let mut hidden = new_item(owner, "Saw horse", None);
    hidden.available = false;
    db.create_item(&hidden).unwrap();

    let ids = |text: &str| {
        db.search_items(text, PageRequest::default())
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect::<Vec<_>>()
    };

    assert_eq!(ids("saw"), vec![saw, drill.id]);
    assert_eq!(ids("0% c"), vec![drill.id]);
    assert!(ids("_").is_empty());
    assert!(ids("hammer").is_empty());
}

#[test]
fn test_requests_with_answering_items() {
    let (_temp_file, mut db) = create_test_db();
    let (owner, renter, _) = seed(&mut db);

    let older = db
        .create_request(&NewItemRequest {
            requester_id: renter,
            description: "Ladder".to_string(),
            created_at: at(1),
        })
        .unwrap();
    let newer = db
        .create_request(&NewItemRequest {
            requester_id: renter,
            description: "Wheelbarrow".to_string(),
            created_at: at(2),
        })
        .unwrap();

    let mut answer = new_item(owner, "Ladder 3m", None);
    answer.request_id = Some(older.id);
    let answer = db.create_item(&answer).unwrap();

    let found = db.get_request(older.id).unwrap().expect("Request should exist");
    assert_eq!(found.created_at, at(1));
    assert_eq!(found.items, vec![answer]);
    assert!(db.get_request(999).unwrap().is_none());

    let own = db
        .get_requests_by_requester(renter, PageRequest::default())
        .unwrap();
    let ids: Vec<u64> = own.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(own[1].items.len(), 1);

    let seen_by_owner = db.get_requests_by_others(owner, PageRequest::default()).unwrap();
    assert_eq!(seen_by_owner.len(), 2);
    assert!(db
        .get_requests_by_others(renter, PageRequest::default())
        .unwrap()
        .is_empty());
}
