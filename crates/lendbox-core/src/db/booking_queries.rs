//! Booking persistence and classified queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row, ToSql};

use super::utils::{micros_column, parsed_column, stored, to_micros};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Booking, BookingQuery, BookingStatus, NewBooking, Party, Selection},
    store::BookingStore,
};

const BOOKING_COLUMNS: &str = "b.id, b.item_id, b.booker_id, b.start_at, b.end_at, b.status";
const INSERT_BOOKING_SQL: &str = "INSERT INTO bookings (item_id, booker_id, start_at, end_at, status) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_BOOKING_SQL: &str = "SELECT b.id, b.item_id, b.booker_id, b.start_at, b.end_at, b.status FROM bookings b WHERE b.id = ?1";
const UPDATE_BOOKING_STATUS_IF_SQL: &str =
    "UPDATE bookings SET status = ?1 WHERE id = ?2 AND status = ?3";
const CHECK_STARTED_APPROVED_SQL: &str = "SELECT EXISTS(SELECT 1 FROM bookings WHERE booker_id = ?1 AND item_id = ?2 AND status = ?3 AND start_at < ?4)";
const SELECT_LAST_APPROVED_SQL: &str = "SELECT b.id, b.item_id, b.booker_id, b.start_at, b.end_at, b.status FROM bookings b WHERE b.item_id = ?1 AND b.status = ?2 AND b.start_at <= ?3 ORDER BY b.start_at DESC, b.id DESC LIMIT 1";
const SELECT_NEXT_APPROVED_SQL: &str = "SELECT b.id, b.item_id, b.booker_id, b.start_at, b.end_at, b.status FROM bookings b WHERE b.item_id = ?1 AND b.status = ?2 AND b.start_at > ?3 ORDER BY b.start_at ASC, b.id ASC LIMIT 1";

impl super::Database {
    /// Persists a booking. Window instants are truncated to the stored
    /// precision and the returned booking reflects what was written.
    pub fn create_booking(&mut self, booking: &NewBooking) -> Result<Booking> {
        let start = stored(booking.start)?;
        let end = stored(booking.end)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_BOOKING_SQL,
            params![
                booking.item_id as i64,
                booking.booker_id as i64,
                to_micros(start),
                to_micros(end),
                booking.status.as_str()
            ],
        )
        .db_context("Failed to insert booking")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Booking {
            id,
            item_id: booking.item_id,
            booker_id: booking.booker_id,
            start,
            end,
            status: booking.status,
        })
    }

    /// Retrieves a booking by its ID.
    pub fn get_booking(&self, id: u64) -> Result<Option<Booking>> {
        self.connection
            .query_row(SELECT_BOOKING_SQL, params![id as i64], Self::build_booking_from_row)
            .optional()
            .db_context("Failed to query booking")
    }

    /// Atomically moves a booking from `expected` to `new`. Returns the
    /// updated booking, or None if the booking is missing or was no longer in
    /// the expected status.
    pub fn transition_booking(
        &mut self,
        id: u64,
        expected: BookingStatus,
        new: BookingStatus,
    ) -> Result<Option<Booking>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let changed = tx
            .execute(
                UPDATE_BOOKING_STATUS_IF_SQL,
                params![new.as_str(), id as i64, expected.as_str()],
            )
            .db_context("Failed to update booking status")?;

        if changed == 0 {
            return Ok(None);
        }

        let booking = tx
            .query_row(SELECT_BOOKING_SQL, params![id as i64], Self::build_booking_from_row)
            .optional()
            .db_context("Failed to query updated booking")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(booking)
    }

    /// Lists bookings matching a classified query.
    pub fn list_bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>> {
        let mut sql = format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings b JOIN items i ON i.id = b.item_id"
        );

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        match query.party {
            Party::Booker(id) => {
                conditions.push("b.booker_id = ?");
                params_vec.push(Box::new(id as i64));
            }
            Party::Owner(id) => {
                conditions.push("i.owner_id = ?");
                params_vec.push(Box::new(id as i64));
            }
        }

        match query.selection {
            Selection::Any => {}
            Selection::Overlapping(now) => {
                conditions.push("b.start_at <= ? AND b.end_at >= ?");
                params_vec.push(Box::new(to_micros(now)));
                params_vec.push(Box::new(to_micros(now)));
            }
            Selection::EndedBefore(now) => {
                conditions.push("b.end_at < ?");
                params_vec.push(Box::new(to_micros(now)));
            }
            Selection::StartingAfter(now) => {
                conditions.push("b.start_at > ?");
                params_vec.push(Box::new(to_micros(now)));
            }
            Selection::WithStatus(status) => {
                conditions.push("b.status = ?");
                params_vec.push(Box::new(status.as_str()));
            }
        }

        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
        sql.push_str(" ORDER BY b.start_at DESC, b.id DESC LIMIT ? OFFSET ?");
        params_vec.push(Box::new(query.page.size as i64));
        params_vec.push(Box::new(query.page.from as i64));

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|b| &**b).collect();

        let bookings = stmt
            .query_map(&params_refs[..], Self::build_booking_from_row)
            .db_context("Failed to query bookings")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read bookings")?;

        Ok(bookings)
    }

    fn find_neighbour(&self, sql: &str, item_id: u64, now: Timestamp) -> Result<Option<Booking>> {
        self.connection
            .query_row(
                sql,
                params![
                    item_id as i64,
                    BookingStatus::Approved.as_str(),
                    to_micros(now)
                ],
                Self::build_booking_from_row,
            )
            .optional()
            .db_context("Failed to query neighbouring booking")
    }

    fn build_booking_from_row(row: &Row<'_>) -> rusqlite::Result<Booking> {
        Ok(Booking {
            id: row.get::<_, i64>(0)? as u64,
            item_id: row.get::<_, i64>(1)? as u64,
            booker_id: row.get::<_, i64>(2)? as u64,
            start: micros_column(3, row.get(3)?)?,
            end: micros_column(4, row.get(4)?)?,
            status: parsed_column(5, row.get(5)?)?,
        })
    }
}

impl BookingStore for super::Database {
    fn insert_booking(&mut self, booking: &NewBooking) -> Result<Booking> {
        self.create_booking(booking)
    }

    fn find_booking(&self, id: u64) -> Result<Option<Booking>> {
        self.get_booking(id)
    }

    fn update_status_if(
        &mut self,
        id: u64,
        expected: BookingStatus,
        new: BookingStatus,
    ) -> Result<Option<Booking>> {
        self.transition_booking(id, expected, new)
    }

    fn query_bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>> {
        self.list_bookings(query)
    }

    fn has_started_approved_booking(
        &self,
        booker_id: u64,
        item_id: u64,
        now: Timestamp,
    ) -> Result<bool> {
        self.connection
            .query_row(
                CHECK_STARTED_APPROVED_SQL,
                params![
                    booker_id as i64,
                    item_id as i64,
                    BookingStatus::Approved.as_str(),
                    to_micros(now)
                ],
                |row| row.get(0),
            )
            .db_context("Failed to check booking history")
    }

    fn last_approved_booking(&self, item_id: u64, now: Timestamp) -> Result<Option<Booking>> {
        self.find_neighbour(SELECT_LAST_APPROVED_SQL, item_id, now)
    }

    fn next_approved_booking(&self, item_id: u64, now: Timestamp) -> Result<Option<Booking>> {
        self.find_neighbour(SELECT_NEXT_APPROVED_SQL, item_id, now)
    }
}
