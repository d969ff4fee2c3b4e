//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Booking, Comment, Item, ItemBookings, ItemRequest};

/// Newtype wrapper for displaying a page of bookings.
///
/// ```rust
/// use jiff::Timestamp;
/// use lendbox_core::{
///     display::Bookings,
///     models::{Booking, BookingStatus},
/// };
///
/// let booking = Booking {
///     id: 7,
///     item_id: 2,
///     booker_id: 5,
///     start: Timestamp::from_second(1_893_456_000).unwrap(),
///     end: Timestamp::from_second(1_893_463_200).unwrap(),
///     status: BookingStatus::Approved,
/// };
///
/// let output = Bookings(vec![booking]).to_string();
/// assert!(output.contains("Booking 7"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bookings(pub Vec<Booking>);

impl Bookings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Booking> {
        self.0.iter()
    }
}

impl Index<usize> for Bookings {
    type Output = Booking;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Bookings {
    type Item = Booking;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bookings {
    type Item = &'a Booking;
    type IntoIter = std::slice::Iter<'a, Booking>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Bookings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No bookings found.")
        } else {
            for booking in &self.0 {
                write!(f, "{booking}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying an item's comments.
#[derive(Debug, Clone, Default)]
pub struct Comments(pub Vec<Comment>);

impl Comments {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Comment> {
        self.0.iter()
    }
}

impl Index<usize> for Comments {
    type Output = Comment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Comments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No comments yet.")
        } else {
            for comment in &self.0 {
                write!(f, "{comment}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying items as one line each.
#[derive(Debug, Clone, Default)]
pub struct Items(pub Vec<Item>);

impl Items {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items found.")
        } else {
            for item in &self.0 {
                item.fmt_line(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying an owner's items with their bookings and
/// comments.
#[derive(Debug, Clone, Default)]
pub struct OwnedItems(pub Vec<ItemBookings>);

impl OwnedItems {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for OwnedItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No items listed.");
        }
        for (i, summary) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a page of item requests.
#[derive(Debug, Clone, Default)]
pub struct ItemRequests(pub Vec<ItemRequest>);

impl ItemRequests {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ItemRequests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No requests found.");
        }
        for (i, request) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{request}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::BookingStatus;

    fn booking(id: u64) -> Booking {
        Booking {
            id,
            item_id: 1,
            booker_id: 2,
            start: Timestamp::from_second(1_893_456_000).unwrap(),
            end: Timestamp::from_second(1_893_463_200).unwrap(),
            status: BookingStatus::Waiting,
        }
    }

    #[test]
    fn test_bookings_display_empty() {
        assert_eq!(Bookings::default().to_string(), "No bookings found.\n");
    }

    #[test]
    fn test_bookings_display_keeps_order() {
        let bookings = Bookings(vec![booking(3), booking(1)]);
        let output = bookings.to_string();

        let third = output.find("Booking 3").unwrap();
        let first = output.find("Booking 1").unwrap();
        assert!(third < first);
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[1].id, 1);
    }

    #[test]
    fn test_items_display_one_line_each() {
        let items = Items(vec![
            Item {
                id: 1,
                owner_id: 2,
                name: "Tent".to_string(),
                description: None,
                available: true,
                request_id: None,
            },
            Item {
                id: 4,
                owner_id: 2,
                name: "Stove".to_string(),
                description: Some("Gas".to_string()),
                available: false,
                request_id: None,
            },
        ]);
        assert_eq!(items.to_string(), "- 1. Tent\n- 4. Stove (unavailable)\n");
        assert_eq!(Items::default().to_string(), "No items found.\n");
    }

    #[test]
    fn test_owned_items_and_requests_display_empty() {
        assert_eq!(OwnedItems::default().to_string(), "No items listed.\n");
        assert_eq!(ItemRequests::default().to_string(), "No requests found.\n");
    }

    #[test]
    fn test_comments_display_empty() {
        assert_eq!(Comments(vec![]).to_string(), "No comments yet.\n");
    }
}
