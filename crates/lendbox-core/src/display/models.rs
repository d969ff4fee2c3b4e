//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation logic. All output is markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Booking, BookingDetails, BookingState, BookingStatus, Comment, Item, ItemBookings,
    ItemRequest, User,
};

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Email: {}", self.email)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Owner: user {}", self.owner_id)?;
        writeln!(
            f,
            "- Available: {}",
            if self.available { "yes" } else { "no" }
        )?;
        if let Some(request_id) = self.request_id {
            writeln!(f, "- Answers request: {request_id}")?;
        }

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl Booking {
    fn fmt_window(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Start: {}", LocalDateTime(&self.start))?;
        writeln!(f, "- End: {}", LocalDateTime(&self.end))
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Booking {} ({})", self.id, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- Item: {}", self.item_id)?;
        writeln!(f, "- Booker: user {}", self.booker_id)?;
        self.fmt_window(f)?;
        writeln!(f)
    }
}

impl fmt::Display for BookingDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let booking = &self.booking;
        writeln!(
            f,
            "# Booking {} ({})",
            booking.id,
            booking.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Item: {} (ID: {})", self.item.name, self.item.id)?;
        writeln!(f, "- Booker: {} (ID: {})", self.booker.name, self.booker.id)?;
        booking.fmt_window(f)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **user {}** ({}): {}",
            self.author_id,
            LocalDateTime(&self.created_at),
            self.text
        )
    }
}

impl Item {
    /// One-line summary used in listings.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}. {}", self.id, self.name)?;
        if !self.available {
            write!(f, " (unavailable)")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ItemRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Request {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Requester: user {}", self.requester_id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if self.items.is_empty() {
            writeln!(f, "\nNo items offered yet.")
        } else {
            writeln!(f, "\n## Offered items")?;
            writeln!(f)?;
            for item in &self.items {
                item.fmt_line(f)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for ItemBookings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)?;

        if let Some(last) = &self.last_booking {
            writeln!(f, "\n## Last booking")?;
            writeln!(f)?;
            write!(f, "{last}")?;
        }
        if let Some(next) = &self.next_booking {
            writeln!(f, "\n## Next booking")?;
            writeln!(f)?;
            write!(f, "{next}")?;
        }

        if self.comments.is_empty() {
            writeln!(f, "\nNo comments yet.")
        } else {
            writeln!(f, "\n## Comments")?;
            writeln!(f)?;
            for comment in &self.comments {
                write!(f, "{comment}")?;
            }
            Ok(())
        }
    }
}
