//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Booking, Comment, Item, ItemRequest, User};

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use lendbox_core::{display::CreateResult, models::Item};
///
/// let item = Item {
///     id: 4,
///     owner_id: 1,
///     name: "Ladder".to_string(),
///     description: None,
///     available: true,
///     request_id: None,
/// };
///
/// assert!(CreateResult::new(item).to_string().starts_with("Created item with ID: 4"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

macro_rules! created {
    ($ty:ty, $noun:literal) => {
        impl fmt::Display for CreateResult<$ty> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                writeln!(f, concat!("Created ", $noun, " with ID: {}"), self.resource.id)?;
                writeln!(f)?;
                write!(f, "{}", self.resource)
            }
        }
    };
}

created!(User, "user");
created!(Item, "item");
created!(Booking, "booking");
created!(Comment, "comment");
created!(ItemRequest, "request");

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for UpdateResult<Booking> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated booking with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
