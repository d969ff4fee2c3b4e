//! Error types for the lendbox library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::BookingStatus;

/// Comprehensive error type for all lendbox operations.
///
/// Authority failures are reported as not-found by default so that callers
/// cannot learn about the existence of bookings or item ownership. See
/// [`crate::engine::AccessPolicy`] for the stricter alternative.
#[derive(Error, Debug)]
pub enum LendError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// User not found for the given ID
    #[error("User with ID {id} not found")]
    UserNotFound { id: u64 },
    /// Item not found for the given ID
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: u64 },
    /// Booking not found for the given ID
    #[error("Booking with ID {id} not found")]
    BookingNotFound { id: u64 },
    /// Item request not found for the given ID
    #[error("Request with ID {id} not found")]
    RequestNotFound { id: u64 },
    /// The owner tried to book their own item
    #[error("Item with ID {item_id} not found for booking by its owner")]
    SelfBooking { item_id: u64 },
    /// The requester may not see or act on the booking
    #[error("User with ID {user_id} has no access to booking {booking_id}")]
    NoAuthority { user_id: u64, booking_id: u64 },
    /// Explicit authority failure, only raised under the strict access policy
    #[error("User with ID {user_id} is not allowed to act on {resource}")]
    Forbidden { user_id: u64, resource: String },
    /// The item is not currently open for bookings
    #[error("Item with ID {id} not available")]
    ItemNotAvailable { id: u64 },
    /// The booking already left the waiting state
    #[error("Booking with ID {id} already decided: {status}")]
    AlreadyDecided { id: u64, status: BookingStatus },
    /// No started, approved booking unlocks commenting
    #[error("Booking required before commenting: user {user_id}, item {item_id}")]
    CommentNotAllowed { user_id: u64, item_id: u64 },
    /// Unrecognised booking state token
    #[error("Unknown state: {token}")]
    BadState { token: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Coarse classification of [`LendError`] for interface layers that need to
/// pick an external status signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    NotAvailable,
    BadState,
    InvalidInput,
    Internal,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> LendError {
        LendError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LendError {
        LendError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LendError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LendError::UserNotFound { .. }
            | LendError::ItemNotFound { .. }
            | LendError::BookingNotFound { .. }
            | LendError::RequestNotFound { .. }
            | LendError::SelfBooking { .. }
            | LendError::NoAuthority { .. } => ErrorKind::NotFound,
            LendError::Forbidden { .. } => ErrorKind::Forbidden,
            LendError::ItemNotAvailable { .. }
            | LendError::AlreadyDecided { .. }
            | LendError::CommentNotAllowed { .. } => ErrorKind::NotAvailable,
            LendError::BadState { .. } => ErrorKind::BadState,
            LendError::InvalidInput { .. } => ErrorKind::InvalidInput,
            LendError::Database { .. }
            | LendError::FileSystem { .. }
            | LendError::XdgDirectory(_)
            | LendError::Configuration { .. } => ErrorKind::Internal,
        }
    }

    /// Whether the error was caused by the caller rather than the system.
    pub fn is_caller_error(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LendError::database(message).with_source(e))
    }
}

/// Result type alias for lendbox operations
pub type Result<T> = std::result::Result<T, LendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_state_message_carries_token() {
        let err = LendError::BadState {
            token: "alll".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown state: alll");
        assert_eq!(err.kind(), ErrorKind::BadState);
    }

    #[test]
    fn test_authority_failures_are_not_found() {
        let err = LendError::NoAuthority {
            user_id: 3,
            booking_id: 9,
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains('3'));

        let err = LendError::SelfBooking { item_id: 4 };
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_missing_request_is_not_found() {
        let err = LendError::RequestNotFound { id: 8 };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Request with ID 8 not found");
    }

    #[test]
    fn test_already_decided_is_not_available() {
        let err = LendError::AlreadyDecided {
            id: 1,
            status: BookingStatus::Approved,
        };
        assert_eq!(err.kind(), ErrorKind::NotAvailable);
        assert_eq!(err.to_string(), "Booking with ID 1 already decided: APPROVED");
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = LendError::invalid_input("size").with_reason("must be at least 1");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'size': must be at least 1"
        );
    }

    #[test]
    fn test_database_errors_are_internal() {
        let res: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = res.db_context("Failed to query booking").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(!err.is_caller_error());
    }
}
