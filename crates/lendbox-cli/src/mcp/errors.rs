//! Error handling utilities for MCP server

use lendbox_core::LendError;
use rmcp::ErrorData;

/// Converts a lender error into an MCP error.
///
/// Caller errors (unknown ids, refused transitions, bad input) become
/// `invalid_params`; storage and configuration failures become
/// `internal_error`.
pub fn to_mcp_error(message: &str, error: &LendError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_caller_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_caller_errors_are_invalid_params() {
        let err = to_mcp_error(
            "Failed to list bookings",
            &LendError::BadState {
                token: "alll".to_string(),
            },
        );
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Failed to list bookings: Unknown state: alll");
    }

    #[test]
    fn test_internal_errors_stay_internal() {
        let err = to_mcp_error(
            "Failed to create user",
            &LendError::Configuration {
                message: "Task join error".to_string(),
            },
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
