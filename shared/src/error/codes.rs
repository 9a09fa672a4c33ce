//! Unified error codes for the resto backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / commande errors
//! - 6xxx: Menu errors (items, categories, supplements)
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the frontend can switch
/// on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format (malformed JSON, bad path parameter)
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// No commande matches the lookup
    CommandeNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,
    /// Status is not one of pending / in_progress / done
    InvalidOrderStatus = 4003,
    /// Total price missing or not positive
    InvalidTotalPrice = 4004,

    // ==================== 6xxx: Menu ====================
    /// Price missing or out of range
    InvalidPrice = 6001,
    /// Category name already taken
    CategoryNameExists = 6002,
    /// Category name missing or blank
    CategoryNameRequired = 6003,

    // ==================== 7xxx: Table ====================
    /// Table number is not an integer
    InvalidTableNumber = 7001,
    /// Status is not one of free / occupied
    InvalidTableStatus = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// A single-row query returned no rows
    NoRows = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Order
            ErrorCode::CommandeNotFound => "No commande found for this client and table",
            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::InvalidOrderStatus => {
                "Invalid status. Use: pending, in_progress, done"
            }
            ErrorCode::InvalidTotalPrice => "Total price must be a positive number",

            // Menu
            ErrorCode::InvalidPrice => "Invalid price",
            ErrorCode::CategoryNameExists => "A category with this name already exists",
            ErrorCode::CategoryNameRequired => "Category name is required",

            // Table
            ErrorCode::InvalidTableNumber => "Table number must be an integer",
            ErrorCode::InvalidTableStatus => "Invalid status. Use \"free\" or \"occupied\"",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NoRows => "No rows returned",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4001 => Ok(ErrorCode::CommandeNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::InvalidOrderStatus),
            4004 => Ok(ErrorCode::InvalidTotalPrice),

            // Menu
            6001 => Ok(ErrorCode::InvalidPrice),
            6002 => Ok(ErrorCode::CategoryNameExists),
            6003 => Ok(ErrorCode::CategoryNameRequired),

            // Table
            7001 => Ok(ErrorCode::InvalidTableNumber),
            7002 => Ok(ErrorCode::InvalidTableStatus),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::NoRows),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::CommandeNotFound.code(), 4001);
        assert_eq!(ErrorCode::CategoryNameExists.code(), 6002);
        assert_eq!(ErrorCode::InvalidTableStatus.code(), 7002);
        assert_eq!(ErrorCode::NoRows.code(), 9004);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(4003), Ok(ErrorCode::InvalidOrderStatus));
        assert_eq!(ErrorCode::try_from(7001), Ok(ErrorCode::InvalidTableNumber));
        assert_eq!(ErrorCode::try_from(9002), Ok(ErrorCode::DatabaseError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
        assert_eq!(ErrorCode::try_from(9003), Err(InvalidErrorCode(9003)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::CategoryNameExists).unwrap();
        assert_eq!(json, "6002");

        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::CommandeNotFound);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::InvalidTableNumber.message(),
            "Table number must be an integer"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }
}
