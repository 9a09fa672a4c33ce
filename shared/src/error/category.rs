//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 4xxx: Order errors
/// - 6xxx: Menu errors
/// - 7xxx: Table errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Order and commande errors (4xxx)
    Order,
    /// Menu, category and supplement errors (6xxx)
    Menu,
    /// Table errors (7xxx)
    Table,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            4000..5000 => Self::Order,
            6000..7000 => Self::Menu,
            7000..8000 => Self::Table,
            9000.. => Self::System,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
