//! Unified error codes for the storefront workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Cart errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,

    // ==================== 4xxx: Cart ====================
    /// Cart line not found
    CartItemNotFound = 4001,
    /// Quantity is not acceptable for a cart line
    InvalidQuantity = 4002,

    // ==================== 6xxx: Product ====================
    /// Laptop not found in the catalog
    ProductNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::CartItemNotFound => "Cart line not found",
            Self::InvalidQuantity => "Invalid quantity",
            Self::ProductNotFound => "Laptop not found",
            Self::InternalError => "Internal error",
            Self::DatabaseError => "Database error",
        }
    }

    /// Get the category this error code belongs to
    pub fn category(&self) -> super::ErrorCategory {
        super::ErrorCategory::from_code(*self as u16)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), *self as u16)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an unrecognized u16 into [`ErrorCode`]
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
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::InvalidCredentials),
            4001 => Ok(Self::CartItemNotFound),
            4002 => Ok(Self::InvalidQuantity),
            6001 => Ok(Self::ProductNotFound),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(u16::from(ErrorCode::Success), 0);
        assert_eq!(u16::from(ErrorCode::InvalidCredentials), 1002);
        assert_eq!(u16::from(ErrorCode::ProductNotFound), 6001);
    }

    #[test]
    fn test_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::NotFound,
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidCredentials,
            ErrorCode::CartItemNotFound,
            ErrorCode::ProductNotFound,
            ErrorCode::DatabaseError,
        ] {
            let value = u16::from(code);
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(ErrorCode::try_from(777), Err(InvalidErrorCode(777)));
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "6001");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::ProductNotFound);
    }
}
