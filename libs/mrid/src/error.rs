//! Error types for mRID construction and parsing.

use thiserror::Error;

/// Errors that can occur when building or parsing mRIDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MridError {
    /// The device identity is too short to supply the LFDI prefix.
    #[error("identity too short: need at least {required} bytes, got {actual}")]
    InvalidIdentityLength { actual: usize, required: usize },

    /// The vendor code is empty or contains non-hex characters.
    #[error("invalid vendor code '{code}': {reason}")]
    InvalidVendorCode { code: String, reason: String },

    /// The role flag does not fit the 4-byte discriminator field.
    #[error("role flag {value:#x} exceeds the 32-bit discriminator field")]
    EncodingOverflow { value: u64 },

    /// The reading type name is empty.
    #[error("reading type cannot be empty")]
    EmptyReadingType,

    /// A hex-encoded field or mRID failed strict parsing.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidHex {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Configuration is missing or malformed.
    #[error("configuration error for {key}: {message}")]
    Config { key: &'static str, message: String },
}

impl MridError {
    /// Returns true if this error was caused by a builder input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MridError::InvalidIdentityLength { .. }
                | MridError::InvalidVendorCode { .. }
                | MridError::EncodingOverflow { .. }
                | MridError::EmptyReadingType
        )
    }

    /// Returns true if this error came from parsing an encoded value.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, MridError::InvalidHex { .. })
    }

    pub(crate) fn invalid_hex(
        field: &'static str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        MridError::InvalidHex {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
