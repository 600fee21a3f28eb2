//! Unified error types for the identity core
//!
//! Every fallible operation returns an `IdentityError`. Messages never carry
//! seed or private key material.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all identity operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl IdentityError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn resource_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceUnavailable, msg)
    }

    pub fn entropy_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::EntropySourceUnavailable, msg)
    }

    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidSeed, msg)
    }

    pub fn invalid_public_key_length(len: usize) -> Self {
        Self::new(
            ErrorCode::InvalidPublicKeyLength,
            format!("Public key must be 32 bytes, got {}", len),
        )
    }

    pub fn invalid_private_key(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPrivateKey, msg)
    }

    pub fn invalid_address() -> Self {
        Self::new(ErrorCode::InvalidAddress, "Invalid address")
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for IdentityError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Local resources
    ResourceUnavailable,
    EntropySourceUnavailable,

    // Caller input
    InvalidSeed,
    InvalidPublicKeyLength,
    InvalidPrivateKey,
    InvalidAddress,
    InvalidInput,

    // Parse errors
    JsonError,

    // Internal
    Internal,
}

/// Result type alias for identity operations
pub type IdentityResult<T> = Result<T, IdentityError>;

impl From<serde_json::Error> for IdentityError {
    fn from(e: serde_json::Error) -> Self {
        IdentityError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<std::io::Error> for IdentityError {
    fn from(e: std::io::Error) -> Self {
        IdentityError::new(ErrorCode::Internal, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = IdentityError::resource_unavailable("Wordlist missing")
            .with_details("expected 2048 words, found 12");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("resource_unavailable"));
        assert!(json.contains("Wordlist missing"));
    }

    #[test]
    fn test_display_includes_code_and_details() {
        let err = IdentityError::invalid_public_key_length(31);
        assert_eq!(
            err.to_string(),
            "[InvalidPublicKeyLength] Public key must be 32 bytes, got 31"
        );

        let err = IdentityError::invalid_seed("Seed is empty").with_details("nonce 0");
        assert!(err.to_string().ends_with("(nonce 0)"));
    }

    #[test]
    fn test_invalid_address_carries_no_detail() {
        let err = IdentityError::invalid_address();
        assert!(err.is(ErrorCode::InvalidAddress));
        assert!(err.details.is_none());
    }
}
