//! Custom error types for minibank
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every failure is recoverable: it prevents
//! mutation and is returned to the caller as a value.

use thiserror::Error;

use crate::models::Money;

/// The main error type for minibank operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Authentication failure. Deliberately carries no reason: an unknown
    /// username and a wrong PIN are indistinguishable to the caller.
    #[error("Invalid username or PIN")]
    Auth,

    /// An operation required an active session and none was available
    #[error("No active session")]
    NoSession,

    /// Validation errors for service preconditions
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Insufficient balance for a transfer
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// File I/O errors (roster loading)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON deserialization errors (roster loading)
    #[error("JSON error: {0}")]
    Json(String),
}

impl BankError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for a colliding username
    pub fn duplicate_username(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Username",
            identifier: identifier.into(),
        }
    }

    /// Check if this is an authentication failure
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for minibank operations
pub type BankResult<T> = Result<T, BankError>;
