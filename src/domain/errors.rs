//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Irregular catalog data is never an error here: unusable call numbers are
//! silently excluded and unparseable ones degrade to the OTHER scheme. These
//! variants only surface for contract-level problems such as an unknown
//! scheme tag arriving from external configuration.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Validation error with message
    Validation(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
