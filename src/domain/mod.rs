//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies.
//! Only domain error types live here.

pub mod errors;

pub use errors::DomainError;
