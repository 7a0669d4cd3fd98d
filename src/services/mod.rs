//! Services Layer
//!
//! Pure business logic with no transport attached: the browse service can
//! be called directly from an indexing pipeline or wrapped by whatever
//! handler layer the embedding application uses.

pub mod browse_service;

pub use browse_service::*;
