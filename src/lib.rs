pub mod domain;
pub mod models;
pub mod modules;
pub mod services;

// Re-exports for the indexing pipeline embedding this crate
pub use models::{BoundWithRef, BrowseEntry, ClassifiedCallNumber, Holding, Item, Scheme};
pub use services::browse_service::{
    assigned_call_numbers, build_browse_entries, record_browse_entries,
};
