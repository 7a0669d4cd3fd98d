pub mod browse_entry;
pub mod call_number;
pub mod holding;
pub mod item;

pub use browse_entry::BrowseEntry;
pub use call_number::{ClassifiedCallNumber, RawCallNumber, Scheme};
pub use holding::{BoundWithRef, Holding};
pub use item::Item;
