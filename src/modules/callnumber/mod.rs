//! Call Number Engine
//!
//! The pure string pipeline behind shelf browse: normalize a raw,
//! human-entered call number, detect its classification scheme, lop the
//! volume/copy suffix off to get the shared shelving prefix, and derive a
//! scheme-aware sortable key. Every function here is pure and total over
//! its inputs; bad data degrades (OTHER scheme, identity lop), it never
//! errors.

pub mod lop;
pub mod normalize;
pub mod scheme;
pub mod sort_key;

pub use lop::lop;
pub use normalize::normalize;
pub use scheme::classify;
pub use sort_key::sort_key;

use crate::models::{ClassifiedCallNumber, RawCallNumber};

/// Run one raw candidate through the whole pipeline.
///
/// Returns `None` when the value is unusable (placeholder, blank), which
/// excludes it from browse output entirely.
pub fn classify_raw(raw: &RawCallNumber) -> Option<ClassifiedCallNumber> {
    let normalized = normalize(&raw.value)?;
    let scheme = classify(&normalized);
    let lopped = lop(&normalized, scheme);
    let sort_key = sort_key(&normalized, scheme);

    Some(ClassifiedCallNumber {
        scheme,
        normalized,
        lopped,
        sort_key,
        item_id: raw.item_id.clone(),
        enumeration: raw.enumeration.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scheme;

    fn raw(value: &str) -> RawCallNumber {
        RawCallNumber {
            value: value.to_string(),
            item_id: Some("i1".to_string()),
            enumeration: None,
            from_bound_with: false,
        }
    }

    #[test]
    fn test_pipeline_classifies_and_lops() {
        let classified = classify_raw(&raw("  888.4   .J788  V.5 ")).expect("usable");
        assert_eq!(classified.scheme, Scheme::Dewey);
        assert_eq!(classified.normalized, "888.4 .J788 V.5");
        assert_eq!(classified.lopped, "888.4 .J788");
        assert!(classified.normalized.starts_with(&classified.lopped));
    }

    #[test]
    fn test_pipeline_drops_placeholders() {
        assert!(classify_raw(&raw("IN PROCESS")).is_none());
        assert!(classify_raw(&raw("   ")).is_none());
    }
}
