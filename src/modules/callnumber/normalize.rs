//! Call number normalization and the placeholder blacklist.
//!
//! Catalogers park all sorts of non-call-number strings in the call number
//! field (`IN PROCESS`, `XX(3141)`, quoted labels). Those must vanish from
//! browse output rather than shelve somewhere surprising.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Values that mean "this is not a call number". Matched case-insensitively
/// against the whitespace-collapsed string. Process-wide constant
/// configuration, not mutable state.
static PLACEHOLDER_BLACKLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "NO CALL NUMBER",
        "IN PROCESS",
        "INTERNET RESOURCE",
        "WITHDRAWN",
    ])
});

/// Clean a raw call number for classification, or reject it.
///
/// Collapses whitespace runs, trims, NFC-normalizes. Returns `None` for
/// unusable values: blanks, blacklisted placeholders, `X`/`XX`-prefixed
/// shelving stubs, and values wrapped in double quotes on both ends.
/// A value merely containing a quote (e.g. `Y 4.G 74/7-11:110"`) is kept.
///
/// The returned display form preserves the original casing; comparisons
/// here run on an uppercased copy.
pub fn normalize(raw: &str) -> Option<String> {
    let collapsed = raw
        .nfc()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if collapsed.is_empty() {
        return None;
    }

    let upper = collapsed.to_uppercase();

    if PLACEHOLDER_BLACKLIST.contains(upper.as_str()) {
        tracing::debug!("Rejecting placeholder call number: {}", collapsed);
        return None;
    }

    if upper.starts_with('X') {
        tracing::debug!("Rejecting X-prefixed shelving stub: {}", collapsed);
        return None;
    }

    if upper.len() >= 2 && upper.starts_with('"') && upper.ends_with('"') {
        tracing::debug!("Rejecting quoted placeholder: {}", collapsed);
        return None;
    }

    Some(collapsed)
}
