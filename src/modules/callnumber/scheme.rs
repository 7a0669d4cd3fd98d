//! Scheme detection for normalized call numbers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Scheme;

/// Agency-style prefix: 1-3 letters, optional space, digits, then a period
/// starting the series numbering, e.g. `I 19.76:...` or `Y 4.G 74/...`.
static SUDOC_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{1,3} ?\d+\.").expect("valid sudoc regex"));

/// LC class: 1-3 letters immediately (or after one space) followed by the
/// class number, e.g. `F1356`, `QE538.8`, `KF 4558`.
static LC_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{1,3} ?\d+(\.\d+)?").expect("valid lc regex"));

/// Assign a classification scheme to a normalized call number.
///
/// Total over every non-unusable string. SuDoc is tried before LC: the two
/// grammars overlap on letter-then-digit prefixes, and the tie goes to
/// SuDoc whenever a `/` or `:` series separator is present.
pub fn classify(normalized: &str) -> Scheme {
    let upper = normalized.to_uppercase();

    if SUDOC_PREFIX.is_match(&upper) && (upper.contains('/') || upper.contains(':')) {
        return Scheme::Sudoc;
    }

    if LC_PREFIX.is_match(&upper) {
        return Scheme::Lc;
    }

    if upper.starts_with(|c: char| c.is_ascii_digit()) {
        return Scheme::Dewey;
    }

    Scheme::Other
}
