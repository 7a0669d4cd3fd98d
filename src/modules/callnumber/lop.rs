//! Lopping: strip the volume/copy suffix off a call number so that every
//! piece of the same work shares one shelving prefix.
//!
//! `888.4 .J788 V.5` and `888.4 .J788 V.6` must both lop to
//! `888.4 .J788`; a discovery UI then shows them as one shelf location
//! with multiple pieces.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Scheme;

/// A cutter token: optional leading period, one letter, digits, optional
/// work-mark letters. `.M464`, `.J788`, `.I39M`.
pub(crate) static CUTTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.?[A-Z]\d+[A-Z]*$").expect("valid cutter regex"));

/// LC class token, letters and number joined: `F1356`, `QE538.8`.
static LC_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{1,3}\d+(\.\d+)?$").expect("valid lc class regex"));

static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{1,3}$").expect("valid regex"));

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid regex"));

pub(crate) fn is_cutter(token: &str) -> bool {
    CUTTER.is_match(&token.to_uppercase())
}

/// Compute the shared classification prefix of a normalized call number.
///
/// LC and Dewey walk tokens left to right: the class token(s), then one or
/// more cutters. Once at least one cutter has been consumed the grammar is
/// satisfied and any further token (volume designator, year, range) stops
/// accumulation. A value that never satisfies the grammar lops to itself -
/// `QA987 V.5:NO.5` keeps its suffix because there is no cutter to anchor
/// the classification, and stripping blind would merge unrelated works.
///
/// SuDoc volume numbering is part of the series string itself, so SuDoc
/// lopping is identity, as is OTHER. Idempotent for every scheme.
pub fn lop(normalized: &str, scheme: Scheme) -> String {
    match scheme {
        Scheme::Lc => lop_classed(normalized, true),
        Scheme::Dewey => lop_classed(normalized, false),
        Scheme::Sudoc | Scheme::Other => normalized.to_string(),
    }
}

fn lop_classed(normalized: &str, lc: bool) -> String {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let upper: Vec<String> = tokens.iter().map(|t| t.to_uppercase()).collect();

    // Consume the class: `F1356` / `QE538.8` for LC (also split across two
    // tokens as in `KF 4558`), a bare number for Dewey.
    let mut idx = match upper.first() {
        Some(first) if lc && LC_CLASS.is_match(first) => 1,
        Some(first)
            if lc
                && LETTERS.is_match(first)
                && upper.get(1).is_some_and(|second| NUMBER.is_match(second)) =>
        {
            2
        }
        Some(first) if !lc && NUMBER.is_match(first) => 1,
        _ => return normalized.to_string(),
    };

    let mut cutters = 0;
    while idx < upper.len() && CUTTER.is_match(&upper[idx]) {
        idx += 1;
        cutters += 1;
    }

    if cutters == 0 {
        // Grammar unsatisfied: no safe lop boundary, identity.
        return normalized.to_string();
    }

    tokens[..idx].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_suffix_lops_off() {
        assert_eq!(lop("888.4 .J788 V.5", Scheme::Dewey), "888.4 .J788");
        assert_eq!(lop("888.4 .J788 V.6", Scheme::Dewey), "888.4 .J788");
        assert_eq!(
            lop("630.654 .I39M V.5:NO.5", Scheme::Dewey),
            "630.654 .I39M"
        );
    }

    #[test]
    fn test_lc_year_and_range_lop_off() {
        assert_eq!(lop("F1356 .M464 2005", Scheme::Lc), "F1356 .M464");
        assert_eq!(lop("QE538.8 .N36 1975-1977", Scheme::Lc), "QE538.8 .N36");
    }

    #[test]
    fn test_multiple_cutters_kept() {
        assert_eq!(lop("PS3537 .A832 .Z85 1995", Scheme::Lc), "PS3537 .A832 .Z85");
    }

    #[test]
    fn test_no_cutter_means_identity() {
        // No cutter anchors the classification, so nothing is stripped.
        assert_eq!(lop("QA987 V.5:NO.5", Scheme::Lc), "QA987 V.5:NO.5");
        assert_eq!(lop("AB1234", Scheme::Lc), "AB1234");
    }

    #[test]
    fn test_sudoc_and_other_are_identity() {
        assert_eq!(lop("Y 4.G 74/7-11:110", Scheme::Sudoc), "Y 4.G 74/7-11:110");
        assert_eq!(lop("MFILM REEL 235", Scheme::Other), "MFILM REEL 235");
    }

    #[test]
    fn test_lop_is_idempotent() {
        for (value, scheme) in [
            ("888.4 .J788 V.5", Scheme::Dewey),
            ("F1356 .M464 2005", Scheme::Lc),
            ("QA987 V.5:NO.5", Scheme::Lc),
            ("I 19.76:98-600-B", Scheme::Sudoc),
            ("MFILM REEL 235", Scheme::Other),
        ] {
            let once = lop(value, scheme);
            assert_eq!(lop(&once, scheme), once, "lop not idempotent for {}", value);
        }
    }
}
