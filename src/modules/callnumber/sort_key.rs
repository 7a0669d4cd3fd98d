//! Scheme-aware sortable keys.
//!
//! Plain lexicographic comparison shelves `F90` after `F1356`, so class
//! numbers are zero-padded to a fixed width while cutters keep their
//! decimal-fraction reading (`.M464` shelves before `.M47`). Every key
//! starts with a scheme rank byte so mixed-scheme lists group by scheme
//! and OTHER always lands last.

use once_cell::sync::Lazy;
use regex::Regex;

use super::lop::is_cutter;
use crate::models::Scheme;

const NUM_WIDTH: usize = 5;

static LC_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{1,3}) ?(\d+)(?:\.(\d+))?(.*)$").expect("valid lc regex"));

static DEWEY_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?(.*)$").expect("valid dewey regex"));

/// Build a comparable key for a normalized call number. Total over every
/// scheme; unparseable values degrade to a padded-digit-run rendering of
/// the whole string rather than erroring.
pub fn sort_key(normalized: &str, scheme: Scheme) -> String {
    let upper = normalized.to_uppercase();
    let body = match scheme {
        Scheme::Lc => lc_key(&upper),
        Scheme::Dewey => dewey_key(&upper),
        Scheme::Sudoc => sudoc_key(&upper),
        Scheme::Other => upper.clone(),
    };
    format!("{}{}", scheme.rank(), body)
}

fn lc_key(upper: &str) -> String {
    let Some(caps) = LC_KEY.captures(upper) else {
        return pad_digit_runs(upper);
    };

    let mut key = format!(
        "{} {:0>width$}",
        &caps[1],
        &caps[2],
        width = NUM_WIDTH
    );
    if let Some(frac) = caps.get(3) {
        key.push('.');
        key.push_str(frac.as_str());
    }
    push_trailing_tokens(&mut key, &caps[4]);
    key
}

fn dewey_key(upper: &str) -> String {
    let Some(caps) = DEWEY_KEY.captures(upper) else {
        return pad_digit_runs(upper);
    };

    let mut key = format!("{:0>width$}", &caps[1], width = NUM_WIDTH);
    if let Some(frac) = caps.get(2) {
        key.push('.');
        key.push_str(frac.as_str());
    }
    push_trailing_tokens(&mut key, &caps[3]);
    key
}

/// SuDoc strings compare component-wise: split on the series/part
/// separators, pad digit components, so `:110` shelves before `:1101`.
fn sudoc_key(upper: &str) -> String {
    upper
        .split([' ', '.', '/', ':', ',', '-'])
        .filter(|component| !component.is_empty())
        .map(pad_digit_runs)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append the tokens after the class number: cutters keep their digits
/// verbatim (fraction semantics), everything else gets its digit runs
/// padded (integer semantics, so `V.5` shelves before `V.10`).
fn push_trailing_tokens(key: &mut String, rest: &str) {
    for token in rest.split_whitespace() {
        key.push(' ');
        if is_cutter(token) {
            key.push_str(token.trim_start_matches('.'));
        } else {
            key.push_str(&pad_digit_runs(token));
        }
    }
}

fn pad_digit_runs(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + NUM_WIDTH);
    let mut run = String::new();
    for c in token.chars() {
        if c.is_ascii_digit() {
            run.push(c);
        } else {
            flush_run(&mut out, &mut run);
            out.push(c);
        }
    }
    flush_run(&mut out, &mut run);
    out
}

fn flush_run(out: &mut String, run: &mut String) {
    if !run.is_empty() {
        out.push_str(&format!("{:0>width$}", run, width = NUM_WIDTH));
        run.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_order(pairs: &[(&str, Scheme)]) {
        let keys: Vec<String> = pairs.iter().map(|(v, s)| sort_key(v, *s)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "expected shelf order for {:?}", pairs);
    }

    #[test]
    fn test_lc_class_number_sorts_numerically() {
        assert_order(&[
            ("F90 .B3", Scheme::Lc),
            ("F135 .A2", Scheme::Lc),
            ("F1356 .M464 2005", Scheme::Lc),
        ]);
    }

    #[test]
    fn test_lc_cutters_compare_as_fractions() {
        assert_order(&[
            ("F1356 .M464", Scheme::Lc),
            ("F1356 .M47", Scheme::Lc),
            ("F1356 .N47", Scheme::Lc),
        ]);
    }

    #[test]
    fn test_dewey_integer_padding() {
        assert_order(&[
            ("1 .N44", Scheme::Dewey),
            ("1.123 .N44", Scheme::Dewey),
            ("22 .N47", Scheme::Dewey),
            ("22.456 .S655", Scheme::Dewey),
            ("999 .F67", Scheme::Dewey),
            ("999.85 .P84", Scheme::Dewey),
        ]);
    }

    #[test]
    fn test_volume_numbers_compare_as_integers() {
        assert_order(&[
            ("888.4 .J788 V.5", Scheme::Dewey),
            ("888.4 .J788 V.10", Scheme::Dewey),
        ]);
    }

    #[test]
    fn test_sudoc_numeric_tail() {
        assert_order(&[
            ("Y 4.G 74/7-11:110", Scheme::Sudoc),
            ("Y 4.G 74/7-11:1101", Scheme::Sudoc),
        ]);
        assert_order(&[
            ("I 19.76:98-600-B", Scheme::Sudoc),
            ("I 19.76:98-600-C", Scheme::Sudoc),
        ]);
    }

    #[test]
    fn test_other_sorts_after_classed_schemes() {
        let other = sort_key("AAA", Scheme::Other);
        for (value, scheme) in [
            ("ZZ999 .Z99", Scheme::Lc),
            ("999.99 .Z99", Scheme::Dewey),
            ("Y 4.Z 99:99", Scheme::Sudoc),
        ] {
            assert!(sort_key(value, scheme) < other);
        }
    }
}
