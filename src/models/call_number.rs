use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Classification scheme of a shelf call number.
///
/// A closed enum rather than a hierarchy: every normalize/lop/sort-key
/// strategy dispatches on it in one place, which is what keeps the
/// "OTHER sorts last" invariant enforceable. Unusable placeholder values
/// (`IN PROCESS` and friends) never get a variant here - the normalizer
/// filters them out before classification runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Library of Congress: letters + class number + cutter(s).
    Lc,
    /// Dewey decimal: leading numeric class, optional decimal, cutter.
    Dewey,
    /// U.S. government document (SuDoc): agency code + series/part numbering.
    Sudoc,
    /// Anything else; kept, but shelved after all classed schemes.
    Other,
}

impl Scheme {
    /// Rank byte prefixed to sort keys so a mixed-scheme list groups by
    /// scheme and OTHER lands last regardless of key body.
    pub fn rank(self) -> char {
        match self {
            Scheme::Lc => '0',
            Scheme::Dewey => '1',
            Scheme::Sudoc => '2',
            Scheme::Other => '3',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Lc => "lc",
            Scheme::Dewey => "dewey",
            Scheme::Sudoc => "sudoc",
            Scheme::Other => "other",
        }
    }
}

impl FromStr for Scheme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lc" => Ok(Scheme::Lc),
            "dewey" => Ok(Scheme::Dewey),
            "sudoc" => Ok(Scheme::Sudoc),
            "other" => Ok(Scheme::Other),
            other => Err(DomainError::Validation(format!(
                "unknown call number scheme: '{}'",
                other
            ))),
        }
    }
}

/// A raw call number candidate gathered for one physical piece, before the
/// pipeline has touched it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawCallNumber {
    pub value: String,
    pub item_id: Option<String>,
    pub enumeration: Option<String>,
    /// True when the value was taken from a binder holding's call number
    /// rather than the item's own.
    #[serde(default)]
    pub from_bound_with: bool,
}

/// The fully derived form of one candidate: scheme tag, cleaned string,
/// classification-only prefix and scheme-aware ordering key.
///
/// Invariant: `lopped` is always a prefix of (or equal to) `normalized`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedCallNumber {
    pub scheme: Scheme,
    pub normalized: String,
    pub lopped: String,
    pub sort_key: String,
    pub item_id: Option<String>,
    pub enumeration: Option<String>,
}

impl ClassifiedCallNumber {
    /// Full displayable call number for the specific piece: the normalized
    /// value with the enumeration label appended, unless the label is
    /// already embedded in the string.
    pub fn full_call_number(&self) -> String {
        match &self.enumeration {
            Some(enumeration) if !enumeration.trim().is_empty() => {
                let label = enumeration.trim();
                if contains_token_run(&self.normalized, label) {
                    self.normalized.clone()
                } else {
                    format!("{} {}", self.normalized, label)
                }
            }
            _ => self.normalized.clone(),
        }
    }
}

/// True when `label`'s whitespace tokens occur as a contiguous token run in
/// `value`, compared case-insensitively. Substring matching would claim
/// `V.5` is embedded in `... V.55`.
fn contains_token_run(value: &str, label: &str) -> bool {
    let value = value.to_uppercase();
    let label = label.to_uppercase();
    let haystack: Vec<&str> = value.split_whitespace().collect();
    let needle: Vec<&str> = label.split_whitespace().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("lc".parse::<Scheme>().expect("lc parses"), Scheme::Lc);
        assert_eq!(
            " SUDOC ".parse::<Scheme>().expect("sudoc parses"),
            Scheme::Sudoc
        );
        assert!("marc".parse::<Scheme>().is_err());
    }

    #[test]
    fn test_full_call_number_appends_enumeration_once() {
        let classified = ClassifiedCallNumber {
            scheme: Scheme::Dewey,
            normalized: "888.4 .J788".to_string(),
            lopped: "888.4 .J788".to_string(),
            sort_key: String::new(),
            item_id: Some("i1".to_string()),
            enumeration: Some("V.5".to_string()),
        };
        assert_eq!(classified.full_call_number(), "888.4 .J788 V.5");

        let embedded = ClassifiedCallNumber {
            normalized: "888.4 .J788 V.5".to_string(),
            ..classified
        };
        assert_eq!(embedded.full_call_number(), "888.4 .J788 V.5");
    }

    #[test]
    fn test_enumeration_embedding_respects_token_boundaries() {
        // V.5 is a substring of V.55 but not the same piece label.
        let classified = ClassifiedCallNumber {
            scheme: Scheme::Dewey,
            normalized: "888.4 .J788 V.55".to_string(),
            lopped: "888.4 .J788".to_string(),
            sort_key: String::new(),
            item_id: Some("i1".to_string()),
            enumeration: Some("V.5".to_string()),
        };
        assert_eq!(classified.full_call_number(), "888.4 .J788 V.55 V.5");

        // Case-variant embedded label is still recognized.
        let lower = ClassifiedCallNumber {
            normalized: "888.4 .j788 v.5".to_string(),
            ..classified
        };
        assert_eq!(lower.full_call_number(), "888.4 .j788 v.5");
    }
}
