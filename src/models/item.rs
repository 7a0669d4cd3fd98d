use serde::{Deserialize, Serialize};

/// One physical piece attached to a bibliographic record.
///
/// Mirrors the shape delivered by the catalog backend: the call number and
/// enumeration are human-entered and frequently absent or malformed, so
/// every field beyond the identifier is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Backend identifier. Items arriving without one are skipped, not fatal.
    pub id: Option<String>,
    pub call_number: Option<String>,
    /// Volume/part label for this specific piece, e.g. `V.5` or `NO.3 1998`.
    pub enumeration: Option<String>,
    /// Suppressed-from-discovery flag; suppressed items never produce entries.
    #[serde(default)]
    pub suppressed: bool,
    /// The holding this item shelves under, used as call number fallback.
    pub holding_id: Option<String>,
}

impl Item {
    pub fn new(id: &str) -> Self {
        Item {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }
}
