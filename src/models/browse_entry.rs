use serde::{Deserialize, Serialize};

use super::call_number::Scheme;

/// One row of the shelf-browse result set, ready for the search index
/// writer to serialize.
///
/// `lopped_callnumber` is the grouping prefix shared by every volume of the
/// same work; `callnumber` is the full value for this specific piece,
/// volume suffix included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrowseEntry {
    pub lopped_callnumber: String,
    pub callnumber: String,
    /// One representative item id; when entries collapse, which specific
    /// item survives is not load-bearing. `None` for entries derived from
    /// record-level descriptive call numbers.
    pub item_reference: Option<String>,
    pub scheme: Scheme,
    #[serde(skip)]
    pub(crate) sort_key: String,
}
