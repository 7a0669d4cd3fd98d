use serde::{Deserialize, Serialize};

/// A holdings record: the shelving unit one or more items hang off.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: Option<String>,
    pub call_number: Option<String>,
}

/// A bound-with relation: this item is physically bound inside another
/// bibliographic work's binder volume, and shelves under the binder's
/// holding rather than its own record.
///
/// Modelled as an explicit lookup row (item -> binder holding) instead of a
/// back-reference on `Item`, keeping the data model acyclic and
/// serialization-safe. The binder's instance/item identity is carried along
/// for downstream display but plays no part in call number resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundWithRef {
    /// The item on the current record that is bound into the binder.
    pub item_id: String,
    /// The binder's holding, whose call number governs the shelf location.
    pub holding_id: String,
    pub instance_id: Option<String>,
    pub bound_item_id: Option<String>,
}
