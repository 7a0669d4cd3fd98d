//! Browse Service - merges one record's items and holdings into the final
//! ordered shelf-browse entry list.
//!
//! Candidate resolution per item: a binder holding's call number wins when
//! the item is bound with another work, then the item's own call number,
//! then the owning holding's. Candidates then run through
//! normalize -> classify -> lop -> sort-key, unusable values drop out,
//! duplicates collapse, and the survivors sort into shelf order.

use std::collections::{HashMap, HashSet};

use crate::models::{BoundWithRef, BrowseEntry, Holding, Item, RawCallNumber, Scheme};
use crate::modules::callnumber::classify_raw;

/// Build the ordered browse entry list for one record.
///
/// Never fails: suppressed and id-less items are skipped, a dangling
/// bound-with reference falls back to the item's own call number, and a
/// record with no usable candidates yields an empty list.
pub fn build_browse_entries(
    items: &[Item],
    holdings: &[Holding],
    bound_withs: &[BoundWithRef],
) -> Vec<BrowseEntry> {
    let candidates = resolve_candidates(items, holdings, bound_withs);
    entries_from_candidates(candidates)
}

/// Like [`build_browse_entries`], but a record with zero items (e.g. an
/// electronic-only resource) falls back to its descriptive-record-level
/// call number strings. Entries built from the fallback carry no item
/// reference.
pub fn record_browse_entries(
    items: &[Item],
    holdings: &[Holding],
    bound_withs: &[BoundWithRef],
    descriptive_call_numbers: &[String],
) -> Vec<BrowseEntry> {
    if !items.is_empty() {
        return build_browse_entries(items, holdings, bound_withs);
    }

    let candidates = descriptive_call_numbers
        .iter()
        .map(|value| RawCallNumber {
            value: value.clone(),
            item_id: None,
            enumeration: None,
            from_bound_with: false,
        })
        .collect();
    entries_from_candidates(candidates)
}

/// Full normalized call numbers on the record whose detected scheme equals
/// `scheme`, deduplicated and in shelf order. Backs per-scheme index
/// fields: an LC-only lookup is never satisfied by a SuDoc value.
pub fn assigned_call_numbers(
    items: &[Item],
    holdings: &[Holding],
    bound_withs: &[BoundWithRef],
    scheme: Scheme,
) -> Vec<String> {
    let mut classified: Vec<_> = resolve_candidates(items, holdings, bound_withs)
        .iter()
        .filter_map(classify_raw)
        .filter(|c| c.scheme == scheme)
        .collect();
    classified.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

    let mut values = Vec::new();
    let mut seen = HashSet::new();
    for c in classified {
        if seen.insert(c.normalized.to_uppercase()) {
            values.push(c.normalized);
        }
    }
    tracing::debug!("{} {} call numbers assigned", values.len(), scheme.as_str());
    values
}

/// Gather one raw call number candidate per surviving physical item.
fn resolve_candidates(
    items: &[Item],
    holdings: &[Holding],
    bound_withs: &[BoundWithRef],
) -> Vec<RawCallNumber> {
    let holdings_by_id: HashMap<&str, &Holding> = holdings
        .iter()
        .filter_map(|h| h.id.as_deref().map(|id| (id, h)))
        .collect();
    let binder_by_item: HashMap<&str, &BoundWithRef> = bound_withs
        .iter()
        .map(|b| (b.item_id.as_str(), b))
        .collect();

    let mut candidates = Vec::new();

    for item in items {
        let Some(item_id) = item.id.as_deref() else {
            tracing::debug!("Skipping item without identifier");
            continue;
        };
        if item.suppressed {
            tracing::debug!("Skipping suppressed item {}", item_id);
            continue;
        }

        let mut value = None;
        let mut from_bound_with = false;

        // Bound-with: the binder's shelf location governs this piece.
        if let Some(relation) = binder_by_item.get(item_id) {
            match holdings_by_id.get(relation.holding_id.as_str()) {
                Some(binder) if binder.call_number.is_some() => {
                    value = binder.call_number.clone();
                    from_bound_with = true;
                }
                _ => {
                    tracing::debug!(
                        "Binder holding {} missing for item {}, using the item's own call number",
                        relation.holding_id,
                        item_id
                    );
                }
            }
        }

        if value.is_none() {
            value = item.call_number.clone();
        }
        if value.is_none() {
            value = item
                .holding_id
                .as_deref()
                .and_then(|holding_id| holdings_by_id.get(holding_id))
                .and_then(|holding| holding.call_number.clone());
        }

        if let Some(value) = value {
            candidates.push(RawCallNumber {
                value,
                item_id: Some(item_id.to_string()),
                enumeration: item.enumeration.clone(),
                from_bound_with,
            });
        }
    }

    candidates
}

fn entries_from_candidates(candidates: Vec<RawCallNumber>) -> Vec<BrowseEntry> {
    let candidate_count = candidates.len();
    let mut dedup: HashMap<(String, String), BrowseEntry> = HashMap::new();

    for raw in &candidates {
        let Some(classified) = classify_raw(raw) else {
            continue;
        };
        let callnumber = classified.full_call_number();
        let entry = BrowseEntry {
            lopped_callnumber: classified.lopped.clone(),
            callnumber: callnumber.clone(),
            item_reference: classified.item_id.clone(),
            scheme: classified.scheme,
            sort_key: classified.sort_key,
        };

        // Same shelf slot and same piece label: one representative entry,
        // lowest sort key wins as canonical. Comparison runs uppercased,
        // the survivor keeps its display form.
        let key = (classified.lopped.to_uppercase(), callnumber.to_uppercase());
        match dedup.get_mut(&key) {
            Some(existing) => {
                if entry.sort_key < existing.sort_key {
                    *existing = entry;
                }
            }
            None => {
                dedup.insert(key, entry);
            }
        }
    }

    let mut entries: Vec<BrowseEntry> = dedup.into_values().collect();
    entries.sort_by(|a, b| {
        a.sort_key
            .cmp(&b.sort_key)
            .then_with(|| a.lopped_callnumber.cmp(&b.lopped_callnumber))
            .then_with(|| a.callnumber.cmp(&b.callnumber))
    });

    tracing::info!(
        "Built {} browse entries from {} candidates",
        entries.len(),
        candidate_count
    );
    entries
}
