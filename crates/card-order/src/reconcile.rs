//! Order Reconciliation
//!
//! Merges a saved id order with the current canonical cards.

use std::collections::{HashMap, HashSet};

use crate::item::CardItem;

/// Apply a saved order to the canonical cards.
///
/// Saved ids that still exist come first, in saved order (a repeated id is
/// placed once). Canonical cards the saved order does not mention follow in
/// canonical order. Unknown ids are dropped, so the result is always a
/// permutation of `canonical`.
pub fn reconcile(canonical: &[CardItem], saved: &[String]) -> Vec<CardItem> {
    let by_id: HashMap<&str, &CardItem> = canonical
        .iter()
        .map(|item| (item.id.as_str(), item))
        .collect();

    let mut placed: HashSet<&str> = HashSet::with_capacity(canonical.len());
    let mut result = Vec::with_capacity(canonical.len());

    for id in saved {
        if let Some(item) = by_id.get(id.as_str()) {
            if placed.insert(id.as_str()) {
                result.push((*item).clone());
            }
        }
    }

    for item in canonical {
        if !placed.contains(item.id.as_str()) {
            result.push(item.clone());
        }
    }

    result
}
