//! Aggregate — concatenation-merge of parsed record sets.
//!
//! One parsed file yields one [`RecordSet`]; a run over many files folds them
//! left-to-right in input order. The merge is pure list concatenation per
//! `(account, kind)` — no dedup, no reordering — so it is associative and the
//! empty set is its identity.

use crate::types::RecordSet;

/// Combine two record sets into a new one. For every account and kind in
/// either input, the result holds `a`'s entries followed by `b`'s; absent
/// lists count as empty. Neither input is mutated.
pub fn merge(a: &RecordSet, b: &RecordSet) -> RecordSet {
    let mut merged = RecordSet::new();
    for side in [a, b] {
        for (account, kinds) in side.accounts() {
            let slot = merged.get_or_insert_account(account);
            for (kind, entries) in kinds {
                slot.entry(*kind)
                    .or_default()
                    .extend(entries.iter().cloned());
            }
        }
    }
    merged
}

/// Fold any number of record sets in iteration order.
pub fn merge_all<I>(sets: I) -> RecordSet
where
    I: IntoIterator<Item = RecordSet>,
{
    sets.into_iter()
        .fold(RecordSet::new(), |acc, next| merge(&acc, &next))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
