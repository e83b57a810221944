//! Core types for wirelog-core.
//!
//! This module defines the record model shared across the parser, the
//! aggregator, and the export layer: the typed [`FieldValue`], the
//! [`RecordKind`] discriminant, the insertion-ordered [`Entry`], and the
//! account-keyed [`RecordSet`].

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

/// A typed cell value produced by header-driven coercion.
///
/// The variant set is closed on purpose: a cell is an integer, a currency
/// amount, a boolean, or — whenever coercion fails or no rule applies — the
/// raw trimmed string. Serializes untagged, so JSON output carries plain
/// numbers, booleans, and strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// Which sub-report an entry came from, inferred from the header shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Voice,
    Data,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Voice => write!(f, "voice"),
            RecordKind::Data => write!(f, "data"),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One normalized line item: field name → typed value.
///
/// Field order follows the header in effect when the row was read, so the
/// backing store is an ordered list rather than a hash map. Headers top out
/// around a dozen fields; linear lookup is fine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    fields: Vec<(String, FieldValue)>,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. A repeated name overwrites the earlier value in place,
    /// keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.fields.iter().position(|(n, _)| *n == name) {
            Some(i) => self.fields[i].1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// True for the one malformed-row shape the parser discards: a single
    /// `Item` field holding the empty string.
    pub fn is_blank_placeholder(&self) -> bool {
        matches!(
            self.fields.as_slice(),
            [(name, FieldValue::Str(val))] if name == "Item" && val.is_empty()
        )
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// RecordSet
// ---------------------------------------------------------------------------

/// Per-kind entry lists for one account.
pub type KindMap = BTreeMap<RecordKind, Vec<Entry>>;

/// All normalized records of one or more parsed logs:
/// account id → record kind → entries in log order.
///
/// Entry order inside a kind preserves log order exactly. Account and kind
/// keys serialize in sorted map order, which is deterministic across runs
/// (the JSON output of the same inputs is byte-identical) but is not the
/// order accounts appeared in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    accounts: BTreeMap<String, KindMap>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an account's kind map, creating an empty one for an unseen
    /// account. The account key exists from this point on, even if no entry
    /// is ever appended under it.
    pub fn get_or_insert_account(&mut self, id: &str) -> &mut KindMap {
        self.accounts.entry(id.to_string()).or_default()
    }

    /// Append an entry under `(account, kind)`, vivifying both levels.
    pub fn push(&mut self, account: &str, kind: RecordKind, entry: Entry) {
        self.get_or_insert_account(account)
            .entry(kind)
            .or_default()
            .push(entry);
    }

    pub fn account(&self, id: &str) -> Option<&KindMap> {
        self.accounts.get(id)
    }

    /// Entries under `(account, kind)`, empty if either level is absent.
    pub fn entries(&self, account: &str, kind: RecordKind) -> &[Entry] {
        self.accounts
            .get(account)
            .and_then(|kinds| kinds.get(&kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn accounts(&self) -> impl Iterator<Item = (&str, &KindMap)> {
        self.accounts.iter().map(|(id, kinds)| (id.as_str(), kinds))
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Total entries across every account and kind.
    pub fn entry_count(&self) -> usize {
        self.accounts
            .values()
            .flat_map(|kinds| kinds.values())
            .map(Vec::len)
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
