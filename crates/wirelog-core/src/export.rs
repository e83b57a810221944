//! Export — JSON rendering of a [`RecordSet`].
//!
//! The document shape is `{account: {kind: [entry, ...]}}` with coerced types
//! preserved: integers and currency amounts as JSON numbers, the roaming flag
//! as a JSON boolean, everything else as strings. Output for the same input
//! is byte-identical across runs.

use crate::error::Error;
use crate::types::RecordSet;

/// Render as a compact JSON document.
pub fn to_json(set: &RecordSet) -> Result<String, Error> {
    Ok(serde_json::to_string(set)?)
}

/// Render as an indented JSON document, for human-facing output.
pub fn to_json_pretty(set: &RecordSet) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(set)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
