//! wirelog-core — billing-log parsing and aggregation.
//!
//! Parses AT&T wireless CSV billing exports into a normalized [`RecordSet`]
//! and merges the record sets of many logs into one JSON-serializable
//! document.
//!
//! # Architecture
//!
//! ```text
//! Parser ──► RecordSet ──► Aggregate ──► Export
//! ```
//!
//! The parser is a small row-driven state machine: it detects account
//! boundaries, infers the record kind (voice or data) from the shape of each
//! header row, repairs known vendor header inconsistencies, and coerces every
//! cell according to its header name. Aggregation is a pure
//! concatenation-merge; export renders the merged set as a single JSON
//! object. Everything is synchronous — one file is parsed start-to-finish
//! before the next.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod types;

pub use config::{Config, ConvertConfig, OnError};
pub use error::Error;
pub use parser::LogParser;
pub use types::{Entry, FieldValue, RecordKind, RecordSet};
