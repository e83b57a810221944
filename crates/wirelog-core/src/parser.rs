//! Parser — the row-driven state machine over one CSV billing export.
//!
//! A log file mixes multiple accounts, and voice + data sub-reports for each
//! account. The machine walks three implicit states:
//!
//! ```text
//! seeking account ──► seeking kind ──► reading entries
//!       ▲   (account row)    (header row)      │
//!       └──────────── carrier banner ◄─────────┘
//! ```
//!
//! A carrier banner row resets everything unconditionally; a `Total` row
//! closes the current sub-report and returns to header-seeking under the same
//! account. Each captured header doubles as the field-name source and the
//! coercion schema for every row beneath it.

use crate::error::Error;
use crate::types::{Entry, FieldValue, RecordKind, RecordSet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Every report section opens with a banner line carrying the carrier name.
const BANNER_PREFIX: &str = "AT&T";

/// Account ids are phone-number shaped: `DDD-DDD-DDDD` at the start of the
/// cell, matching the vendor's own loose convention.
static PHONE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d{3}-){2}\d{4}").unwrap());

/// Any header name mentioning "charge" holds a currency amount.
static CHARGE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)charge").unwrap());

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

// ---------------------------------------------------------------------------
// LogParser
// ---------------------------------------------------------------------------

/// Transient per-file cursor. All three fields null means the machine is
/// seeking an account; account alone set means seeking a header; kind and
/// header are set and cleared together.
#[derive(Debug, Default)]
struct ParserState {
    account: Option<String>,
    kind: Option<RecordKind>,
    header: Option<Vec<String>>,
}

impl ParserState {
    fn reset(&mut self) {
        *self = ParserState::default();
    }
}

/// Incremental parser for one billing export. Feed rows in file order, then
/// take the accumulated [`RecordSet`] with [`finish`](LogParser::finish).
#[derive(Debug, Default)]
pub struct LogParser {
    state: ParserState,
    records: RecordSet,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the machine by one row. Errors are fatal to the whole file;
    /// the caller should discard the parser after a failure.
    pub fn feed(&mut self, row: &[String]) -> Result<(), Error> {
        if row.is_empty() {
            // These files are full of blank lines.
            return Ok(());
        }

        if row[0].starts_with(BANNER_PREFIX) {
            // New report section; nothing from the previous one carries over.
            debug!("carrier banner, resetting state");
            self.state.reset();
            return Ok(());
        }

        if self.state.account.is_none() {
            if row.len() == 2 && PHONE_SHAPE.is_match(&row[1]) {
                debug!(account = %row[1], "account boundary");
                self.records.get_or_insert_account(&row[1]);
                self.state.account = Some(row[1].clone());
            }
            return Ok(());
        }

        if self.state.kind.is_none() {
            if row[0] == "Item" {
                let (kind, header) = normalize_header(row)?;
                debug!(%kind, fields = header.len(), "header captured");
                self.state.kind = Some(kind);
                self.state.header = Some(header);
            }
            return Ok(());
        }

        let first = row[0].trim();
        if first.starts_with("Total") {
            // Closes the sub-report; the account stays current.
            debug!("total boundary, awaiting next header");
            self.state.kind = None;
            self.state.header = None;
            return Ok(());
        }
        if first.starts_with("Subtotal") {
            // Subtotal detail is discarded; downstream consumers re-aggregate.
            return Ok(());
        }

        let ParserState {
            account: Some(account),
            kind: Some(kind),
            header: Some(header),
        } = &self.state
        else {
            return Err(Error::IllegalState(
                "entry row reached without account, kind, and header all set".to_string(),
            ));
        };

        let entry = decode_entry(row, header)?;
        if !entry.is_blank_placeholder() {
            self.records.push(account, *kind, entry);
        }
        Ok(())
    }

    pub fn finish(self) -> RecordSet {
        self.records
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse an already-split sequence of rows.
pub fn parse_rows<I>(rows: I) -> Result<RecordSet, Error>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut parser = LogParser::new();
    for row in rows {
        parser.feed(&row)?;
    }
    Ok(parser.finish())
}

/// Parse CSV rows from any readable source. Cell counts vary per row, so the
/// reader runs flexible and without an implicit header row.
pub fn parse_reader<R: Read>(reader: R) -> Result<RecordSet, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut parser = LogParser::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        parser.feed(&row)?;
    }
    Ok(parser.finish())
}

/// Open and parse one export file. The handle closes on every exit path,
/// parse failures included.
pub fn parse_path(path: impl AsRef<Path>) -> Result<RecordSet, Error> {
    let file = File::open(path.as_ref())?;
    parse_reader(BufReader::new(file))
}

// ---------------------------------------------------------------------------
// Header normalization & kind inference
// ---------------------------------------------------------------------------

/// Repair known vendor header inconsistencies, then judge the record kind
/// from the cell at index 4.
fn normalize_header(row: &[String]) -> Result<(RecordKind, Vec<String>), Error> {
    let mut header = row.to_vec();

    if header.get(4).map(String::as_str) == Some("Call To") {
        // Roaming headers omit the "Number Called" column and their last
        // column actually flags roaming.
        header.insert(4, "Number Called".to_string());
        if let Some(last) = header.last_mut() {
            *last = "Roaming".to_string();
        }
    }

    match header.get(4).map(String::as_str) {
        Some("Number Called") => Ok((RecordKind::Voice, header)),
        Some("To/From") => {
            // Some layouts say "Msgs/KB" and "Sent/Rcvd"; normalize the names
            // so entries keep one field set per kind.
            if let Some(name) = header.get_mut(6) {
                *name = "Msg/KB".to_string();
            }
            if let Some(name) = header.get_mut(10) {
                *name = "In/Out".to_string();
            }
            Ok((RecordKind::Data, header))
        }
        _ => Err(Error::Parse(format!("{row:?}"))),
    }
}

// ---------------------------------------------------------------------------
// Entry decoding
// ---------------------------------------------------------------------------

/// Decode one data row against the active header. A row with more cells than
/// the header defines is a structural mismatch and fails the file.
fn decode_entry(row: &[String], header: &[String]) -> Result<Entry, Error> {
    let mut entry = Entry::new();
    for (i, cell) in row.iter().enumerate() {
        let name = header.get(i).ok_or_else(|| {
            Error::BadHeader(format!(
                "row {row:?} has {} cells but header {header:?} defines {}",
                row.len(),
                header.len()
            ))
        })?;
        entry.insert(name.clone(), coerce(name, cell.trim()));
    }
    Ok(entry)
}

/// Coerce one trimmed cell by its header name. First matching rule wins; a
/// failed parse keeps the raw trimmed string and is never an error.
fn coerce(name: &str, raw: &str) -> FieldValue {
    if name == "Item" {
        return int_or_raw(raw);
    }
    if name == "Day" {
        // Some logs carry full weekday names, some only the abbreviation.
        return FieldValue::Str(raw.chars().take(3).collect::<String>().to_uppercase());
    }
    if CHARGE_NAME.is_match(name) {
        return raw
            .parse::<f64>()
            .map(FieldValue::Float)
            .unwrap_or_else(|_| FieldValue::Str(raw.to_string()));
    }
    if name == "Roaming" {
        // The column only exists on repaired roaming headers.
        return FieldValue::Bool(true);
    }
    if name == "Min" {
        return int_or_raw(raw);
    }
    if name.starts_with("Msg/KB") || name == "Number Dialed" || name == "To/From" {
        // Phone numbers and "1,234 KB"-style quantities: digits only.
        let digits = NON_DIGIT.replace_all(raw, "");
        return digits
            .parse::<i64>()
            .map(FieldValue::Int)
            .unwrap_or_else(|_| FieldValue::Str(raw.to_string()));
    }
    if name == "In/Out" {
        // Some layouts say Sent/Rcvd instead.
        return match raw {
            "Rcvd" | "In" => FieldValue::Str("In".to_string()),
            "Sent" | "Out" => FieldValue::Str("Out".to_string()),
            _ => FieldValue::Str(raw.to_string()),
        };
    }
    FieldValue::Str(raw.to_string())
}

fn int_or_raw(raw: &str) -> FieldValue {
    raw.parse::<i64>()
        .map(FieldValue::Int)
        .unwrap_or_else(|_| FieldValue::Str(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
