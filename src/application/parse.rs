use crate::domain::entities::log_entry::LogEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::sheet_source::SheetRows;
use crate::domain::values::action::Action;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

/// Header aliases accepted per column, matched case-insensitively on the
/// trimmed header cell. First header cell that matches wins.
const TIMESTAMP_COLUMNS: &[&str] = &["timestamp", "time", "date"];
const SYMBOL_COLUMNS: &[&str] = &["symbol", "ticker", "instrument"];
const ACTION_COLUMNS: &[&str] = &["action"];
const QUANTITY_COLUMNS: &[&str] = &["qty", "quantity", "shares"];
const PRICE_COLUMNS: &[&str] = &["price"];
const NOTES_COLUMNS: &[&str] = &["notes", "note"];

/// Timestamp formats tried in order after RFC 3339; first match wins.
/// Naive values are taken as UTC instants; the sheet writes UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// A data row that failed required-field parsing. Carried through to the
/// report so bad rows are visible to the recipient, never silently dropped.
#[derive(Debug, Clone, Serialize)]
pub struct RowFailure {
    /// 1-based sheet row number (the header is row 1).
    pub row_number: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ParseOutput {
    pub entries: Vec<LogEntry>,
    pub invalid: Vec<RowFailure>,
}

/// Header-name → cell-index projection, built once per fetch so the per-row
/// loop never does name lookups.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    timestamp: usize,
    symbol: usize,
    action: usize,
    quantity: Option<usize>,
    price: Option<usize>,
    notes: Option<usize>,
}

impl ColumnMap {
    fn resolve(header: &[String]) -> Result<Self, DomainError> {
        let find = |aliases: &[&str]| {
            header
                .iter()
                .position(|h| aliases.contains(&h.trim().to_lowercase().as_str()))
        };

        let required = |aliases: &[&str]| {
            find(aliases).ok_or_else(|| {
                DomainError::Config(format!(
                    "Sheet header is missing a required column (one of: {})",
                    aliases.join(", ")
                ))
            })
        };

        Ok(Self {
            timestamp: required(TIMESTAMP_COLUMNS)?,
            symbol: required(SYMBOL_COLUMNS)?,
            action: required(ACTION_COLUMNS)?,
            quantity: find(QUANTITY_COLUMNS),
            price: find(PRICE_COLUMNS),
            notes: find(NOTES_COLUMNS),
        })
    }
}

/// Parse the raw sheet contents into entries and row failures, one outcome
/// per non-blank data row, in input order. An entirely empty sheet parses to
/// an empty output; a header missing a required column fails the whole run.
pub fn parse_rows(sheet: &SheetRows) -> Result<ParseOutput, DomainError> {
    let Some(header) = sheet.header() else {
        return Ok(ParseOutput::default());
    };
    let columns = ColumnMap::resolve(header)?;

    let mut out = ParseOutput::default();
    for (i, row) in sheet.data_rows().iter().enumerate() {
        // Sheet row number: header is row 1, first data row is row 2.
        let row_number = i + 2;
        if row.iter().all(|c| c.trim().is_empty()) {
            continue; // blank separator row
        }
        match parse_row(row, columns, row_number) {
            Ok(entry) => out.entries.push(entry),
            Err(reason) => out.invalid.push(RowFailure { row_number, reason }),
        }
    }
    Ok(out)
}

fn parse_row(row: &[String], columns: ColumnMap, row_number: usize) -> Result<LogEntry, String> {
    let timestamp = parse_timestamp(cell(row, columns.timestamp))?;
    let quantity = match columns.quantity {
        Some(i) => parse_decimal(cell(row, i)).map_err(|e| format!("quantity {e}"))?,
        None => None,
    };
    let price = match columns.price {
        Some(i) => parse_decimal(cell(row, i)).map_err(|e| format!("price {e}"))?,
        None => None,
    };

    let notes = columns
        .notes
        .map(|i| cell(row, i).trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(LogEntry {
        row_number,
        // Symbol and action carry no validation: trimmed pass-through.
        action: Action::parse(cell(row, columns.action)),
        timestamp,
        symbol: cell(row, columns.symbol).trim().to_string(),
        quantity,
        price,
        notes,
    })
}

/// Cells past the end of a short row read as empty.
fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn parse_timestamp(cell: &str) -> Result<DateTime<Utc>, String> {
    let s = cell.trim();
    if s.is_empty() {
        return Err("empty timestamp".into());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).unwrap();
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    Err(format!("unrecognized timestamp format: {s:?}"))
}

/// Permissive decimal parse: empty means absent, currency noise (`$`, `,`)
/// is stripped, anything else non-numeric fails the row.
fn parse_decimal(cell: &str) -> Result<Option<f64>, String> {
    let s = cell.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let cleaned = s.replace(['$', ','], "");
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("is not a number: {s:?}"))
}
