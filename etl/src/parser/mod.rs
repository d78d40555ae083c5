//! PSV loader with encoding auto-detection.
//!
//! Turns a pipe-separated file with a header row into a [`Table`]. Values
//! are kept verbatim: no trimming, no type inference. Empty fields, fields
//! missing from short rows and whole-field null markers ([`NA_TOKENS`])
//! become missing cells.

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::models::{Cell, Table};

/// Whole-field markers read as a missing cell.
///
/// Matched exactly against the entire field. A marker inside a comma-joined
/// value (`a,NA`) is ordinary text.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Result of loading with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed table
    pub table: Table,
    /// Detected encoding label
    pub encoding: String,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 (which includes plain ASCII) short-circuits; anything else
/// goes through chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes with the given encoding label.
///
/// Unknown labels fall back to lossy UTF-8.
pub fn decode_content<'a>(bytes: &'a [u8], encoding: &str) -> Cow<'a, str> {
    let encoding = Encoding::for_label(encoding.as_bytes()).unwrap_or(UTF_8);
    encoding.decode(bytes).0
}

/// Parse PSV from a reader into a table.
pub fn parse_psv<R: Read>(reader: R, delimiter: u8) -> LoadResult<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header_record = reader.headers()?.clone();
    if header_record.is_empty() {
        return Err(LoadError::EmptyFile);
    }
    let headers = dedupe_headers(&header_record);
    let mut table = Table::new(headers);

    for record in reader.records() {
        let record = record?;
        if record.len() > table.width() {
            return Err(LoadError::RaggedRow {
                line: record.position().map_or(0, |p| p.line()),
                expected: table.width(),
                found: record.len(),
            });
        }
        table.push_row(record.iter().map(to_cell).collect());
    }

    Ok(table)
}

/// Parse PSV bytes, detecting the encoding first.
pub fn parse_bytes(bytes: &[u8], delimiter: u8) -> LoadResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let table = parse_psv(content.as_bytes(), delimiter)?;

    Ok(ParseResult { table, encoding })
}

/// Load a PSV file.
///
/// # Example
/// ```ignore
/// let result = parse_psv_file("inventory.psv", b'|')?;
/// println!("{} rows ({})", result.table.height(), result.encoding);
/// ```
pub fn parse_psv_file<P: AsRef<Path>>(path: P, delimiter: u8) -> LoadResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes, delimiter)
}

fn to_cell(field: &str) -> Cell {
    if field.is_empty() || NA_TOKENS.contains(&field) {
        return None;
    }
    Some(field.to_string())
}

/// Make header names unique: a repeated `name` becomes `name.1`, `name.2`, ...
fn dedupe_headers(record: &StringRecord) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(record.len());

    for name in record.iter() {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}
