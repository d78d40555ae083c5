//! Domain models for the multival pipeline.
//!
//! - [`Table`] - header plus rows of optional text cells
//! - [`ColumnClassification`] - multi-valued vs single-valued columns
//! - [`AnalysisRow`] - per-IP distinct counts of subnets and security groups

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TransformError, TransformResult};

// =============================================================================
// Table
// =============================================================================

/// A cell of the table. `None` is a missing field.
pub type Cell = Option<String>;

/// In-memory tabular data with named columns.
///
/// Every row holds exactly `headers.len()` cells. Values are kept as text;
/// nothing is type-inferred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding missing trailing cells.
    ///
    /// Extra cells beyond the header width are dropped; callers that care
    /// about ragged rows check before pushing.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    /// Build a table from string literals, mostly for tests.
    ///
    /// Empty strings become missing cells, like an empty input field.
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        let mut table = Self::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            table.push_row(
                row.iter()
                    .map(|v| (!v.is_empty()).then(|| v.to_string()))
                    .collect(),
            );
        }
        table
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of a column the caller requires.
    pub fn require_column(&self, name: &str) -> TransformResult<usize> {
        self.column_index(name)
            .ok_or_else(|| TransformError::MissingColumn(name.to_string()))
    }

    /// Iterate over the cells of one column.
    pub fn column(&self, index: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows.iter().map(move |row| row[index].as_deref())
    }

    pub(crate) fn from_parts(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }
}

/// Right-aligned text grid with a leading row index, like a dataframe print.
fn render_grid<H: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    headers: &[H],
    rows: &[Vec<&str>],
) -> fmt::Result {
    if rows.is_empty() {
        let columns: Vec<&str> = headers.iter().map(|h| h.as_ref()).collect();
        writeln!(f, "Empty table")?;
        writeln!(f, "Columns: [{}]", columns.join(", "))?;
        return writeln!(f, "Index: []");
    }

    let index_width = (rows.len() - 1).to_string().len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write!(f, "{:index_width$}", "")?;
    for (header, &width) in headers.iter().zip(&widths) {
        write!(f, "  {:>width$}", header.as_ref())?;
    }
    writeln!(f)?;

    for (i, row) in rows.iter().enumerate() {
        write!(f, "{:<index_width$}", i)?;
        for (cell, &width) in row.iter().zip(&widths) {
            write!(f, "  {:>width$}", cell)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

// =============================================================================
// Column Classification
// =============================================================================

/// Partition of a table's columns.
///
/// Both lists keep the table's column order and together cover every column
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnClassification {
    pub multi_valued: Vec<String>,
    pub single_valued: Vec<String>,
}

impl ColumnClassification {
    pub fn is_multi_valued(&self, column: &str) -> bool {
        self.multi_valued.iter().any(|c| c == column)
    }
}

// =============================================================================
// Analysis
// =============================================================================

/// Header of the analysis output, in merge order.
pub const ANALYSIS_HEADERS: [&str; 3] = ["ip-addr", "count_security_group", "count_subnet"];

/// One row of the analysis table.
///
/// A `None` count means the IP was absent from that side of the outer
/// merge. It is never read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    #[serde(rename = "ip-addr")]
    pub ip_addr: String,
    pub count_security_group: Option<usize>,
    pub count_subnet: Option<usize>,
}

/// Console view of an analysis result.
pub struct AnalysisDisplay<'a>(pub &'a [AnalysisRow]);

impl fmt::Display for AnalysisDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<[String; 2]> = self
            .0
            .iter()
            .map(|row| [format_count(row.count_security_group), format_count(row.count_subnet)])
            .collect();
        let rendered: Vec<Vec<&str>> = self
            .0
            .iter()
            .zip(&counts)
            .map(|(row, [sg, subnet])| vec![row.ip_addr.as_str(), sg.as_str(), subnet.as_str()])
            .collect();
        render_grid(f, &ANALYSIS_HEADERS, &rendered)
    }
}

fn format_count(count: Option<usize>) -> String {
    count.map_or_else(|| "NaN".to_string(), |c| c.to_string())
}
