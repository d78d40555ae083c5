//! Split columns into multi-valued and single-valued.
//!
//! A column is multi-valued as soon as one of its cells contains the value
//! separator. Cells are inspected as plain text.

use crate::models::{ColumnClassification, Table};

/// Names of the columns holding at least one separated cell, in column order.
pub fn multi_valued_columns(table: &Table, separator: char) -> Vec<String> {
    table
        .headers()
        .iter()
        .enumerate()
        .filter(|(index, _)| {
            table
                .column(*index)
                .flatten()
                .any(|value| value.contains(separator))
        })
        .map(|(_, name)| name.clone())
        .collect()
}

/// Every column not listed in `multi_valued`, in column order.
pub fn single_valued_columns(table: &Table, multi_valued: &[String]) -> Vec<String> {
    table
        .headers()
        .iter()
        .filter(|name| !multi_valued.contains(name))
        .cloned()
        .collect()
}

/// Classify every column of the table.
pub fn classify_columns(table: &Table, separator: char) -> ColumnClassification {
    let multi_valued = multi_valued_columns(table, separator);
    let single_valued = single_valued_columns(table, &multi_valued);

    ColumnClassification {
        multi_valued,
        single_valued,
    }
}

/// Print both column lists to stdout.
pub fn print_classification(classification: &ColumnClassification) {
    println!(
        "multi valued columns are {}",
        format_column_list(&classification.multi_valued)
    );
    println!(
        "single valued columns are {}",
        format_column_list(&classification.single_valued)
    );
}

/// Console form of a column list: `['a', 'b']`.
pub fn format_column_list(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| format!("'{}'", c)).collect();
    format!("[{}]", quoted.join(", "))
}
