//! Explode multi-valued cells into one row per value.
//!
//! # Example
//!
//! ```text
//! ip-addr   subnet          ip-addr   subnet
//! 10.0.0.1  a,b        →    10.0.0.1  a
//! 10.0.0.2  c               10.0.0.1  b
//!                           10.0.0.2  c
//! ```
//!
//! Columns are exploded one at a time, each pass working on the output of
//! the previous one. Sub-values are not trimmed, and empty sub-values (from
//! `a,,b` or a trailing comma) are kept as rows with an empty string.
//! Missing cells stay as a single row.

use crate::error::{TransformError, TransformResult};
use crate::logs::log_info_indent;
use crate::models::{Cell, Table};

/// Explode a single column.
pub fn explode_column(table: &Table, column: &str, separator: char) -> TransformResult<Table> {
    let index = table.require_column(column)?;

    let mut exploded: Vec<Vec<Cell>> = Vec::with_capacity(table.height());
    for row in table.rows() {
        match &row[index] {
            Some(value) if value.contains(separator) => {
                for part in value.split(separator) {
                    let mut new_row = row.clone();
                    new_row[index] = Some(part.to_string());
                    exploded.push(new_row);
                }
            }
            _ => exploded.push(row.clone()),
        }
    }

    Ok(Table::from_parts(table.headers().to_vec(), exploded))
}

/// Explode several columns cumulatively, in the given order.
///
/// `after_pass` sees the column just exploded and the table so far; the
/// pipeline uses it to rewrite the processed output after every pass.
pub fn explode_columns<F, E>(
    table: &Table,
    columns: &[String],
    separator: char,
    mut after_pass: F,
) -> Result<Table, E>
where
    F: FnMut(&str, &Table) -> Result<(), E>,
    E: From<TransformError>,
{
    let mut current: Option<Table> = None;

    for column in columns {
        let input = current.as_ref().unwrap_or(table);
        let before = input.height();
        let next = explode_column(input, column, separator)?;
        log_info_indent(
            format!("{}: {} → {} rows", column, before, next.height()),
            1,
        );
        after_pass(column, &next)?;
        current = Some(next);
    }

    Ok(current.unwrap_or_else(|| table.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(table: &Table, column: &str) -> Vec<Option<String>> {
        let index = table.column_index(column).unwrap();
        table.column(index).map(|c| c.map(str::to_string)).collect()
    }

    fn no_callback(_: &str, _: &Table) -> Result<(), TransformError> {
        Ok(())
    }

    #[test]
    fn test_k_parts_give_k_rows() {
        let table = Table::from_rows(
            &["ip-addr", "subnet", "owner"],
            &[&["10.0.0.1", "a,b,c", "ops"], &["10.0.0.2", "d", "dev"]],
        );

        let exploded = explode_column(&table, "subnet", ',').unwrap();

        assert_eq!(exploded.height(), 4);
        assert_eq!(exploded.headers(), table.headers());
        for row in &exploded.rows()[..3] {
            assert_eq!(row[0].as_deref(), Some("10.0.0.1"));
            assert_eq!(row[2].as_deref(), Some("ops"));
        }
        assert_eq!(
            cells(&exploded, "subnet"),
            ["a", "b", "c", "d"].map(|s| Some(s.to_string()))
        );
    }

    #[test]
    fn test_sub_values_are_not_trimmed() {
        let table = Table::from_rows(&["sg"], &[&["x, y"]]);
        let exploded = explode_column(&table, "sg", ',').unwrap();
        assert_eq!(
            cells(&exploded, "sg"),
            vec![Some("x".to_string()), Some(" y".to_string())]
        );
    }

    #[test]
    fn test_trailing_comma_yields_empty_value() {
        let table = Table::from_rows(&["sg"], &[&["x,"]]);
        let exploded = explode_column(&table, "sg", ',').unwrap();
        assert_eq!(
            cells(&exploded, "sg"),
            vec![Some("x".to_string()), Some(String::new())]
        );
    }

    #[test]
    fn test_missing_cell_stays_single_row() {
        let table = Table::from_rows(&["ip", "sg"], &[&["1", ""], &["2", "x,y"]]);
        let exploded = explode_column(&table, "sg", ',').unwrap();

        assert_eq!(exploded.height(), 3);
        assert_eq!(exploded.rows()[0][1], None);
    }

    #[test]
    fn test_cumulative_explosion() {
        let table = Table::from_rows(
            &["ip-addr", "subnet", "security-group"],
            &[&["10.0.0.1", "a,b", "x,y"], &["10.0.0.1", "c", "x"]],
        );
        let columns = vec!["subnet".to_string(), "security-group".to_string()];

        let mut passes = Vec::new();
        let exploded = explode_columns(&table, &columns, ',', |column, current| {
            passes.push((column.to_string(), current.height()));
            Ok::<(), TransformError>(())
        })
        .unwrap();

        // Row 1 multiplies 2 × 2, row 2 stays.
        assert_eq!(exploded.height(), 5);
        assert_eq!(
            passes,
            vec![("subnet".to_string(), 3), ("security-group".to_string(), 5)]
        );
    }

    #[test]
    fn test_explode_is_idempotent_without_separators() {
        let table = Table::from_rows(&["ip-addr", "subnet"], &[&["10.0.0.1", "a"], &["10.0.0.2", ""]]);
        let columns = vec!["ip-addr".to_string(), "subnet".to_string()];

        let exploded = explode_columns(&table, &columns, ',', no_callback).unwrap();

        assert_eq!(exploded, table);
    }

    #[test]
    fn test_empty_table_stays_empty() {
        let table = Table::from_rows(&["ip-addr", "subnet"], &[]);
        let exploded = explode_columns(&table, &[], ',', no_callback).unwrap();
        assert_eq!(exploded, table);
    }

    #[test]
    fn test_input_table_is_left_untouched() {
        let table = Table::from_rows(&["ip", "sg"], &[&["1", "x,y,z"], &["2", "w"]]);
        let snapshot = table.clone();

        let exploded = explode_column(&table, "sg", ',').unwrap();

        assert_eq!(table, snapshot);
        assert_eq!(exploded.height(), 4);
        assert_eq!(exploded.rows()[3], vec![Some("2".to_string()), Some("w".to_string())]);
    }

    #[test]
    fn test_unknown_column_is_error() {
        let table = Table::from_rows(&["ip-addr"], &[&["10.0.0.1"]]);
        let err = explode_column(&table, "subnet", ',').unwrap_err();
        assert!(matches!(err, TransformError::MissingColumn(c) if c == "subnet"));
    }

    #[test]
    fn test_callback_error_stops_explosion() {
        let table = Table::from_rows(&["a", "b"], &[&["1,2", "3,4"]]);
        let columns = vec!["a".to_string(), "b".to_string()];
        let mut calls = 0;

        let result = explode_columns(&table, &columns, ',', |_, _| {
            calls += 1;
            Err(TransformError::MissingColumn("disk".into()))
        });

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
