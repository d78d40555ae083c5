//! PSV writers for the processed and analysis tables.
//!
//! Both outputs are truncated on open. Fields are quoted only when they
//! contain the delimiter, a quote or a line break; missing cells and unset
//! counts are written as empty fields.

use csv::{QuoteStyle, Writer, WriterBuilder};
use std::fs::File;
use std::path::Path;

use crate::error::WriteResult;
use crate::models::{AnalysisRow, Table, ANALYSIS_HEADERS};

fn open(path: &Path, delimiter: u8) -> WriteResult<Writer<File>> {
    let writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .has_headers(false)
        .from_path(path)?;
    Ok(writer)
}

/// Write a table (header + rows), replacing any previous content.
pub fn write_table(path: &Path, table: &Table, delimiter: u8) -> WriteResult<()> {
    let mut writer = open(path, delimiter)?;

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the analysis table, replacing any previous content.
///
/// The header is written even when there are no rows.
pub fn write_analysis(path: &Path, rows: &[AnalysisRow], delimiter: u8) -> WriteResult<()> {
    let mut writer = open(path, delimiter)?;

    writer.write_record(ANALYSIS_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_table_with_missing_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out");
        let table = Table::from_rows(&["a", "b"], &[&["1", ""], &["x|y", "2"]]);

        write_table(&path, &table, b'|').unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a|b\n1|\n\"x|y\"|2\n");
    }

    #[test]
    fn test_write_table_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out");
        fs::write(&path, "stale|content\nmore|lines\nand|more\n").unwrap();

        write_table(&path, &Table::from_rows(&["a"], &[&["1"]]), b'|').unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n1\n");
    }

    #[test]
    fn test_write_analysis_unset_counts_are_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis");
        let rows = vec![
            AnalysisRow {
                ip_addr: "10.0.0.1".into(),
                count_security_group: Some(2),
                count_subnet: Some(3),
            },
            AnalysisRow {
                ip_addr: "10.0.0.2".into(),
                count_security_group: None,
                count_subnet: Some(1),
            },
        ];

        write_analysis(&path, &rows, b'|').unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "ip-addr|count_security_group|count_subnet\n10.0.0.1|2|3\n10.0.0.2||1\n"
        );
    }

    #[test]
    fn test_write_analysis_empty_keeps_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis");

        write_analysis(&path, &[], b'|').unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "ip-addr|count_security_group|count_subnet\n"
        );
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out");
        assert!(write_table(&path, &Table::default(), b'|').is_err());
    }
}
