//! Per-IP usage summary.
//!
//! Counts the distinct subnets and distinct security groups seen for each
//! `ip-addr`, then outer-merges the two counts on the IP. Rows without an
//! IP are not grouped; missing subnet or security-group cells are not
//! counted.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{AnalysisColumns, PipelineOptions};
use crate::error::{PipelineResult, TransformResult};
use crate::logs::log_success;
use crate::models::{AnalysisDisplay, AnalysisRow, Table};
use crate::writer::write_analysis;

/// Number of distinct present values of `value_column` per `key_column`.
pub fn distinct_counts(
    table: &Table,
    key_column: &str,
    value_column: &str,
) -> TransformResult<BTreeMap<String, usize>> {
    let key_index = table.require_column(key_column)?;
    let value_index = table.require_column(value_column)?;

    let mut groups: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for row in table.rows() {
        let Some(key) = row[key_index].as_deref() else {
            continue;
        };
        let values = groups.entry(key).or_default();
        if let Some(value) = row[value_index].as_deref() {
            values.insert(value);
        }
    }

    Ok(groups
        .into_iter()
        .map(|(key, values)| (key.to_string(), values.len()))
        .collect())
}

/// Outer merge of the two count tables on the IP.
///
/// An IP missing from one side keeps `None` for that count. Output is
/// ordered by IP.
pub fn outer_merge(
    security_group_counts: &BTreeMap<String, usize>,
    subnet_counts: &BTreeMap<String, usize>,
) -> Vec<AnalysisRow> {
    let keys: BTreeSet<&String> = security_group_counts
        .keys()
        .chain(subnet_counts.keys())
        .collect();

    keys.into_iter()
        .map(|ip| AnalysisRow {
            ip_addr: ip.clone(),
            count_security_group: security_group_counts.get(ip).copied(),
            count_subnet: subnet_counts.get(ip).copied(),
        })
        .collect()
}

/// Build the analysis table.
pub fn analyze(table: &Table, columns: &AnalysisColumns) -> TransformResult<Vec<AnalysisRow>> {
    let subnet_counts = distinct_counts(table, &columns.ip_addr, &columns.subnet)?;
    let security_group_counts = distinct_counts(table, &columns.ip_addr, &columns.security_group)?;

    Ok(outer_merge(&security_group_counts, &subnet_counts))
}

/// Analyze, write the analysis file and print the result.
pub fn analyze_and_report(
    table: &Table,
    options: &PipelineOptions,
) -> PipelineResult<Vec<AnalysisRow>> {
    let rows = analyze(table, &options.columns)?;

    write_analysis(&options.analysis_output, &rows, options.delimiter)?;
    log_success(format!(
        "{} IP addresses written to {}",
        rows.len(),
        options.analysis_output.display()
    ));

    println!("The analysis results are here");
    print!("{}", AnalysisDisplay(&rows));

    Ok(rows)
}
