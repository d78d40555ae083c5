//! High-level pipeline API.
//!
//! Runs every stage in order: load, classify, explode, analyze.
//!
//! # Example
//!
//! ```rust,ignore
//! use multival::{run, PipelineOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = run(Path::new("inventory.psv"), &PipelineOptions::default())?;
//!     println!("{} IP addresses", result.analysis.len());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use super::analyzer::analyze_and_report;
use super::classifier::{classify_columns, print_classification};
use super::exploder::explode_columns;
use crate::config::PipelineOptions;
use crate::error::{PipelineError, PipelineResult};
use crate::logs::{log_info, log_success, log_warning};
use crate::models::{AnalysisRow, ColumnClassification, Table};
use crate::parser::{parse_bytes, parse_psv_file, ParseResult};
use crate::writer::write_table;

/// Result of a complete pipeline run
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Input file information
    pub input_info: InputInfo,

    /// Column partition of the raw table
    pub classification: ColumnClassification,

    /// Table after every multi-valued column was exploded
    pub processed: Table,

    /// Per-IP counts
    pub analysis: Vec<AnalysisRow>,
}

/// Input file information
#[derive(Debug, Clone)]
pub struct InputInfo {
    pub encoding: String,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// Run the pipeline on a PSV file.
pub fn run(path: &Path, options: &PipelineOptions) -> PipelineResult<RunResult> {
    log_info(format!("Reading {}...", path.display()));
    let parsed = parse_psv_file(path, options.delimiter)?;
    run_parsed(parsed, options)
}

/// Run the pipeline on in-memory PSV bytes.
pub fn run_bytes(bytes: &[u8], options: &PipelineOptions) -> PipelineResult<RunResult> {
    let parsed = parse_bytes(bytes, options.delimiter)?;
    run_parsed(parsed, options)
}

fn run_parsed(parsed: ParseResult, options: &PipelineOptions) -> PipelineResult<RunResult> {
    let ParseResult { table, encoding } = parsed;

    log_success(format!("Detected encoding: {}", encoding));
    log_success(format!(
        "Read {} rows, {} columns",
        table.height(),
        table.width()
    ));
    if table.is_empty() {
        log_warning("Input has a header but no data rows");
    }

    let input_info = InputInfo {
        encoding,
        headers: table.headers().to_vec(),
        row_count: table.height(),
    };

    // Step 1: classify
    let classification = classify_columns(&table, options.value_separator);
    print_classification(&classification);
    let multi_valued = &classification.multi_valued;

    // Step 2: explode, rewriting the processed output after each column
    let processed = if multi_valued.is_empty() {
        log_info("No multi-valued columns, nothing to explode");
        table
    } else {
        log_info(format!("Exploding {} column(s)...", multi_valued.len()));
        let processed = explode_columns(
            &table,
            multi_valued,
            options.value_separator,
            |_, current| -> Result<(), PipelineError> {
                write_table(&options.processed_output, current, options.delimiter)?;
                Ok(())
            },
        )?;
        log_success(format!(
            "{} rows written to {}",
            processed.height(),
            options.processed_output.display()
        ));
        processed
    };

    // Step 3: analyze
    let analysis = analyze_and_report(&processed, options)?;

    Ok(RunResult {
        input_info,
        classification,
        processed,
        analysis,
    })
}
