//! Pipeline configuration.
//!
//! The CLI always runs with [`PipelineOptions::default`]; library callers
//! and tests can point the outputs elsewhere or rename the analysis columns.

use std::path::PathBuf;

/// Field delimiter of input and output files.
pub const DEFAULT_DELIMITER: u8 = b'|';

/// Separator joining several values inside one cell.
pub const DEFAULT_VALUE_SEPARATOR: char = ',';

/// Processed (exploded) table, rewritten after every explosion pass.
pub const DEFAULT_PROCESSED_OUTPUT: &str = "output_file";

/// Per-IP summary table.
pub const DEFAULT_ANALYSIS_OUTPUT: &str = "analysis";

/// Grouping key column.
pub const IP_ADDR_COLUMN: &str = "ip-addr";

/// First counted dimension.
pub const SUBNET_COLUMN: &str = "subnet";

/// Second counted dimension.
pub const SECURITY_GROUP_COLUMN: &str = "security-group";

/// Column names the analyzer groups and counts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisColumns {
    pub ip_addr: String,
    pub subnet: String,
    pub security_group: String,
}

impl Default for AnalysisColumns {
    fn default() -> Self {
        Self {
            ip_addr: IP_ADDR_COLUMN.to_string(),
            subnet: SUBNET_COLUMN.to_string(),
            security_group: SECURITY_GROUP_COLUMN.to_string(),
        }
    }
}

/// Options for a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Field delimiter byte
    pub delimiter: u8,

    /// Separator that marks a multi-valued cell
    pub value_separator: char,

    /// Where the exploded table is written
    pub processed_output: PathBuf,

    /// Where the analysis table is written
    pub analysis_output: PathBuf,

    /// Columns used by the analyzer
    pub columns: AnalysisColumns,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            value_separator: DEFAULT_VALUE_SEPARATOR,
            processed_output: PathBuf::from(DEFAULT_PROCESSED_OUTPUT),
            analysis_output: PathBuf::from(DEFAULT_ANALYSIS_OUTPUT),
            columns: AnalysisColumns::default(),
        }
    }
}

impl PipelineOptions {
    /// Default options with both outputs placed under `dir`.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            processed_output: dir.join(DEFAULT_PROCESSED_OUTPUT),
            analysis_output: dir.join(DEFAULT_ANALYSIS_OUTPUT),
            ..Self::default()
        }
    }
}
