//! Error types for the multival pipeline.
//!
//! - [`LoadError`] - reading and parsing the PSV input
//! - [`TransformError`] - classification, explosion and analysis
//! - [`WriteError`] - writing the PSV outputs
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Every stage error converts into [`PipelineError`] through `From`,
//! so `?` works across stage boundaries.

use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading the input table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed PSV record.
    #[error("Invalid PSV format: {0}")]
    Csv(#[from] csv::Error),

    /// No header row.
    #[error("Input file is empty (no header row)")]
    EmptyFile,

    /// A data row has more fields than the header.
    #[error("Line {line}: expected {expected} fields, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while reshaping or aggregating a table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the stage needs is not in the table.
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while writing a PSV output file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create or flush the file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode a record.
    #[error("Failed to encode record: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// Returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loading error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Transformation error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Output error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let load_err = LoadError::EmptyFile;
        let pipeline_err: PipelineError = load_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        let transform_err = TransformError::MissingColumn("subnet".into());
        let pipeline_err: PipelineError = transform_err.into();
        assert!(pipeline_err.to_string().contains("subnet"));
    }

    #[test]
    fn test_pipeline_message_carries_inner_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "inventory.psv not found");
        let pipeline_err: PipelineError = LoadError::from(io).into();

        assert_eq!(
            pipeline_err.to_string(),
            "Load error: Failed to read input: inventory.psv not found"
        );
    }

    #[test]
    fn test_ragged_row_format() {
        let err = LoadError::RaggedRow {
            line: 4,
            expected: 3,
            found: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("Line 4"));
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("saw 5"));
    }
}
