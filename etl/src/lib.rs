//! # Multival - explode multi-valued PSV columns and summarize per IP
//!
//! Loads a pipe-separated inventory, finds the columns whose cells hold
//! comma-joined values, explodes them into one row per value and counts the
//! distinct subnets and security groups attached to every `ip-addr`.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌──────────┐   ┌────────────┐   ┌──────────┐   ┌──────────┐
//! │ PSV input │──▶│  Parser  │──▶│ Classifier │──▶│ Exploder │──▶│ Analyzer │
//! └───────────┘   └──────────┘   └────────────┘   └──────────┘   └──────────┘
//!                                                      │              │
//!                                                 output_file      analysis
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use multival::{run, PipelineOptions};
//! use std::path::Path;
//!
//! let result = run(Path::new("inventory.psv"), &PipelineOptions::default()).unwrap();
//! println!("{} IP addresses", result.analysis.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Pipeline options and defaults
//! - [`logs`] - Leveled pipeline log
//! - [`models`] - Table, column classification, analysis rows
//! - [`parser`] - PSV loading with encoding detection
//! - [`transform`] - Classifier, exploder, analyzer, pipeline
//! - [`writer`] - PSV output

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// I/O
pub mod parser;
pub mod writer;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{AnalysisColumns, PipelineOptions};

pub use error::{LoadError, PipelineError, TransformError, WriteError};

pub use models::{AnalysisRow, ColumnClassification, Table};

pub use parser::{parse_bytes, parse_psv, parse_psv_file, ParseResult};

pub use writer::{write_analysis, write_table};

pub use transform::{
    analyze, classify_columns, explode_column, explode_columns,
    pipeline::{run, run_bytes, InputInfo, RunResult},
};
