//! Transformation module.
//!
//! - Classifier: multi-valued vs single-valued columns
//! - Exploder: one row per comma-separated value
//! - Analyzer: distinct subnet / security-group counts per IP
//! - Pipeline: runs the stages in order

pub mod analyzer;
pub mod classifier;
pub mod exploder;
pub mod pipeline;

pub use analyzer::{analyze, analyze_and_report, distinct_counts, outer_merge};
pub use classifier::{
    classify_columns, format_column_list, multi_valued_columns, print_classification,
    single_valued_columns,
};
pub use exploder::{explode_column, explode_columns};
pub use pipeline::*;
