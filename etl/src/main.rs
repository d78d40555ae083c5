//! Multival CLI
//!
//! ```bash
//! multival inventory.psv
//! ```
//!
//! Writes the exploded table to `output_file` and the per-IP summary to
//! `analysis`, both in the current directory.

use clap::Parser;
use multival::logs::log_error;
use multival::{run, PipelineOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multival")]
#[command(about = "Explode multi-valued PSV columns and count subnets and security groups per IP", long_about = None)]
struct Cli {
    /// Pipe-separated input file with a header row
    input_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.input_file, &PipelineOptions::default()) {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
