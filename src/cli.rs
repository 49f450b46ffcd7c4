//! CLI argument parsing for the iNNE detector

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{Error, Result};

/// Input dataset format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    /// Attribute-relation file (default)
    Arff,
    /// Comma-separated values with a header line
    Csv,
}

/// Format of the per-row score report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// CSV score table (default)
    Csv,
    /// JSON report for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "inne")]
#[command(version)]
#[command(about = "Isolation-based anomaly detection with nearest-neighbour ensembles", long_about = None)]
pub struct Cli {
    /// Path to the input dataset
    pub input: PathBuf,

    /// Points sampled per ensemble member (clamped to the row count)
    #[arg(short = 's', long = "sample-size", value_name = "PSI", default_value = "8")]
    pub sample_size: usize,

    /// Number of ensemble members
    #[arg(short = 't', long = "ensemble-size", value_name = "T", default_value = "100")]
    pub ensemble_size: usize,

    /// Treat the last field of each row as a binary ground-truth label
    #[arg(long = "has-labels")]
    pub has_labels: bool,

    /// Input file format
    #[arg(long = "file-format", value_enum, default_value = "arff")]
    pub file_format: FileFormat,

    /// Fixed RNG seed for reproducible runs
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Format of the score report
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ReportFormat,

    /// Directory where output artifacts are written
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable debug logging to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Validate configuration before any computation starts.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::InputNotFound(self.input.clone()));
        }
        if self.sample_size < 2 {
            return Err(Error::Config(format!(
                "sample size must be at least 2, got {}",
                self.sample_size
            )));
        }
        if self.ensemble_size == 0 {
            return Err(Error::Config("ensemble size must be at least 1".to_string()));
        }
        Ok(())
    }
}
