//! Error kinds shared across the iNNE pipeline
//!
//! Configuration and data-format problems are fatal and reported before any
//! computation starts; degenerate inputs discovered later (for example an
//! undefined AUC) surface as explicit variants instead of NaN/Inf values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors for configuration, dataset loading, and evaluation
#[derive(Error, Debug)]
pub enum Error {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("data format error at line {line}: {message}")]
    DataFormat { line: usize, message: String },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("AUC is undefined: {positives} positive and {negatives} negative rows")]
    UndefinedAuc { positives: u64, negatives: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
