//! Dataset loading for CSV and ARFF inputs
//!
//! A dataset is an ordered table of fixed-dimensionality feature rows.
//! When labels are requested, the last field of every input row is split
//! off as the binary ground-truth label and excluded from the feature
//! count used for distance computation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Immutable table of feature rows, with optional trailing labels.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Vec<f64>>,
    labels: Option<Vec<f64>>,
    num_features: usize,
}

impl Dataset {
    /// Build a dataset from already-parsed rows.
    ///
    /// Rejects empty or single-row tables and inconsistent row arity.
    pub fn new(rows: Vec<Vec<f64>>, labels: Option<Vec<f64>>) -> Result<Self> {
        if rows.len() < 2 {
            return Err(Error::DegenerateInput(format!(
                "need at least 2 rows, got {}",
                rows.len()
            )));
        }

        let num_features = rows[0].len();
        if num_features == 0 {
            return Err(Error::DegenerateInput("rows have no features".to_string()));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_features {
                return Err(Error::DataFormat {
                    line: i + 1,
                    message: format!("expected {} fields, got {}", num_features, row.len()),
                });
            }
        }

        if let Some(ref labels) = labels {
            debug_assert_eq!(labels.len(), rows.len());
        }

        Ok(Self {
            rows,
            labels,
            num_features,
        })
    }

    /// Load a comma-separated file. The first non-blank line is a header.
    pub fn from_csv(path: &Path, has_labels: bool) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut rows = Vec::new();
        let mut header_seen = false;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !header_seen {
                header_seen = true;
                continue;
            }
            rows.push(parse_numeric_row(line, line_no + 1)?);
        }

        split_labels(rows, has_labels)
    }

    /// Load an attribute-relation file.
    ///
    /// `%` comments and blank lines are skipped, `@attribute` declarations
    /// are counted to cross-check row arity, and rows after `@data` are
    /// parsed as dense comma-separated numerics. Sparse `{...}` rows are
    /// rejected.
    pub fn from_arff(path: &Path, has_labels: bool) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut rows = Vec::new();
        let mut declared_attributes = 0usize;
        let mut in_data = false;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let line_no = line_no + 1;

            if line.is_empty() || line.starts_with('%') {
                continue;
            }

            if !in_data {
                let lower = line.to_ascii_lowercase();
                if lower.starts_with("@attribute") {
                    declared_attributes += 1;
                } else if lower.starts_with("@data") {
                    in_data = true;
                }
                // @relation and anything else in the header is ignored
                continue;
            }

            if line.starts_with('{') {
                return Err(Error::DataFormat {
                    line: line_no,
                    message: "sparse ARFF rows are not supported".to_string(),
                });
            }

            let row = parse_numeric_row(line, line_no)?;
            if declared_attributes > 0 && row.len() != declared_attributes {
                return Err(Error::DataFormat {
                    line: line_no,
                    message: format!(
                        "expected {} fields per @attribute declarations, got {}",
                        declared_attributes,
                        row.len()
                    ),
                });
            }
            rows.push(row);
        }

        split_labels(rows, has_labels)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn row(&self, idx: usize) -> &[f64] {
        &self.rows[idx]
    }

    /// Ground-truth labels, present only when label-aware loading was requested.
    pub fn labels(&self) -> Option<&[f64]> {
        self.labels.as_deref()
    }
}

/// Parse one comma-separated line of numeric fields.
fn parse_numeric_row(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split(',')
        .map(|field| {
            field.trim().parse::<f64>().map_err(|_| Error::DataFormat {
                line: line_no,
                message: format!("not a numeric field: {:?}", field.trim()),
            })
        })
        .collect()
}

/// Split off the trailing label column when labels were requested.
fn split_labels(mut rows: Vec<Vec<f64>>, has_labels: bool) -> Result<Dataset> {
    if !has_labels {
        return Dataset::new(rows, None);
    }

    let mut labels = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter_mut().enumerate() {
        match row.pop() {
            Some(label) => labels.push(label),
            None => {
                return Err(Error::DataFormat {
                    line: i + 1,
                    message: "row has no label field".to_string(),
                })
            }
        }
    }

    Dataset::new(rows, Some(labels))
}
