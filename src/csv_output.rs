//! CSV output for the per-row score table and the AUC summary
//!
//! The score table has one row per dataset row in original order. The AUC
//! summary is append-only, one row per run, with the header written only
//! when the destination file did not previously exist.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::pipeline::RunReport;

/// Header of the append-only per-run summary file.
pub const SUMMARY_HEADER: &str = "EnsembleSize,SampleSize,AUC,TrainingTime,EvaluationTime";

/// Render the per-row score table.
///
/// The `Label` column is present only when labels were loaded.
pub fn score_table(scores: &[f64], labels: Option<&[f64]>) -> String {
    let mut out = String::new();

    match labels {
        Some(labels) => {
            out.push_str("Id,Label,AnomalyScore\n");
            for (id, (score, label)) in scores.iter().zip(labels).enumerate() {
                out.push_str(&format!("{},{},{}\n", id, label, score));
            }
        }
        None => {
            out.push_str("Id,AnomalyScore\n");
            for (id, score) in scores.iter().enumerate() {
                out.push_str(&format!("{},{}\n", id, score));
            }
        }
    }

    out
}

/// Render one summary row. An undefined AUC writes the literal `undefined`.
pub fn summary_row(report: &RunReport) -> String {
    let auc = match report.auc {
        Some(value) => value.to_string(),
        None => "undefined".to_string(),
    };
    format!(
        "{},{},{},{},{}\n",
        report.ensemble_size, report.sample_size, auc, report.training_time, report.evaluation_time
    )
}

/// Append a summary row to `path`, writing the header first if the file
/// did not already exist.
pub fn append_summary(path: &Path, report: &RunReport) -> std::io::Result<()> {
    let add_header = !path.exists();

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if add_header {
        writeln!(file, "{}", SUMMARY_HEADER)?;
    }
    file.write_all(summary_row(report).as_bytes())?;
    Ok(())
}
