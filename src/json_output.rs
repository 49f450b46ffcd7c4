//! JSON output format for the score report

use serde::{Deserialize, Serialize};

use crate::pipeline::RunReport;

/// A single scored row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonScoreRow {
    /// Dataset row index
    pub id: usize,
    /// Raw ground-truth label (if labels were loaded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<f64>,
    /// Anomaly score in [0,1]
    pub anomaly_score: f64,
}

/// Full run report: parameters, timings, and the scored rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonScoreReport {
    /// Number of ensemble members (T)
    pub ensemble_size: usize,
    /// Effective subsample size (psi)
    pub sample_size: usize,
    /// AUC against ground-truth labels (absent when unlabeled or undefined)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auc: Option<f64>,
    /// Ensemble build time in seconds
    pub training_time_s: f64,
    /// Scoring time in seconds
    pub evaluation_time_s: f64,
    pub rows: Vec<JsonScoreRow>,
}

impl JsonScoreReport {
    /// Assemble the JSON report from a finished run.
    pub fn from_run(report: &RunReport, labels: Option<&[f64]>) -> Self {
        let rows = report
            .scores
            .iter()
            .enumerate()
            .map(|(id, &anomaly_score)| JsonScoreRow {
                id,
                label: labels.map(|l| l[id]),
                anomaly_score,
            })
            .collect();

        Self {
            ensemble_size: report.ensemble_size,
            sample_size: report.sample_size,
            auc: report.auc,
            training_time_s: report.training_time,
            evaluation_time_s: report.evaluation_time,
            rows,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
