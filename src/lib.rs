//! iNNE - isolation-based anomaly detection with nearest-neighbour ensembles
//!
//! This library builds an ensemble of randomized nearest-neighbour
//! partitions over a numeric dataset, scores every row by the smallest
//! hypersphere that encloses it, and evaluates the ranking against
//! ground-truth labels via rank-based AUC when labels are available.

pub mod auc;
pub mod cli;
pub mod csv_output;
pub mod dataset;
pub mod distance;
pub mod ensemble;
pub mod error;
pub mod json_output;
pub mod permutation;
pub mod pipeline;
pub mod scorer;
