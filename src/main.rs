use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use inne::{
    cli::{Cli, FileFormat, ReportFormat},
    csv_output,
    dataset::Dataset,
    json_output::JsonScoreReport,
    pipeline::{self, RunConfig},
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Dataset name used in output file names: the input file stem.
fn dataset_name(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset")
        .to_string()
}

fn load_dataset(cli: &Cli) -> Result<Dataset> {
    let dataset = match cli.file_format {
        FileFormat::Arff => Dataset::from_arff(&cli.input, cli.has_labels),
        FileFormat::Csv => Dataset::from_csv(&cli.input, cli.has_labels),
    }
    .with_context(|| format!("failed to load {}", cli.input.display()))?;
    Ok(dataset)
}

fn write_artifacts(cli: &Cli, dataset: &Dataset, report: &pipeline::RunReport) -> Result<()> {
    let name = dataset_name(&cli.input);

    match cli.format {
        ReportFormat::Csv => {
            let path = cli.output_dir.join(format!("Scores_Dataset_{}.csv", name));
            let table = csv_output::score_table(&report.scores, dataset.labels());
            fs::write(&path, table)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Scores written to {}", path.display());
        }
        ReportFormat::Json => {
            let path = cli.output_dir.join(format!("Scores_Dataset_{}.json", name));
            let json = JsonScoreReport::from_run(report, dataset.labels()).to_json()?;
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Scores written to {}", path.display());
        }
    }

    if dataset.labels().is_some() {
        let path = cli
            .output_dir
            .join(format!("AUC_iNNE_Dataset_{}.csv", name));
        csv_output::append_summary(&path, report)
            .with_context(|| format!("failed to append {}", path.display()))?;
        println!("Summary appended to {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.validate()?;
    let dataset = load_dataset(&cli)?;

    let config = RunConfig {
        sample_size: cli.sample_size,
        ensemble_size: cli.ensemble_size,
        seed: cli.seed,
    };
    let report = pipeline::run(&dataset, &config)?;

    println!(
        "iNNE ensemble built. Training time: {} seconds.",
        report.training_time
    );
    println!(
        "Anomaly scores calculated. Evaluation time: {} seconds.",
        report.evaluation_time
    );
    if dataset.labels().is_some() {
        match report.auc {
            Some(auc) => println!("AUC: {}", auc),
            None => println!("AUC: undefined (labels contain a single class)"),
        }
    }

    write_artifacts(&cli, &dataset, &report)?;

    Ok(())
}
