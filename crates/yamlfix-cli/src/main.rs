mod config;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use config::{ConfigError, FixtureConfig, load_config};
use logging::init_logging;
use thiserror::Error;
use yamlfix_generate::{FixtureEngine, FixtureKind, GenerationError, write_report_json};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "yamlfix",
    version,
    about = "Generate YAML test data files for parser benchmarks"
)]
struct Cli {
    #[command(flatten)]
    params: FixtureConfig,
    /// TOML file with fixture sizes; flags take precedence.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Only generate the given fixture (small, large, nested, arrays, complex).
    #[arg(long, value_name = "KIND")]
    only: Vec<FixtureKind>,
    /// Also write a JSON report of the generated files.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    run(cli)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        params,
        config,
        only,
        report: report_path,
        log_file: _,
    } = cli;

    let file_config = match config {
        Some(path) => {
            let loaded = load_config(&path)?;
            tracing::info!(event = "config_loaded", path = %path.display());
            loaded
        }
        None => FixtureConfig::default(),
    };
    let params = params.merge(file_config).into_params();
    let kinds = if only.is_empty() {
        FixtureKind::ALL.to_vec()
    } else {
        only
    };

    tracing::info!(
        event = "params_resolved",
        small_size = params.small_size,
        large_size = params.large_size,
        nested_depth = params.nested_depth,
        nested_width = params.nested_width,
        array_size = params.array_size,
        array_props = params.array_props,
        output_dir = %params.output_dir.display()
    );

    let report = FixtureEngine::new(params).run_only(&kinds)?;

    if let Some(path) = report_path {
        write_report_json(&path, &report)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    println!("{}", report.summary());
    Ok(())
}
