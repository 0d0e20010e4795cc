use clap::Parser;
use miette::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use skycorr::configuration::{Configuration, SchemaCatalog};
use skycorr::logging::initialize_tracing;

use crate::cli::CLIArgs;

mod cli;


/// File name of the log file written when `--log-directory` is given.
const LOG_FILE_NAME: &str = "skycorr.log";


fn main() -> Result<()> {
    let cli_args = CLIArgs::parse();

    let console_level_filter = if cli_args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let logging_raii_guard = initialize_tracing(
        console_level_filter,
        cli_args.log_directory.as_deref(),
        LOG_FILE_NAME,
    )
    .wrap_err("Failed to initialize tracing.")?;

    let schema = if cli_args.legacy_schema {
        SchemaCatalog::legacy()
    } else {
        SchemaCatalog::current()
    };

    // Load and validate the job configuration.
    let configuration = match cli_args.job_config_path.as_ref() {
        Some(path) => Configuration::load_from_path(path, &schema),
        None => Configuration::load_from_default_path(&schema),
    }
    .wrap_err("Failed to load job configuration.")?;

    info!(
        "Job configuration loaded: {}.",
        configuration.file_path.display()
    );
    info!(
        "Experiment folder: {}",
        configuration.experiment.folder.display()
    );
    info!(
        "Media input location: {}",
        configuration.experiment.data_dir.display()
    );
    info!(
        "Output location: {}{}*",
        configuration.output.directory, configuration.output.prefix
    );

    if let Some(spark_home) = configuration.output.spark_home.as_ref() {
        info!("Runtime home: {}", spark_home.display());
    }

    if let Some(pairs) = configuration.spark_config_pairs.as_ref() {
        info!("Forwarding {} runtime setting(s).", pairs.len());
    }

    drop(logging_raii_guard);
    Ok(())
}
