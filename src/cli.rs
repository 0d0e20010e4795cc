//! Command-line interface definitions for the configuration check tool.

use std::path::PathBuf;

use clap::Parser;


/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "skycorr",
    author,
    about = "Loads and validates the startup configuration of a correlation job.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the job configuration file to use.
    /// If unspecified, this defaults to `./configh.conf`.
    #[arg(
        short = 'c',
        long = "job-config-path",
        help = "Path to the job configuration file to use. Defaults to ./configh.conf"
    )]
    pub job_config_path: Option<PathBuf>,

    #[arg(
        long = "legacy-schema",
        help = "Resolve configuration keys through the legacy (Hadoop-era) schema names."
    )]
    pub legacy_schema: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Log at debug level instead of info."
    )]
    pub verbose: bool,

    #[arg(
        long = "log-directory",
        help = "If present, also write log output to skycorr.log inside this directory."
    )]
    pub log_directory: Option<PathBuf>,
}
