use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;


/// Everything that can go wrong while loading the job configuration.
///
/// None of these are recovered from internally: the first failure aborts the
/// load and reaches the caller as a fatal startup error. Every message names
/// the offending path or section/key so the operator can act on it.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationError {
    /// The job configuration file could not be read from disk.
    #[error("could not read job configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The job configuration file is readable but is not valid sectioned
    /// key-value text.
    #[error("invalid job configuration syntax in {} (line {line}): {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A key with no fallback is absent from the file.
    #[error("missing required configuration key \"{key}\" in section [{section}]")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },

    /// A boolean-typed key holds something outside the accepted literal set.
    #[error("key \"{key}\" in section [{section}] is not a boolean: {value:?}")]
    InvalidBoolean {
        section: &'static str,
        key: &'static str,
        value: String,
    },

    /// The experiment folder does not exist or is not a directory.
    #[error("cannot find experiment folder: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// A required experiment description file does not exist.
    #[error("cannot find experiment configuration file: {}", path.display())]
    MissingFile { path: PathBuf },
}
