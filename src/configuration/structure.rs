use std::path::{Path, PathBuf};

use tracing::info;

pub use self::experiment::ExperimentConfiguration;
pub use self::options::OptionsConfiguration;
pub use self::output::OutputConfiguration;
use self::passthrough::resolve_passthrough;
use super::errors::ConfigurationError;
use super::raw::RawTable;
use super::schema::SchemaCatalog;
use super::traits::ResolvableSection;
use super::utilities::default_job_configuration_path;

mod experiment;
mod options;
mod output;
mod passthrough;


/// The entire job configuration.
///
/// Immutable once constructed: a value of this type only exists after the
/// file parsed, every field resolved and the experiment layout passed its
/// on-disk checks.
#[derive(Clone, PartialEq, Debug)]
pub struct Configuration {
    /// This is the file path this configuration was loaded from.
    pub file_path: PathBuf,

    /// Miscellaneous processing options.
    pub options: OptionsConfiguration,

    /// Experiment description files and the media input location.
    pub experiment: ExperimentConfiguration,

    /// Output and runtime locations.
    pub output: OutputConfiguration,

    /// Settings forwarded verbatim to the execution runtime, in file order.
    /// `None` when the file has no pass-through section.
    pub spark_config_pairs: Option<Vec<(String, String)>>,
}


impl Configuration {
    /// Load the job configuration from a specific file path, resolving keys
    /// through `schema`.
    pub fn load_from_path<P: AsRef<Path>>(
        job_configuration_path: P,
        schema: &SchemaCatalog,
    ) -> Result<Self, ConfigurationError> {
        let path = job_configuration_path.as_ref();

        info!("Reading job configuration file: {}", path.display());

        let table = RawTable::parse_file(path)?;

        let options = OptionsConfiguration::resolve(&table, schema)?;
        let experiment = ExperimentConfiguration::resolve(&table, schema)?;
        let output = OutputConfiguration::resolve(&table, schema)?;
        let spark_config_pairs = resolve_passthrough(&table, schema);

        // Every field resolves before the filesystem is consulted; a missing
        // key anywhere in the file is reported first.
        experiment.validate_layout()?;

        let file_path =
            dunce::canonicalize(path).map_err(|source| ConfigurationError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            file_path,
            options,
            experiment,
            output,
            spark_config_pairs,
        })
    }

    /// Load the job configuration from the default path (`./configh.conf`),
    /// resolving keys through `schema`.
    pub fn load_from_default_path(
        schema: &SchemaCatalog,
    ) -> Result<Configuration, ConfigurationError> {
        Configuration::load_from_path(default_job_configuration_path()?, schema)
    }
}
