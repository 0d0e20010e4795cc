use std::path::PathBuf;

use crate::configuration::errors::ConfigurationError;
use crate::configuration::raw::RawTable;
use crate::configuration::schema::SchemaCatalog;
use crate::configuration::traits::ResolvableSection;
use crate::configuration::utilities::{join_experiment_path, lookup_value};


/// The experiment description files and the media input location.
///
/// Every `*_file` path is derived as `folder + "/" + <file name>`, with the
/// file name coming from the job configuration or the schema fallback.
#[derive(Clone, PartialEq, Debug)]
pub struct ExperimentConfiguration {
    /// Folder holding the per-experiment description files.
    pub folder: PathBuf,

    /// Stations description file.
    pub stations_file: PathBuf,

    /// Sources description file.
    pub sources_file: PathBuf,

    /// Delay polynomials file. Not required to exist on disk.
    pub delays_file: PathBuf,

    /// Delay model description file.
    pub delay_model_file: PathBuf,

    /// Media description file.
    pub media_file: PathBuf,

    /// Correlation description file.
    pub correlation_file: PathBuf,

    /// Media input location. Existence is checked by later pipeline stages,
    /// not here.
    pub data_dir: PathBuf,
}

impl ResolvableSection for ExperimentConfiguration {
    fn resolve(table: &RawTable, schema: &SchemaCatalog) -> Result<Self, ConfigurationError> {
        let folder = lookup_value(table, &schema.experiment_folder)?;

        let stations_file = join_experiment_path(folder, lookup_value(table, &schema.stations_file)?);
        let sources_file = join_experiment_path(folder, lookup_value(table, &schema.sources_file)?);
        let delays_file = join_experiment_path(folder, lookup_value(table, &schema.delays_file)?);
        let delay_model_file =
            join_experiment_path(folder, lookup_value(table, &schema.delay_model_file)?);
        let media_file = join_experiment_path(folder, lookup_value(table, &schema.media_file)?);
        let correlation_file =
            join_experiment_path(folder, lookup_value(table, &schema.correlation_file)?);

        let data_dir = PathBuf::from(lookup_value(table, &schema.data_dir)?);

        Ok(Self {
            folder: PathBuf::from(folder),
            stations_file,
            sources_file,
            delays_file,
            delay_model_file,
            media_file,
            correlation_file,
            data_dir,
        })
    }
}

impl ExperimentConfiguration {
    /// Check that the experiment folder and the description files the
    /// pipeline reads from it are present on disk. The delays file is
    /// exempt from this check.
    ///
    /// Fails fast: the first missing path is reported and nothing further
    /// is examined.
    pub fn validate_layout(&self) -> Result<(), ConfigurationError> {
        if !self.folder.is_dir() {
            return Err(ConfigurationError::MissingDirectory {
                path: self.folder.clone(),
            });
        }

        let required_files = [
            &self.stations_file,
            &self.sources_file,
            &self.delay_model_file,
            &self.media_file,
            &self.correlation_file,
        ];

        for file in required_files {
            if !file.is_file() {
                return Err(ConfigurationError::MissingFile { path: file.clone() });
            }
        }

        Ok(())
    }
}
