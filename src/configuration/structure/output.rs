use std::path::PathBuf;

use crate::configuration::errors::ConfigurationError;
use crate::configuration::raw::RawTable;
use crate::configuration::schema::SchemaCatalog;
use crate::configuration::traits::ResolvableSection;
use crate::configuration::utilities::{lookup_optional, lookup_value, with_trailing_separator};


/// Output and runtime locations from the files section.
#[derive(Clone, PartialEq, Debug)]
pub struct OutputConfiguration {
    /// Output directory. Always terminated with a `/`, so it can be used as
    /// a prefix directly.
    pub directory: String,

    /// Prefix prepended to output file names.
    pub prefix: String,

    /// Installation of the execution runtime to submit the job through,
    /// when configured. Existence is checked by the job submission stage,
    /// not here.
    pub spark_home: Option<PathBuf>,
}

impl ResolvableSection for OutputConfiguration {
    fn resolve(table: &RawTable, schema: &SchemaCatalog) -> Result<Self, ConfigurationError> {
        let directory =
            with_trailing_separator(lookup_value(table, &schema.output_dir)?.to_owned());
        let prefix = lookup_value(table, &schema.output_prefix)?.to_owned();

        let spark_home = lookup_optional(table, &schema.spark_home).map(PathBuf::from);

        Ok(Self {
            directory,
            prefix,
            spark_home,
        })
    }
}
