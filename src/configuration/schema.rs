//! Names of the sections and keys recognized in the job configuration file.
//!
//! The catalog is data, not logic: each logical field carries its
//! (section, key) location and an optional fallback, and the resolver
//! consumes those descriptors instead of hardcoding names. Two catalogs
//! exist side by side: [`SchemaCatalog::current`] for the Spark-era file
//! layout and [`SchemaCatalog::legacy`] for the Hadoop-era one. Callers pick
//! one explicitly and pass it into the load entry point.

/// Where a logical configuration field lives in the file, and what to
/// substitute when it is absent.
///
/// A `None` fallback makes the key required for fields resolved with
/// [`lookup_value`][super::utilities::lookup_value]; fields resolved with
/// [`lookup_optional`][super::utilities::lookup_optional] simply come back
/// as `None` when absent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ConfigKey {
    pub section: &'static str,
    pub key: &'static str,
    pub fallback: Option<&'static str>,
}


/// The full set of (section, key) descriptors the resolver reads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SchemaCatalog {
    /// Single-precision toggle in the miscellaneous options section.
    pub single_precision: ConfigKey,

    /// Folder holding the per-experiment description files.
    pub experiment_folder: ConfigKey,

    /// File names of the experiment description files, each relative to the
    /// experiment folder.
    pub stations_file: ConfigKey,
    pub sources_file: ConfigKey,
    pub delays_file: ConfigKey,
    pub delay_model_file: ConfigKey,
    pub media_file: ConfigKey,
    pub correlation_file: ConfigKey,

    /// Media input location consumed by the mapper stage.
    pub data_dir: ConfigKey,

    /// Output directory, output file prefix and the optional runtime home.
    pub output_dir: ConfigKey,
    pub output_prefix: ConfigKey,
    pub spark_home: ConfigKey,

    /// Section whose pairs are forwarded verbatim to the execution runtime.
    pub passthrough_section: &'static str,
}

impl SchemaCatalog {
    /// Key names used by current (Spark-era) job configuration files.
    pub const fn current() -> Self {
        Self {
            single_precision: ConfigKey {
                section: "misc",
                key: "single_precision",
                fallback: Some("false"),
            },
            experiment_folder: ConfigKey {
                section: "experiment",
                key: "ini_folder",
                fallback: None,
            },
            stations_file: ConfigKey {
                section: "experiment",
                key: "stations",
                fallback: Some("stations.ini"),
            },
            sources_file: ConfigKey {
                section: "experiment",
                key: "sources",
                fallback: Some("sources.ini"),
            },
            delays_file: ConfigKey {
                section: "experiment",
                key: "delays",
                fallback: Some("delays.ini"),
            },
            delay_model_file: ConfigKey {
                section: "experiment",
                key: "delay_model",
                fallback: Some("delay_model.ini"),
            },
            media_file: ConfigKey {
                section: "experiment",
                key: "media",
                fallback: Some("media.ini"),
            },
            correlation_file: ConfigKey {
                section: "experiment",
                key: "correlation",
                fallback: Some("correlation.ini"),
            },
            data_dir: ConfigKey {
                section: "experiment",
                key: "media_dir",
                fallback: None,
            },
            output_dir: ConfigKey {
                section: "files",
                key: "output_dir",
                fallback: None,
            },
            output_prefix: ConfigKey {
                section: "files",
                key: "output_prefix",
                fallback: Some("OUT"),
            },
            spark_home: ConfigKey {
                section: "files",
                key: "spark_home",
                fallback: None,
            },
            passthrough_section: "spark",
        }
    }

    /// Key names used by legacy (Hadoop-era) job configuration files. The
    /// logical fields are identical; only the spellings differ.
    pub const fn legacy() -> Self {
        Self {
            single_precision: ConfigKey {
                section: "hadoop-other",
                key: "single_precision",
                fallback: Some("false"),
            },
            experiment_folder: ConfigKey {
                section: "experiment",
                key: "ini_folder",
                fallback: None,
            },
            stations_file: ConfigKey {
                section: "experiment",
                key: "stations",
                fallback: Some("stations.ini"),
            },
            sources_file: ConfigKey {
                section: "experiment",
                key: "sources",
                fallback: Some("sources.ini"),
            },
            delays_file: ConfigKey {
                section: "experiment",
                key: "delays",
                fallback: Some("delays.ini"),
            },
            delay_model_file: ConfigKey {
                section: "experiment",
                key: "delay_model",
                fallback: Some("delay_model.ini"),
            },
            media_file: ConfigKey {
                section: "experiment",
                key: "media",
                fallback: Some("media.ini"),
            },
            correlation_file: ConfigKey {
                section: "experiment",
                key: "correlation",
                fallback: Some("correlation.ini"),
            },
            data_dir: ConfigKey {
                section: "experiment",
                key: "hdfs_data_dir",
                fallback: None,
            },
            output_dir: ConfigKey {
                section: "files",
                key: "output_dir",
                fallback: None,
            },
            output_prefix: ConfigKey {
                section: "files",
                key: "output_prefix",
                fallback: Some("OUT"),
            },
            spark_home: ConfigKey {
                section: "files",
                key: "hadoop_home",
                fallback: None,
            },
            passthrough_section: "hadoop-core",
        }
    }
}
