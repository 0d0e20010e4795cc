use std::env::current_dir;
use std::path::PathBuf;

use super::errors::ConfigurationError;
use super::raw::RawTable;
use super::schema::ConfigKey;


/// File name the job configuration is read from when no explicit path is
/// given.
pub const DEFAULT_JOB_CONFIGURATION_FILE_NAME: &str = "configh.conf";


/// Returns the default job configuration file path, which is at
/// `{current directory}/configh.conf`.
pub fn default_job_configuration_path() -> Result<PathBuf, ConfigurationError> {
    let mut configuration_filepath = current_dir().map_err(|source| ConfigurationError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    configuration_filepath.push(DEFAULT_JOB_CONFIGURATION_FILE_NAME);

    Ok(configuration_filepath)
}


/// Look up `key` in the table, substituting the schema fallback when the key
/// is absent. A key without a fallback is required: absence is a hard
/// failure naming the section and key.
pub fn lookup_value<'t>(
    table: &'t RawTable,
    key: &ConfigKey,
) -> Result<&'t str, ConfigurationError> {
    match table.get(key.section, key.key) {
        Some(value) => Ok(value),
        None => key.fallback.ok_or(ConfigurationError::MissingKey {
            section: key.section,
            key: key.key,
        }),
    }
}

/// Look up `key` in the table, yielding `None` when absent. The schema
/// fallback is not consulted.
pub fn lookup_optional<'t>(table: &'t RawTable, key: &ConfigKey) -> Option<&'t str> {
    table.get(key.section, key.key)
}

/// Look up `key` as a boolean. Accepts `1`/`yes`/`true`/`on` and
/// `0`/`no`/`false`/`off`, case-insensitive.
pub fn lookup_boolean(table: &RawTable, key: &ConfigKey) -> Result<bool, ConfigurationError> {
    let value = lookup_value(table, key)?;

    match value.to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(ConfigurationError::InvalidBoolean {
            section: key.section,
            key: key.key,
            value: value.to_owned(),
        }),
    }
}


/// Append a single `/` to `directory` unless it already ends with one.
#[must_use = "function returns the modified string"]
pub fn with_trailing_separator(mut directory: String) -> String {
    if !directory.ends_with('/') {
        directory.push('/');
    }

    directory
}

/// Join an experiment folder and a file name with a literal `/`. Duplicate
/// separators are left in place.
pub fn join_experiment_path(folder: &str, file_name: &str) -> PathBuf {
    PathBuf::from(format!("{}/{}", folder, file_name))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_is_appended_when_missing() {
        assert_eq!(with_trailing_separator("out".to_owned()), "out/");
    }

    #[test]
    fn existing_separator_is_not_doubled() {
        assert_eq!(with_trailing_separator("out/".to_owned()), "out/");
    }

    #[test]
    fn experiment_paths_are_joined_verbatim() {
        let joined = join_experiment_path("/data/exp1/", "stations.ini");

        assert_eq!(joined.as_os_str(), "/data/exp1//stations.ini");
    }
}
