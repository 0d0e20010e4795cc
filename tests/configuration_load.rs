//! End-to-end tests of the job configuration load pipeline against real
//! on-disk fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use skycorr::configuration::{Configuration, ConfigurationError, SchemaCatalog};
use tempfile::TempDir;


/// Description files the validator requires. The delays file is not among
/// them.
const DESCRIPTION_FILE_NAMES: &[&str] = &[
    "stations.ini",
    "sources.ini",
    "delay_model.ini",
    "media.ini",
    "correlation.ini",
];


/// Create an experiment folder under `root` holding the default description
/// files.
fn write_experiment_folder(root: &Path) -> PathBuf {
    let folder = root.join("experiment");
    fs::create_dir(&folder).unwrap();

    for file_name in DESCRIPTION_FILE_NAMES {
        fs::write(folder.join(file_name), "[placeholder]\n").unwrap();
    }

    folder
}

fn write_job_configuration(root: &Path, contents: &str) -> PathBuf {
    let path = root.join("configh.conf");
    fs::write(&path, contents).unwrap();

    path
}

/// A job configuration with only the required keys set.
fn minimal_contents(folder: &Path, root: &Path) -> String {
    format!(
        "[experiment]\n\
         ini_folder = {}\n\
         media_dir = {}\n\
         \n\
         [files]\n\
         output_dir = {}\n",
        folder.display(),
        root.join("media").display(),
        root.join("out").display(),
    )
}


#[test]
fn minimal_configuration_loads_with_default_file_names() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());
    let config_path = write_job_configuration(tmp.path(), &minimal_contents(&folder, tmp.path()));

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

    let folder_string = folder.display().to_string();
    assert_eq!(
        configuration.experiment.stations_file,
        PathBuf::from(format!("{}/stations.ini", folder_string))
    );
    assert_eq!(
        configuration.experiment.sources_file,
        PathBuf::from(format!("{}/sources.ini", folder_string))
    );
    assert_eq!(
        configuration.experiment.delays_file,
        PathBuf::from(format!("{}/delays.ini", folder_string))
    );
    assert_eq!(
        configuration.experiment.delay_model_file,
        PathBuf::from(format!("{}/delay_model.ini", folder_string))
    );
    assert_eq!(
        configuration.experiment.media_file,
        PathBuf::from(format!("{}/media.ini", folder_string))
    );
    assert_eq!(
        configuration.experiment.correlation_file,
        PathBuf::from(format!("{}/correlation.ini", folder_string))
    );

    assert_eq!(configuration.experiment.folder, folder);
    assert_eq!(configuration.experiment.data_dir, tmp.path().join("media"));
    assert_eq!(configuration.output.prefix, "OUT");
    assert!(configuration.output.spark_home.is_none());
    assert!(configuration.spark_config_pairs.is_none());
    assert!(!configuration.options.single_precision);
}

#[test]
fn retired_fields_keep_their_fixed_values_regardless_of_file_content() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());

    let contents = format!(
        "{}\n\
         [misc]\n\
         fft_at_mapper = yes\n\
         task_scaling_stations = yes\n\
         one_baseline_per_task = yes\n\
         ffts_per_chunk = 128\n",
        minimal_contents(&folder, tmp.path())
    );
    let config_path = write_job_configuration(tmp.path(), &contents);

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

    assert!(!configuration.options.fft_at_mapper);
    assert!(!configuration.options.task_scaling_stations);
    assert!(!configuration.options.one_baseline_per_task);
    assert_eq!(configuration.options.internal_log_mapper, 0);
    assert_eq!(configuration.options.internal_log_reducer, 0);
    assert_eq!(configuration.options.ffts_per_chunk, -1);
    assert_eq!(configuration.options.min_mapper_chunk, -1);
    assert_eq!(configuration.options.max_mapper_chunk, -1);
}

#[test]
fn output_directory_gains_a_trailing_separator() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());
    let config_path = write_job_configuration(tmp.path(), &minimal_contents(&folder, tmp.path()));

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

    let raw_output_dir = tmp.path().join("out").display().to_string();
    assert_eq!(
        configuration.output.directory,
        format!("{}/", raw_output_dir)
    );
}

#[test]
fn separator_terminated_output_directory_is_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());

    let terminated_output_dir = format!("{}/", tmp.path().join("out").display());
    let contents = format!(
        "[experiment]\n\
         ini_folder = {}\n\
         media_dir = {}\n\
         \n\
         [files]\n\
         output_dir = {}\n",
        folder.display(),
        tmp.path().join("media").display(),
        terminated_output_dir,
    );
    let config_path = write_job_configuration(tmp.path(), &contents);

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

    assert_eq!(configuration.output.directory, terminated_output_dir);
}

#[test]
fn loading_the_same_file_twice_yields_identical_configurations() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());
    let config_path = write_job_configuration(tmp.path(), &minimal_contents(&folder, tmp.path()));

    let schema = SchemaCatalog::current();
    let first = Configuration::load_from_path(&config_path, &schema).unwrap();
    let second = Configuration::load_from_path(&config_path, &schema).unwrap();

    assert_eq!(first, second);
}

#[test]
fn configured_file_names_override_the_defaults() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());
    fs::write(folder.join("stations_v2.ini"), "[placeholder]\n").unwrap();

    let contents = format!(
        "[experiment]\n\
         ini_folder = {}\n\
         stations = stations_v2.ini\n\
         media_dir = {}\n\
         \n\
         [files]\n\
         output_dir = {}\n",
        folder.display(),
        tmp.path().join("media").display(),
        tmp.path().join("out").display(),
    );
    let config_path = write_job_configuration(tmp.path(), &contents);

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

    assert_eq!(
        configuration.experiment.stations_file,
        PathBuf::from(format!("{}/stations_v2.ini", folder.display()))
    );
}

#[test]
fn missing_stations_file_is_reported_with_its_full_path() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());
    fs::remove_file(folder.join("stations.ini")).unwrap();

    let config_path = write_job_configuration(tmp.path(), &minimal_contents(&folder, tmp.path()));

    let error =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap_err();

    assert!(matches!(error, ConfigurationError::MissingFile { .. }));

    let expected_path = format!("{}/stations.ini", folder.display());
    assert!(error.to_string().contains(&expected_path));
}

#[test]
fn missing_experiment_folder_is_reported_before_any_file_check() {
    let tmp = TempDir::new().unwrap();
    let folder = tmp.path().join("no_such_experiment");

    let config_path = write_job_configuration(tmp.path(), &minimal_contents(&folder, tmp.path()));

    let error =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap_err();

    assert!(matches!(error, ConfigurationError::MissingDirectory { .. }));
    assert!(error.to_string().contains(&folder.display().to_string()));
}

#[test]
fn missing_delays_file_is_tolerated() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());
    assert!(!folder.join("delays.ini").exists());

    let config_path = write_job_configuration(tmp.path(), &minimal_contents(&folder, tmp.path()));

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

    // The path is still derived even though nothing checks it on disk.
    assert_eq!(
        configuration.experiment.delays_file,
        PathBuf::from(format!("{}/delays.ini", folder.display()))
    );
}

#[test]
fn passthrough_pairs_preserve_file_order() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());

    let contents = format!(
        "{}\n\
         [spark]\n\
         a = 1\n\
         b = 2\n",
        minimal_contents(&folder, tmp.path())
    );
    let config_path = write_job_configuration(tmp.path(), &contents);

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

    let pairs = configuration.spark_config_pairs.unwrap();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0], ("a".to_owned(), "1".to_owned()));
    assert_eq!(pairs[1], ("b".to_owned(), "2".to_owned()));
}

#[test]
fn missing_media_input_key_is_a_hard_failure() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());

    let contents = format!(
        "[experiment]\n\
         ini_folder = {}\n\
         \n\
         [files]\n\
         output_dir = {}\n",
        folder.display(),
        tmp.path().join("out").display(),
    );
    let config_path = write_job_configuration(tmp.path(), &contents);

    let error =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap_err();

    assert!(matches!(
        error,
        ConfigurationError::MissingKey {
            section: "experiment",
            key: "media_dir",
        }
    ));
    assert!(error.to_string().contains("media_dir"));
    assert!(error.to_string().contains("experiment"));
}

#[test]
fn single_precision_accepts_the_documented_literal_set() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());

    for (literal, expected) in [("1", true), ("yes", true), ("on", true), ("off", false)] {
        let contents = format!(
            "{}\n\
             [misc]\n\
             single_precision = {}\n",
            minimal_contents(&folder, tmp.path()),
            literal
        );
        let config_path = write_job_configuration(tmp.path(), &contents);

        let configuration =
            Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

        assert_eq!(configuration.options.single_precision, expected);
    }
}

#[test]
fn invalid_single_precision_literal_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());

    let contents = format!(
        "{}\n\
         [misc]\n\
         single_precision = maybe\n",
        minimal_contents(&folder, tmp.path())
    );
    let config_path = write_job_configuration(tmp.path(), &contents);

    let error =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap_err();

    assert!(matches!(
        error,
        ConfigurationError::InvalidBoolean {
            section: "misc",
            key: "single_precision",
            ..
        }
    ));
}

#[test]
fn syntactically_invalid_file_is_a_parse_error_naming_the_file() {
    let tmp = TempDir::new().unwrap();
    let config_path = write_job_configuration(tmp.path(), "[experiment]\nnot a key value line\n");

    let error =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap_err();

    assert!(matches!(error, ConfigurationError::Parse { line: 2, .. }));
    assert!(error.to_string().contains("configh.conf"));
}

#[test]
fn legacy_schema_resolves_the_same_logical_fields() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());

    let contents = format!(
        "[hadoop-other]\n\
         single_precision = yes\n\
         \n\
         [experiment]\n\
         ini_folder = {}\n\
         hdfs_data_dir = {}\n\
         \n\
         [files]\n\
         output_dir = {}\n\
         hadoop_home = /opt/hadoop\n\
         \n\
         [hadoop-core]\n\
         io.sort.mb = 100\n",
        folder.display(),
        tmp.path().join("media").display(),
        tmp.path().join("out").display(),
    );
    let config_path = write_job_configuration(tmp.path(), &contents);

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::legacy()).unwrap();

    assert!(configuration.options.single_precision);
    assert_eq!(configuration.experiment.data_dir, tmp.path().join("media"));
    assert_eq!(
        configuration.output.spark_home,
        Some(PathBuf::from("/opt/hadoop"))
    );
    assert_eq!(
        configuration.spark_config_pairs,
        Some(vec![("io.sort.mb".to_owned(), "100".to_owned())])
    );
}

#[test]
fn present_but_empty_passthrough_section_is_not_none() {
    let tmp = TempDir::new().unwrap();
    let folder = write_experiment_folder(tmp.path());

    let contents = format!(
        "{}\n\
         [spark]\n",
        minimal_contents(&folder, tmp.path())
    );
    let config_path = write_job_configuration(tmp.path(), &contents);

    let configuration =
        Configuration::load_from_path(&config_path, &SchemaCatalog::current()).unwrap();

    assert_eq!(configuration.spark_config_pairs, Some(Vec::new()));
}
