//! Syntactic reading of the job configuration file: bracketed sections
//! containing `key = value` lines. No semantic interpretation happens here;
//! values stay strings and names keep their exact case.

use std::fs;
use std::path::Path;

use super::errors::ConfigurationError;


/// One `[section]` block: the header name plus its key/value pairs
/// in file order.
#[derive(Clone, PartialEq, Debug)]
pub struct RawSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl RawSection {
    /// All pairs of this section, in the order they appear in the file.
    /// Reassigned keys appear once per assignment.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// The latest value assigned to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value.as_str())
    }
}


/// The section -> key -> value table of a job configuration file.
///
/// Built once per load and discarded after the fields are resolved.
#[derive(Clone, PartialEq, Debug)]
pub struct RawTable {
    sections: Vec<RawSection>,
}

impl RawTable {
    /// Read and parse the job configuration file at `path`.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse_str(&contents, path)
    }

    /// Parse already-read configuration text. `origin` only names the file
    /// in parse errors.
    pub fn parse_str(contents: &str, origin: &Path) -> Result<Self, ConfigurationError> {
        let mut sections: Vec<RawSection> = Vec::new();

        for (line_index, line) in contents.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = match header.strip_suffix(']') {
                    Some(name) => name,
                    None => {
                        return Err(syntax_error(
                            origin,
                            line_index,
                            "section header is missing its closing bracket",
                        ));
                    }
                };

                sections.push(RawSection {
                    name: name.to_owned(),
                    entries: Vec::new(),
                });
            } else if let Some((key, value)) = line.split_once('=') {
                let section = match sections.last_mut() {
                    Some(section) => section,
                    None => {
                        return Err(syntax_error(
                            origin,
                            line_index,
                            "key/value pair appears before any [section] header",
                        ));
                    }
                };

                section
                    .entries
                    .push((key.trim().to_owned(), value.trim().to_owned()));
            } else {
                return Err(syntax_error(
                    origin,
                    line_index,
                    "expected `[section]` or `key = value`",
                ));
            }
        }

        Ok(Self { sections })
    }

    /// The latest section named `name`, if any.
    pub fn section(&self, name: &str) -> Option<&RawSection> {
        self.sections
            .iter()
            .rev()
            .find(|section| section.name == name)
    }

    /// The latest value assigned to `key` inside `section`, if any.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|section| section.get(key))
    }
}


fn syntax_error(origin: &Path, line_index: usize, reason: &str) -> ConfigurationError {
    ConfigurationError::Parse {
        path: origin.to_path_buf(),
        line: line_index + 1,
        reason: reason.to_owned(),
    }
}
