//! This module contains all configuration-relevant code: reading the job
//! configuration file, resolving its fields and validating the experiment
//! layout on disk before the pipeline is allowed to start.
//!
//! Your starting point should probably be [`Configuration::load_from_path`].
//!
//! # Internals
//! Loading is strictly linear. The file is first read into a [`RawTable`]
//! (sections of ordered key/value pairs, no interpretation). Each field
//! group then resolves itself from the table through the active
//! [`SchemaCatalog`], which names the (section, key) location and fallback
//! of every logical field. Once all fields exist, the experiment layout is
//! checked against the filesystem, and only then is the immutable
//! [`Configuration`] handed to the caller.
//!
//! Any failure along the way aborts the load with a [`ConfigurationError`];
//! a partially-built configuration is never exposed.
//!
//! [`RawTable`]: raw::RawTable

#![allow(rustdoc::private_intra_doc_links)]

mod errors;
mod raw;
mod schema;
mod structure;
mod traits;
mod utilities;

pub use errors::ConfigurationError;
pub use schema::{ConfigKey, SchemaCatalog};
pub use structure::*;
pub use utilities::DEFAULT_JOB_CONFIGURATION_FILE_NAME;
