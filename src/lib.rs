//! Startup configuration for the skycorr distributed correlation pipeline.
//!
//! The pipeline consolidates its settings from a primary job configuration
//! file plus several per-experiment description files (stations, sources,
//! delay model, media, correlation). This crate loads the primary file,
//! resolves every field and verifies the experiment layout on disk,
//! producing the immutable [`configuration::Configuration`] that the
//! mapper/reducer stages and job submission consume.

pub mod configuration;
pub mod logging;
