//! Core types, errors, configuration, and manifest model for Strata.
//!
//! This crate is I/O-light: the only filesystem access is reading the
//! project manifest and config file. Graph construction, boundary
//! validation, gates, and reporting live in `strata-analysis`.

pub mod config;
pub mod errors;
pub mod manifest;
