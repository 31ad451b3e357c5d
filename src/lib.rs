//! Tabula - lenient delimited text parsing and model undo history
//!
//! This crate provides two independent building blocks:
//! - [`csv`] and [`properties`]: single-pass parsers (and serializers) for
//!   CSV-style grids and Java properties files that never fail on malformed input
//! - [`history`]: a snapshot-based undo/redo tracker for any `Clone + PartialEq` model

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod error;
pub mod history;
pub mod properties;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use crate::config::TabulaConfig;
pub use crate::csv::{Dialect, Grid, Table};
pub use crate::error::Error;
pub use crate::history::{ModelHistory, Snapshot};
pub use crate::properties::Properties;
