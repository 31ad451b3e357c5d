//! Delimited text (CSV/TSV/PSV) reading and writing
//!
//! Provides a lenient single-pass parser with:
//! - Configurable delimiter and quote character ([`Dialect`])
//! - Quoted fields holding delimiters, doubled quotes and line breaks
//! - Mixed `\r\n` / `\n` / `\r` line endings
//! - An inverse [`serialize`] that quotes only the fields that need it
//!
//! # Architecture
//!
//! ```text
//! &str ──parse──▶ Grid ──serialize──▶ String
//!                  │
//!                  └─ Table::from_grid_with_headers (first row as column names)
//! ```

mod model;
mod parser;

pub use model::{Dialect, Grid, Table};
pub use parser::{detect_delimiter, parse, serialize};
