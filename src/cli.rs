//! Command-line argument parsing
//!
//! Supports:
//! - Converting CSV/TSV/PSV files to JSON or YAML (or re-writing them as CSV)
//! - Converting Java properties files the same way
//! - Reading from stdin with `-`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{OutputFormat, TabulaConfig};
use crate::csv::{detect_delimiter, Dialect};

/// Parse delimited text and properties files
#[derive(Parser, Debug)]
#[command(name = "tabula", version, about = "Parse CSV and Java properties files")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a delimited text file
    Csv {
        /// File to read, or `-` for stdin
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Field delimiter (detected when omitted)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Quote character
        #[arg(short, long)]
        quote: Option<char>,

        /// Treat the first row as column names
        #[arg(long)]
        headers: bool,

        #[arg(short, long, value_enum)]
        format: Option<CsvFormat>,
    },
    /// Parse a Java properties file
    Properties {
        /// File to read, or `-` for stdin
        #[arg(value_name = "PATH")]
        path: PathBuf,

        #[arg(short, long, value_enum)]
        format: Option<PropertiesFormat>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CsvFormat {
    Json,
    Yaml,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PropertiesFormat {
    Json,
    Yaml,
    Properties,
}

/// How parsed data is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    Json,
    Yaml,
    /// Back to the input's own text format
    Native,
}

impl From<OutputFormat> for Render {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Render::Json,
            OutputFormat::Yaml => Render::Yaml,
        }
    }
}

/// Where the text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path)
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Input::Stdin => None,
            Input::File(path) => Some(path),
        }
    }

    fn extension(&self) -> Option<&str> {
        self.path()?.extension()?.to_str()
    }
}

/// Delimiter given explicitly or left to detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectChoice {
    Fixed(Dialect),
    Detect { quote: char },
}

impl DialectChoice {
    /// Settle the dialect once the content is known.
    ///
    /// Detection looks at the file extension first (`tsv`, `psv`) and then the
    /// first lines of content. If the detected delimiter is the requested
    /// quote character, the default quote is used instead and a warning logged.
    pub fn resolve(self, input: &Input, content: &str) -> Dialect {
        let quote = match self {
            DialectChoice::Fixed(dialect) => return dialect,
            DialectChoice::Detect { quote } => quote,
        };

        let detected = match input.extension() {
            Some(ext) if matches!(ext.to_lowercase().as_str(), "tsv" | "psv") => {
                Dialect::for_extension(ext)
            }
            _ => detect_delimiter(content),
        };
        tracing::debug!("Detected delimiter {:?}", detected.delimiter());

        match Dialect::new(detected.delimiter(), quote) {
            Ok(dialect) => dialect,
            Err(e) => {
                tracing::warn!(
                    "Configured quote {:?} ignored ({}), using {:?}",
                    quote,
                    e,
                    detected.quote()
                );
                detected
            }
        }
    }
}

/// A fully resolved unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Csv {
        input: Input,
        dialect: DialectChoice,
        headers: bool,
        render: Render,
    },
    Properties {
        input: Input,
        render: Render,
    },
}

impl CliArgs {
    /// Combine parsed CLI args with the saved config; flags win over config
    pub fn into_job(self, config: &TabulaConfig) -> Result<Job, String> {
        match self.command {
            Command::Csv {
                path,
                delimiter,
                quote,
                headers,
                format,
            } => {
                let quote = quote.unwrap_or(config.csv.quote);
                let dialect = match delimiter.or(config.csv.delimiter) {
                    Some(delimiter) => DialectChoice::Fixed(
                        Dialect::new(delimiter, quote).map_err(|e| e.to_string())?,
                    ),
                    None => DialectChoice::Detect { quote },
                };
                let render = match format {
                    Some(CsvFormat::Json) => Render::Json,
                    Some(CsvFormat::Yaml) => Render::Yaml,
                    Some(CsvFormat::Csv) => Render::Native,
                    None => config.output.into(),
                };

                Ok(Job::Csv {
                    input: Input::from_path(path),
                    dialect,
                    headers: headers || config.csv.headers,
                    render,
                })
            }
            Command::Properties { path, format } => {
                let render = match format {
                    Some(PropertiesFormat::Json) => Render::Json,
                    Some(PropertiesFormat::Yaml) => Render::Yaml,
                    Some(PropertiesFormat::Properties) => Render::Native,
                    None => config.output.into(),
                };

                Ok(Job::Properties {
                    input: Input::from_path(path),
                    render,
                })
            }
        }
    }
}
