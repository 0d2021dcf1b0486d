//! Command-line argument definitions for the SWPC processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Each subcommand owns its validation and log-level mapping.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{EmitOptions, Source};
use crate::constants::DEFAULT_FLUX_COLUMNS;
use crate::error::{Result, SwpcError};

/// CLI arguments for the SWPC space weather feed processor
///
/// Converts NOAA Space Weather Prediction Center text feeds into structured
/// JSON and CSV for downstream analysis.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "swpc_processor",
    version,
    about = "Convert NOAA SWPC space weather text feeds into structured JSON and CSV",
    long_about = "A tool that converts NOAA Space Weather Prediction Center text products \
                  into machine-consumable records. The geomag command parses daily \
                  geomagnetic index bulletins into JSON; the flux command extracts selected \
                  columns from GOES particle-flux CSV dumps as simplified CSV."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the SWPC processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a daily geomagnetic index bulletin to JSON
    Geomag(GeomagArgs),
    /// Extract columns from a GOES particle-flux CSV dump
    Flux(FluxArgs),
}

/// Arguments for the geomag command (daily geomagnetic indices to JSON)
#[derive(Debug, Clone, Parser)]
pub struct GeomagArgs {
    /// Input bulletin file; `-` reads standard input
    ///
    /// When given, the file takes precedence over --url.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "Bulletin file to read ('-' for standard input)"
    )]
    pub file: Option<PathBuf>,

    /// URL to fetch the bulletin from
    ///
    /// Used only when no file is given. Defaults to the current SWPC daily
    /// geomagnetic indices bulletin.
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        help = "URL for the bulletin when no file is given"
    )]
    pub url: Option<String>,

    /// Wrap output records in a single JSON array
    #[arg(short = 'a', long = "array", help = "Wrap records in a JSON array")]
    pub array: bool,

    /// Include the original bulletin line with each record
    #[arg(
        long = "include-raw",
        help = "Include the original bulletin line with each record"
    )]
    pub include_raw: bool,

    /// Print the JSON Schema of the output and exit without reading input
    #[arg(
        short = 's',
        long = "schema",
        help = "Print the output JSON Schema and exit"
    )]
    pub schema: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the flux command (particle-flux column extraction)
#[derive(Debug, Clone, Parser)]
pub struct FluxArgs {
    /// Flux CSV dump to read
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "Flux CSV dump to read"
    )]
    pub file: PathBuf,

    /// Columns to extract, comma-separated, emitted in the given order
    ///
    /// Names must appear in the file's own header line (the line after the
    /// `data:` marker).
    #[arg(
        short = 'w',
        long = "columns",
        value_name = "LIST",
        default_value = "time_tag,ZPGT1E,ZPGT5E",
        help = "Comma-separated list of columns to extract"
    )]
    pub columns: ColumnList,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Wrapper for parsing comma-separated column lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnList {
    pub columns: Vec<String>,
}

impl FromStr for ColumnList {
    type Err = SwpcError;

    fn from_str(s: &str) -> Result<Self> {
        let columns: Vec<String> = s
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if columns.is_empty() {
            return Err(SwpcError::configuration(
                "column list cannot be empty".to_string(),
            ));
        }

        Ok(ColumnList { columns })
    }
}

impl Default for ColumnList {
    fn default() -> Self {
        ColumnList {
            columns: DEFAULT_FLUX_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl GeomagArgs {
    /// Validate the geomag command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate the input file exists when one is given (stdin excepted)
        if let Some(file) = &self.file {
            if file.as_os_str() != "-" && !file.exists() {
                return Err(SwpcError::configuration(format!(
                    "Input file does not exist: {}",
                    file.display()
                )));
            }
        }
        Ok(())
    }

    /// Resolve the input source from the file/url flags
    pub fn source(&self) -> Source {
        Source::resolve(self.file.clone(), self.url.clone())
    }

    /// Output shaping options derived from the flags
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            array_wrap: self.array,
            include_source_line: self.include_raw,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl FluxArgs {
    /// Validate the flux command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(SwpcError::configuration(format!(
                "Input file does not exist: {}",
                self.file.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
