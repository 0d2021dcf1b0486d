//! Input source selection and output shaping options.
//!
//! The CLI resolves its flags into these small typed structs; the library
//! layers below them never look at command-line state.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::constants::DEFAULT_GEOMAG_URL;
use crate::error::Result;
use crate::fetch;

/// Where bulletin text is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local file path
    File(PathBuf),
    /// Standard input, selected with `-` on the command line
    Stdin,
    /// Blocking network fetch
    Url(String),
}

impl Source {
    /// Resolve the source from CLI inputs: a local file wins over a URL,
    /// `-` selects standard input, and with neither given the default SWPC
    /// bulletin URL is fetched.
    pub fn resolve(file: Option<PathBuf>, url: Option<String>) -> Self {
        match file {
            Some(path) if path.as_os_str() == "-" => Source::Stdin,
            Some(path) => Source::File(path),
            None => Source::Url(url.unwrap_or_else(|| DEFAULT_GEOMAG_URL.to_string())),
        }
    }

    /// Read the complete source contents into memory. Input files are one
    /// month or one quarter of daily records, so whole-file reads are fine.
    pub fn read(&self) -> Result<String> {
        match self {
            Source::File(path) => {
                debug!("reading {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
            Source::Stdin => {
                debug!("reading standard input");
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            Source::Url(url) => fetch::fetch_text(url),
        }
    }
}

/// Output shaping options for the geomagnetic pipeline
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Wrap records in a single JSON array instead of one object per line
    pub array_wrap: bool,

    /// Retain the original bulletin line on each record
    pub include_source_line: bool,
}
