//! Bulletin banner matching for daily geomagnetic index files.
//!
//! A recognizable file starts with the SWPC boilerplate banner: a product
//! line and an issue-date line with variable text, then comment and station
//! label lines that must match verbatim. Files lacking the banner are
//! rejected outright; no best-effort parsing is attempted.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, SwpcError};

/// Banner template for the daily geomagnetic indices product.
///
/// The product and issue lines vary per bulletin and are wildcarded, as is
/// the one free-text comment line. Everything else must match exactly. The
/// pattern is anchored at the start of input: a banner appearing anywhere
/// later in the file does not make the file valid.
///
/// See https://services.swpc.noaa.gov/text/daily-geomagnetic-indices.txt.
const BANNER_PATTERN: &str = r"\A:Product: Daily Geomagnetic Data.*
:Issued: .*
#
#  Prepared by the U\.S\. Dept\. of Commerce, NOAA, Space Weather Prediction Center
#  Please send comment and suggestions to SWPC\.Webmaster@noaa\.gov
#
#  .*
#
#
#                Middle Latitude        High Latitude            Estimated
#              - Fredericksburg -     ---- College ----      --- Planetary ---
#  Date        A     K-indices        A     K-indices        A     K-indices
";

static BANNER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BANNER_PATTERN).expect("banner pattern is a valid regex"));

/// Confirm the content begins with the bulletin banner and return the
/// remainder starting at the first data line.
pub fn strip_banner(content: &str) -> Result<&str> {
    let banner = BANNER_RE.find(content).ok_or(SwpcError::MalformedHeader)?;
    Ok(&content[banner.end()..])
}
