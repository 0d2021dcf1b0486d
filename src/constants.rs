//! Application constants for the SWPC feed processor.
//!
//! Layout assumptions for both feed formats live here so the parsers, the
//! record model, and the schema reporter all draw on the same definitions.

// =============================================================================
// Geomagnetic Bulletin Layout
// =============================================================================

/// Station names, in the column order they appear on a bulletin line
pub const STATION_NAMES: &[&str] = &[STATION_FREDERICKSBURG, STATION_COLLEGE, STATION_PLANETARY];

pub const STATION_FREDERICKSBURG: &str = "Fredericksburg";
pub const STATION_COLLEGE: &str = "College";
pub const STATION_PLANETARY: &str = "Planetary";

pub const STATION_COUNT: usize = STATION_NAMES.len();

/// Number of 3-hourly K indices each station reports per day
pub const K_INDICES_PER_DAY: usize = 8;

/// Integer tokens on one daily record line: three date fields plus, per
/// station, one daily A index and eight K indices.
pub const RECORD_TOKEN_COUNT: usize = 3 + STATION_COUNT * (1 + K_INDICES_PER_DAY);

/// Sentinel for missing A and K indices in SWPC bulletins
pub const MISSING_INDEX: i32 = -1;

// =============================================================================
// Particle-Flux CSV Layout
// =============================================================================

/// Marker line separating the flux file preamble from the column header
pub const FLUX_DATA_MARKER: &str = "data:";

/// Columns extracted from a flux dump when the caller requests none
pub const DEFAULT_FLUX_COLUMNS: &[&str] = &["time_tag", "ZPGT1E", "ZPGT5E"];

// =============================================================================
// Network Defaults
// =============================================================================

/// Current daily geomagnetic indices bulletin published by SWPC
pub const DEFAULT_GEOMAG_URL: &str =
    "https://services.swpc.noaa.gov/text/daily-geomagnetic-indices.txt";
