//! Fixed-column record parsing for daily geomagnetic bulletins.
//!
//! Each data line carries 30 whitespace-delimited integer tokens in strict
//! order: `YEAR MONTH DAY`, then for each of Fredericksburg, College and
//! Planetary one daily A index followed by eight 3-hourly K indices. A
//! single malformed token invalidates the whole line; there is no recovery
//! within a line and no skip-and-continue across lines.

use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::debug;

use super::header;
use crate::constants::{K_INDICES_PER_DAY, RECORD_TOKEN_COUNT, STATION_NAMES};
use crate::error::{Result, SwpcError};
use crate::models::{DayRecord, SiteReport};

/// Parse one bulletin data line into a day record.
///
/// `line_number` is 0-based relative to the first data line and is carried
/// into any parse error for diagnostics. The returned record always retains
/// the original line in `source_line`; callers decide whether to keep it.
pub fn parse_day(line: &str, line_number: usize) -> Result<DayRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != RECORD_TOKEN_COUNT {
        return Err(SwpcError::RecordParse {
            line: line_number,
            reason: format!(
                "expected {} integer fields, found {}",
                RECORD_TOKEN_COUNT,
                tokens.len()
            ),
            text: line.to_string(),
        });
    }

    // Date fields are non-negative; a negative year or month is a parse
    // failure, not a record.
    let year: u32 = parse_field(&tokens, 0, line, line_number)?;
    let month: u32 = parse_field(&tokens, 1, line, line_number)?;
    let day: u32 = parse_field(&tokens, 2, line, line_number)?;

    let mut stations = BTreeMap::new();
    for (group, name) in STATION_NAMES.iter().enumerate() {
        let base = 3 + group * (1 + K_INDICES_PER_DAY);
        let daily_index: i32 = parse_field(&tokens, base, line, line_number)?;

        let mut sub_daily_indices = [0i32; K_INDICES_PER_DAY];
        for (slot, value) in sub_daily_indices.iter_mut().enumerate() {
            *value = parse_field(&tokens, base + 1 + slot, line, line_number)?;
        }

        stations.insert(
            (*name).to_string(),
            SiteReport {
                daily_index,
                sub_daily_indices,
            },
        );
    }

    Ok(DayRecord {
        year,
        month,
        day,
        stations,
        source_line: Some(line.to_string()),
    })
}

/// Parse a whole bulletin: strip the banner, then convert each data line.
///
/// A zero-length line ends the data section and is success, not an error;
/// anything after it is ignored. The first malformed line aborts the whole
/// file - a short bulletin with one bad line must not silently under-report.
pub fn parse_file(content: &str) -> Result<Vec<DayRecord>> {
    let body = header::strip_banner(content)?;

    let mut records = Vec::new();
    for (line_number, line) in body.lines().enumerate() {
        if line.is_empty() {
            break;
        }
        records.push(parse_day(line, line_number)?);
    }

    debug!("parsed {} day records", records.len());
    Ok(records)
}

fn parse_field<T: FromStr>(
    tokens: &[&str],
    position: usize,
    line: &str,
    line_number: usize,
) -> Result<T> {
    let token = tokens[position];
    token.parse().map_err(|_| SwpcError::RecordParse {
        line: line_number,
        reason: format!("field {} is not a valid integer: '{}'", position, token),
        text: line.to_string(),
    })
}
