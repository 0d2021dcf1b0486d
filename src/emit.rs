//! Output serialization for parsed records.
//!
//! Emission is append-only and preserves input order; the only lookahead is
//! the slice length needed to place commas between JSON array elements.
//! Identical records and options always produce byte-identical output.

use std::io::Write;

use crate::error::Result;
use crate::flux::extractor::Projection;
use crate::models::DayRecord;

/// Write day records as JSON: one object per line by default, or a single
/// array with two-space-indented elements when `array_wrap` is set.
pub fn write_json_records<W: Write>(
    out: &mut W,
    records: &[DayRecord],
    array_wrap: bool,
) -> Result<()> {
    let pad = if array_wrap {
        writeln!(out, "[")?;
        "  "
    } else {
        ""
    };

    let last = records.len().saturating_sub(1);
    for (i, record) in records.iter().enumerate() {
        let js = serde_json::to_string(record)?;
        write!(out, "{pad}{js}")?;
        if array_wrap && i < last {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }

    if array_wrap {
        writeln!(out, "]")?;
    }
    Ok(())
}

/// Write a column projection as CSV: the requested column names first, then
/// each data row's values in the same order.
pub fn write_projection_csv<W: Write>(out: &mut W, projection: &Projection) -> Result<()> {
    writeln!(out, "{}", projection.columns.join(","))?;
    for row in &projection.rows {
        writeln!(out, "{}", row.join(","))?;
    }
    Ok(())
}
