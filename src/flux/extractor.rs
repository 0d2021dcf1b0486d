//! Column projection over GOES particle-flux CSV dumps.
//!
//! Flux files carry an arbitrary preamble, a literal `data:` marker line,
//! one comma-separated header line naming every column, then comma-separated
//! data lines. Everything before the marker is ignored without validation -
//! this pipeline is deliberately lenient about the preamble, in contrast to
//! the geomagnetic banner matcher.

use tracing::debug;

use super::columns::ColumnMap;
use crate::constants::FLUX_DATA_MARKER;
use crate::error::{Result, SwpcError};

/// Result of projecting requested columns over a flux file: the requested
/// names, and each data row's field values in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Extract the requested columns from every data row, in request order,
/// independent of the file's native column order.
///
/// Requested names are resolved against the discovered header before any
/// row is read, so an unknown column fails even on a file with no data
/// rows. A file without a `data:` marker (or with nothing after it) yields
/// an empty projection: the preamble region carries no contract.
pub fn project_columns(content: &str, wanted: &[String]) -> Result<Projection> {
    let mut lines = content.lines().map(str::trim);

    let mut saw_marker = false;
    for line in lines.by_ref() {
        if line == FLUX_DATA_MARKER {
            saw_marker = true;
            break;
        }
    }

    let header_line = if saw_marker { lines.next() } else { None };
    let Some(header_line) = header_line else {
        debug!("no '{FLUX_DATA_MARKER}' marker found, emitting empty projection");
        return Ok(Projection {
            columns: wanted.to_vec(),
            rows: Vec::new(),
        });
    };

    let map = ColumnMap::from_header_line(header_line);
    debug!("discovered {} columns in flux header", map.len());

    let mut indices = Vec::with_capacity(wanted.len());
    for name in wanted {
        indices.push(map.index_of(name)?);
    }

    let mut rows = Vec::new();
    for (line_number, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(',').collect();

        let mut row = Vec::with_capacity(indices.len());
        for (name, &index) in wanted.iter().zip(indices.iter()) {
            let value = fields.get(index).ok_or_else(|| SwpcError::TruncatedRow {
                line: line_number,
                column: name.clone(),
                index,
                found: fields.len(),
            })?;
            row.push((*value).to_string());
        }
        rows.push(row);
    }

    Ok(Projection {
        columns: wanted.to_vec(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wanted(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const SAMPLE: &str = "\
# GOES-15 electron flux, 5 minute averages
# units: particles / (cm^2 s sr)
data:
time_tag,ZPGT1E,ZPGT5E,ZPGT10E
2018-12-01 00:00,1.23e+03,4.56e+01,7.8
2018-12-01 00:05,1.30e+03,4.60e+01,8.0
";

    #[test]
    fn test_projection_in_request_order() {
        let projection = project_columns(SAMPLE, &wanted(&["ZPGT5E", "time_tag"])).unwrap();

        assert_eq!(projection.columns, wanted(&["ZPGT5E", "time_tag"]));
        assert_eq!(projection.rows.len(), 2);
        assert_eq!(projection.rows[0], wanted(&["4.56e+01", "2018-12-01 00:00"]));
        assert_eq!(projection.rows[1], wanted(&["4.60e+01", "2018-12-01 00:05"]));
    }

    #[test]
    fn test_skip_first_and_last_of_header() {
        // Projecting [A, C] from header A,B,C and row 1,2,3 yields 1,3
        let content = "data:\nA,B,C\n1,2,3\n";
        let projection = project_columns(content, &wanted(&["A", "C"])).unwrap();
        assert_eq!(projection.rows, vec![wanted(&["1", "3"])]);
    }

    #[test]
    fn test_unknown_column_fails_before_rows() {
        let err = project_columns(SAMPLE, &wanted(&["time_tag", "ZPGT30E"])).unwrap_err();
        match err {
            SwpcError::UnknownColumn { name } => assert_eq!(name, "ZPGT30E"),
            other => panic!("expected UnknownColumn, got {other:?}"),
        }

        // Same failure on a file with a header but zero data rows
        let content = "data:\ntime_tag,ZPGT1E\n";
        assert!(project_columns(content, &wanted(&["ZPGT30E"])).is_err());
    }

    #[test]
    fn test_truncated_row_is_error() {
        let content = "data:\nA,B,C\n1,2,3\n4,5\n";
        let err = project_columns(content, &wanted(&["C"])).unwrap_err();
        match err {
            SwpcError::TruncatedRow {
                line,
                column,
                index,
                found,
            } => {
                assert_eq!(line, 1);
                assert_eq!(column, "C");
                assert_eq!(index, 2);
                assert_eq!(found, 2);
            }
            other => panic!("expected TruncatedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_marker_yields_empty_projection() {
        let content = "no marker here\nA,B,C\n1,2,3\n";
        let projection = project_columns(content, &wanted(&["A"])).unwrap();
        assert!(projection.rows.is_empty());
    }

    #[test]
    fn test_marker_as_last_line_yields_empty_projection() {
        let projection = project_columns("preamble\ndata:\n", &wanted(&["A"])).unwrap();
        assert!(projection.rows.is_empty());
    }

    #[test]
    fn test_preamble_resembling_data_is_ignored() {
        let content = "A,B,C\n9,9,9\ndata:\nA,B,C\n1,2,3\n";
        let projection = project_columns(content, &wanted(&["B"])).unwrap();
        assert_eq!(projection.rows, vec![wanted(&["2"])]);
    }
}
