//! Core data structures for SWPC feed processing.
//!
//! Defines the typed record model that the geomagnetic bulletin parser
//! produces and the emitter serializes. All types are plain immutable value
//! records; construction is atomic and no partially-populated record exists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{K_INDICES_PER_DAY, MISSING_INDEX};

/// One observing station's readings for a single day.
///
/// The daily A index conceptually ranges 0-400 and each 3-hourly K index
/// 0-9; `-1` marks a missing reading. Values are passed through without
/// range validation - the parser is purely syntactic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    /// 24-hour A index
    pub daily_index: i32,

    /// Eight 3-hourly K indices, in interval order. The fixed-length array
    /// makes the exactly-eight invariant part of the type.
    pub sub_daily_indices: [i32; K_INDICES_PER_DAY],
}

impl SiteReport {
    /// True when the daily A index carries the missing-value sentinel
    pub fn daily_index_missing(&self) -> bool {
        self.daily_index == MISSING_INDEX
    }
}

/// One calendar day's report across all stations.
///
/// Constructed atomically from one bulletin line: either all fields parse
/// or the whole record is rejected. Station keys are the fixed set named in
/// [`crate::constants::STATION_NAMES`] and are always present once parsing
/// succeeds. A `BTreeMap` keeps serialization order deterministic so that
/// emitting the same records twice produces byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub year: u32,
    pub month: u32,
    pub day: u32,

    /// Station name (e.g. "Fredericksburg") to site report
    pub stations: BTreeMap<String, SiteReport>,

    /// Original bulletin line, retained for diagnostics only when
    /// explicitly requested; omitted from output otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_line: Option<String>,
}

impl DayRecord {
    /// Look up one station's report by name
    pub fn station(&self, name: &str) -> Option<&SiteReport> {
        self.stations.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{STATION_COLLEGE, STATION_FREDERICKSBURG, STATION_PLANETARY};

    fn sample_record() -> DayRecord {
        let mut stations = BTreeMap::new();
        stations.insert(
            STATION_FREDERICKSBURG.to_string(),
            SiteReport {
                daily_index: 6,
                sub_daily_indices: [0, 1, 1, 2, 3, 2, 1, 2],
            },
        );
        stations.insert(
            STATION_COLLEGE.to_string(),
            SiteReport {
                daily_index: 19,
                sub_daily_indices: [0, 1, 2, 4, 6, 4, 2, 1],
            },
        );
        stations.insert(
            STATION_PLANETARY.to_string(),
            SiteReport {
                daily_index: 9,
                sub_daily_indices: [0, 2, 1, 2, 4, 2, 2, 2],
            },
        );

        DayRecord {
            year: 2018,
            month: 10,
            day: 1,
            stations,
            source_line: None,
        }
    }

    #[test]
    fn test_json_field_names() {
        let record = sample_record();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["year"], 2018);
        assert_eq!(value["month"], 10);
        assert_eq!(value["day"], 1);
        assert_eq!(value["stations"]["Fredericksburg"]["dailyIndex"], 6);
        assert_eq!(
            value["stations"]["Planetary"]["subDailyIndices"]
                .as_array()
                .unwrap()
                .len(),
            8
        );
    }

    #[test]
    fn test_source_line_omitted_when_absent() {
        let record = sample_record();
        let js = serde_json::to_string(&record).unwrap();
        assert!(!js.contains("sourceLine"));

        let mut with_line = record;
        with_line.source_line = Some("raw text".to_string());
        let js = serde_json::to_string(&with_line).unwrap();
        assert!(js.contains("\"sourceLine\":\"raw text\""));
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample_record();
        let js = serde_json::to_string(&record).unwrap();
        let back: DayRecord = serde_json::from_str(&js).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_wrong_length_k_array_rejected() {
        let js = r#"{"year":2018,"month":10,"day":1,"stations":{"Planetary":{"dailyIndex":9,"subDailyIndices":[0,2,1,2,4,2,2]}}}"#;
        let result: std::result::Result<DayRecord, _> = serde_json::from_str(js);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_sentinel() {
        let report = SiteReport {
            daily_index: MISSING_INDEX,
            sub_daily_indices: [MISSING_INDEX; 8],
        };
        assert!(report.daily_index_missing());
    }
}
