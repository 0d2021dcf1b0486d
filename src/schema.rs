//! Declarative JSON Schema description of the day-record model.
//!
//! The schema is maintained by hand rather than derived by reflection, so
//! it must track [`crate::models`] whenever the record shape changes. The
//! station names and the eight-element bound come from [`crate::constants`],
//! the same definitions the parser uses, and the tests below pin the
//! schema's property names to the serialized model's keys.

use serde_json::{Map, Value, json};

use crate::constants::{K_INDICES_PER_DAY, STATION_NAMES};

/// Describe the day-record shape for external consumers, without requiring
/// any parsed input. With `array`, the root describes a sequence of records
/// instead of a single one.
pub fn day_record_schema(array: bool) -> Value {
    let mut schema = Map::new();
    schema.insert(
        "$schema".to_string(),
        json!("http://json-schema.org/draft-07/schema#"),
    );

    if array {
        schema.insert("type".to_string(), json!("array"));
        schema.insert("items".to_string(), json!({ "$ref": "#/definitions/DayRecord" }));
    } else {
        schema.insert("$ref".to_string(), json!("#/definitions/DayRecord"));
    }

    schema.insert(
        "definitions".to_string(),
        json!({
            "DayRecord": day_record_definition(),
            "SiteReport": site_report_definition(),
        }),
    );

    Value::Object(schema)
}

fn day_record_definition() -> Value {
    let mut station_properties = Map::new();
    for name in STATION_NAMES {
        station_properties.insert(
            (*name).to_string(),
            json!({ "$ref": "#/definitions/SiteReport" }),
        );
    }

    json!({
        "type": "object",
        "required": ["year", "month", "day", "stations"],
        "properties": {
            "year": { "type": "integer", "minimum": 0 },
            "month": { "type": "integer", "minimum": 0 },
            "day": { "type": "integer", "minimum": 0 },
            "stations": {
                "type": "object",
                "required": STATION_NAMES,
                "properties": Value::Object(station_properties),
                "additionalProperties": false
            },
            "sourceLine": { "type": "string" }
        },
        "additionalProperties": false
    })
}

fn site_report_definition() -> Value {
    json!({
        "type": "object",
        "required": ["dailyIndex", "subDailyIndices"],
        "properties": {
            "dailyIndex": { "type": "integer" },
            "subDailyIndices": {
                "type": "array",
                "items": { "type": "integer" },
                "minItems": K_INDICES_PER_DAY,
                "maxItems": K_INDICES_PER_DAY
            }
        },
        "additionalProperties": false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geomag::parser::parse_day;

    const SAMPLE_LINE: &str = "2018 10 01     6  0 1 1 2 3 2 1 2    19  0 1 2 4 6 4 2 1     9  0 2 1 2 4 2 2 2";

    #[test]
    fn test_root_shapes() {
        let single = day_record_schema(false);
        assert_eq!(single["$ref"], "#/definitions/DayRecord");

        let sequence = day_record_schema(true);
        assert_eq!(sequence["type"], "array");
        assert_eq!(sequence["items"]["$ref"], "#/definitions/DayRecord");
    }

    /// The hand-maintained schema must stay in lockstep with the model:
    /// every key a serialized record produces is declared, and vice versa.
    #[test]
    fn test_schema_matches_serialized_model() {
        let record = parse_day(SAMPLE_LINE, 0).unwrap();
        let value = serde_json::to_value(&record).unwrap();

        let schema = day_record_schema(false);
        let day_properties = schema["definitions"]["DayRecord"]["properties"]
            .as_object()
            .unwrap();

        // Every emitted key is declared (sourceLine included, since the
        // sample record retains its source line)
        for key in value.as_object().unwrap().keys() {
            assert!(day_properties.contains_key(key), "undeclared key: {key}");
        }

        // Every station property matches an emitted station entry
        let stations = value["stations"].as_object().unwrap();
        let station_properties = day_properties["stations"]["properties"].as_object().unwrap();
        assert_eq!(stations.len(), station_properties.len());
        for name in station_properties.keys() {
            assert!(stations.contains_key(name), "schema names unknown station: {name}");
        }

        // Site-report keys line up too
        let site_properties = schema["definitions"]["SiteReport"]["properties"]
            .as_object()
            .unwrap();
        for key in stations["Planetary"].as_object().unwrap().keys() {
            assert!(site_properties.contains_key(key), "undeclared key: {key}");
        }
    }

    #[test]
    fn test_k_index_bounds() {
        let schema = day_record_schema(false);
        let array_schema = &schema["definitions"]["SiteReport"]["properties"]["subDailyIndices"];
        assert_eq!(array_schema["minItems"], 8);
        assert_eq!(array_schema["maxItems"], 8);
    }
}
