use super::*;
use crate::error::CurationError;
use std::fs;
use tempfile::tempdir;

const CATALOG: &str = r#"[
  {
    "name": "Café Table",
    "category": "Furniture",
    "height_m": 0.750,
    "width_m": 6.0e-1
  },
  {
    "name": "Zürich",
    "category": "City",
    "area_m2": 87880000,
    "proper_noun": true
  },
  {
    "name": "Moon",
    "category": "Celestial",
    "distance_m": 3.844e8,
    "weight_kg": 7.342E+22
  },
  {
    "name": "Planck time",
    "category": "Physics",
    "duration_s": 5.39e-44
  }
]
"#;

#[test]
fn test_round_trip_is_byte_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("world_measurements.json");
    fs::write(&path, CATALOG).unwrap();

    let items = load_items(&path).unwrap();
    save_items(&path, &items).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), CATALOG);
}

#[test]
fn test_exponent_numbers_survive_rewrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("world_measurements.json");
    let input = "[\n  {\n    \"name\": \"Moon\",\n    \"distance_m\": 3.844e8\n  }\n]\n";
    fs::write(&path, input).unwrap();

    let mut items = load_items(&path).unwrap();
    assert_eq!(to_json_string(&items).unwrap(), input);

    items[0].mark_proper_noun();
    assert_eq!(
        to_json_string(&items).unwrap(),
        "[\n  {\n    \"name\": \"Moon\",\n    \"distance_m\": 3.844e8,\n    \"proper_noun\": true\n  }\n]\n"
    );
}

#[test]
fn test_non_ascii_is_written_literally() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("world_durations.json");
    fs::write(
        &path,
        r#"[{"name":"2011 Tōhoku earthquake duration","category":"Geology","duration_s":360}]"#,
    )
    .unwrap();

    let items = load_items(&path).unwrap();
    assert_eq!(items[0].name(), "2011 Tōhoku earthquake duration");

    save_items(&path, &items).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"2011 Tōhoku earthquake duration\""));
    assert!(!written.contains("\\u"));
    assert!(written.ends_with("}\n]\n"));
}

#[test]
fn test_empty_catalog_is_written_as_empty_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.json");

    save_items(&path, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    assert!(load_items(&path).unwrap().is_empty());
}

#[test]
fn test_save_leaves_no_temporary_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("world_measurements.json");
    fs::write(&path, CATALOG).unwrap();

    let items = load_items(&path).unwrap();
    save_items(&path, &items[..1]).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(load_items(&path).unwrap().len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = load_items(&dir.path().join("absent.json"));

    assert!(matches!(result, Err(CurationError::Io { .. })));
}

#[test]
fn test_invalid_json_is_malformed_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"name": "ATM""#).unwrap();

    let result = load_items(&path);
    assert!(matches!(result, Err(CurationError::MalformedInput { .. })));
}

#[test]
fn test_invalid_utf8_is_malformed_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.json");
    fs::write(&path, b"[{\"name\": \"Caf\xe9\", \"category\": \"Place\"}]").unwrap();

    let result = load_items(&path);
    assert!(
        matches!(result, Err(CurationError::MalformedInput { .. })),
        "unexpected result: {result:?}"
    );
}

#[test]
fn test_top_level_object_is_malformed_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("object.json");
    fs::write(&path, r#"{"name": "ATM"}"#).unwrap();

    let result = load_items(&path);
    assert!(matches!(result, Err(CurationError::MalformedInput { .. })));
}

#[test]
fn test_record_without_name_is_schema_violation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nameless.json");
    fs::write(
        &path,
        r#"[{"name": "ATM", "category": "Object"}, {"category": "Object"}]"#,
    )
    .unwrap();

    match load_items(&path) {
        Err(CurationError::SchemaViolation { index, reason, .. }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("name"), "unexpected reason: {reason}");
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}
