use super::*;
use serde_json::json;

#[test]
fn test_reports_configured_name_missing_from_data() {
    let items = items_from_json(json!([{"name": "ATM", "category": "Object"}]));

    assert_eq!(verify(&items, &name_set(&["Ghost Item"])), vec!["Ghost Item"]);
}

#[test]
fn test_present_names_are_not_reported() {
    let items = items_from_json(json!([
        {"name": "ATM", "category": "Object"},
        {"name": "ATM Machine", "category": "Object"}
    ]));

    assert!(verify(&items, &name_set(&["ATM Machine", "ATM"])).is_empty());
    assert!(verify(&items, &name_set(&[])).is_empty());
}

#[test]
fn test_missing_names_are_sorted() {
    let items = items_from_json(json!([{"name": "Mount Everest", "category": "Natural Feature"}]));

    let missing = verify(
        &items,
        &name_set(&["Zeppelin", "Mount Everest", "Amazon River", "Lake Erie"]),
    );

    assert_eq!(missing, vec!["Amazon River", "Lake Erie", "Zeppelin"]);
}

#[test]
fn test_matching_is_exact() {
    let items = items_from_json(json!([{"name": "Rialto Bridge Venice", "category": "Structure"}]));

    assert_eq!(
        verify(&items, &name_set(&["rialto bridge venice", "Rialto Bridge"])),
        vec!["Rialto Bridge", "rialto bridge venice"]
    );
}

#[test]
fn test_non_ascii_names_match() {
    let items = items_from_json(json!([
        {"name": "Longest tennis match (Isner–Mahut 2010)", "category": "Sports"}
    ]));

    assert!(verify(&items, &name_set(&["Longest tennis match (Isner–Mahut 2010)"])).is_empty());
}

#[test]
fn test_missing_categories() {
    let items = items_from_json(json!([
        {"name": "France", "category": "Country"},
        {"name": "Anvil"}
    ]));

    assert_eq!(
        missing_categories(&items, &name_set(&["Country", "City", "Artifact"])),
        vec!["Artifact", "City"]
    );
}

#[test]
fn test_duplicate_names() {
    let items = items_from_json(json!([
        {"name": "Escalator", "category": "Structure"},
        {"name": "Ladder", "category": "Tool"},
        {"name": "Escalator", "category": "Structure"},
        {"name": "Bucket", "category": "Container"}
    ]));

    assert_eq!(duplicate_names(&items), vec!["Escalator"]);
}

#[test]
fn test_drift_detect() {
    assert_eq!(Drift::detect(DriftSource::RemoveList, Vec::new()), None);

    let drift = Drift::detect(DriftSource::ProperNouns, vec!["K3".to_string()]).unwrap();
    assert_eq!(drift.source, DriftSource::ProperNouns);
    assert_eq!(drift.missing, vec!["K3"]);
    assert_eq!(drift.source.to_string(), "names in proper set");
}
