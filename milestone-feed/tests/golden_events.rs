use std::fs;

use milestone_core::{GroupedEvents, MilestoneError};
use milestone_feed::{parse_events_str, parse_events_value};
use serde_json::{json, Value};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn events_document_matches_grouped_golden() {
    let document =
        fs::read_to_string(fixture_path("events.json")).expect("Cannot read sample events");

    let events = parse_events_str(&document).expect("Cannot parse sample events");
    assert_eq!(events.len(), 12);

    let grouped = GroupedEvents::from_events(&events);
    let actual = serde_json::to_value(grouped).expect("Cannot serialize grouped events");

    let expected = fs::read_to_string(fixture_path("events_grouped.json"))
        .expect("Cannot read grouped golden");
    let expected: Value = serde_json::from_str(&expected).expect("Golden is not valid JSON");

    assert_eq!(actual, expected);
}

#[test]
fn missing_events_field_is_reported() {
    assert_eq!(
        parse_events_value(&json!({ "items": [] })),
        Err(MilestoneError::MissingData)
    );
    assert_eq!(parse_events_value(&json!({ "events": [] })), Ok(Vec::new()));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        parse_events_str("{\"events\": ["),
        Err(MilestoneError::Parse(_))
    ));
}

#[test]
fn bad_date_names_the_entry() {
    let document = json!({
        "events": [
            { "id": "gpt-4", "name": "GPT-4", "date": "March 2023", "description": "", "category": "model" }
        ]
    });

    assert_eq!(
        parse_events_value(&document),
        Err(MilestoneError::InvalidDate {
            id: "gpt-4".into(),
            value: "March 2023".into()
        })
    );
}

#[test]
fn unknown_category_names_the_entry() {
    let document = json!({
        "events": [
            { "id": "suno", "name": "Suno", "date": "2023-12-20", "description": "", "category": "music" }
        ]
    });

    let err = parse_events_value(&document).expect_err("category must be rejected");
    assert_eq!(
        err,
        MilestoneError::UnknownCategory {
            id: Some("suno".into()),
            value: "music".into()
        }
    );
    assert!(err.to_string().contains("suno"));
}

#[test]
fn missing_field_reports_entry_index() {
    let document = json!({
        "events": [
            { "id": "a", "name": "A", "date": "2023-01-01", "description": "", "category": "art" },
            { "id": "b", "name": "B", "date": "2023-01-01", "category": "art" }
        ]
    });

    match parse_events_value(&document) {
        Err(MilestoneError::Parse(message)) => assert!(message.starts_with("events[1]")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let entry = json!({ "id": "sora", "name": "Sora", "date": "2024-02-15", "description": "", "category": "art" });
    let document = json!({ "events": [entry.clone(), entry] });

    assert_eq!(
        parse_events_value(&document),
        Err(MilestoneError::DuplicateId("sora".into()))
    );
}
