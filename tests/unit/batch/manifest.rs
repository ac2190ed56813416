use super::*;
use serde_json::json;

fn validation_message(v: Value) -> String {
    match Manifest::from_value(v) {
        Err(ThumbnailError::Validation(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn parses_entries_in_order_and_strips_image() {
    let m = Manifest::from_value(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": [
            { "image": "b.png", "title_text": "Hi", "has_image": true },
            { "image": "a.png" }
        ]
    }))
    .unwrap();

    assert_eq!(m.entries.len(), 2);
    assert_eq!(m.entries[0].image, "b.png");
    assert_eq!(m.entries[0].options.len(), 2);
    assert!(!m.entries[0].options.contains_key("image"));
    assert_eq!(m.entries[1].image, "a.png");
    assert!(m.entries[1].options.is_empty());
    assert_eq!(m.input_file(&m.entries[0]), "in/b.png");
    assert_eq!(m.output_file(&m.entries[1]), "out/a.png");
}

#[test]
fn empty_entries_are_allowed() {
    let m = Manifest::from_value(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": []
    }))
    .unwrap();
    assert!(m.entries.is_empty());
}

#[test]
fn missing_top_level_fields_are_validation_errors() {
    let msg = validation_message(json!({ "input_directory": "in", "entries": [] }));
    assert!(msg.contains("missing required field: output_directory"));

    let msg = validation_message(json!({ "output_directory": "out" }));
    assert!(msg.contains("missing required field: input_directory"));
    assert!(msg.contains("missing required field: entries"));
}

#[test]
fn entry_without_image_is_scoped_to_that_entry() {
    let msg = validation_message(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": [ { "image": "a.png" }, { "title_text": "x" } ]
    }));
    assert!(msg.contains("$.entries[1]: missing required field: image"));
    assert!(!msg.contains("entries[0]"));
}

#[test]
fn wrong_types_are_reported() {
    let msg = validation_message(json!({
        "input_directory": 3,
        "output_directory": "out",
        "entries": [ 1, { "image": false } ]
    }));
    assert!(msg.contains("$.input_directory: must be a string"));
    assert!(msg.contains("$.entries[0]: entry must be a JSON object"));
    assert!(msg.contains("$.entries[1].image: must be a string"));

    let msg = validation_message(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": {}
    }));
    assert!(msg.contains("$.entries: must be an array"));

    assert!(validation_message(json!([])).contains("must be a JSON object"));
}

#[test]
fn unparsable_json_is_a_validation_error() {
    let r = Manifest::from_reader("{ not json".as_bytes());
    assert!(matches!(r, Err(ThumbnailError::Validation(_))));
}

#[test]
fn absolute_image_replaces_directory() {
    let m = Manifest::from_value(json!({
        "input_directory": "in",
        "output_directory": "out",
        "entries": [ { "image": "/abs/a.png" } ]
    }))
    .unwrap();
    assert_eq!(m.input_file(&m.entries[0]), "/abs/a.png");
}
