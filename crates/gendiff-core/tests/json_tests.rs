//! JSON renderer tests: the `{"diff": [...]}` change log shape.
use gendiff_core::json::render_json;
use gendiff_core::{build_tree, diff, GenericValue, Mapping};
use serde_json::{json, Value};

fn doc(value: Value) -> Mapping {
    match GenericValue::from(value) {
        GenericValue::Mapping(map) => map,
        other => panic!("fixture must be an object, got {other:?}"),
    }
}

fn json_diff(old: Value, new: Value) -> (String, Value) {
    let out = render_json(&diff(&build_tree(&doc(old)), &build_tree(&doc(new))));
    let parsed: Value = serde_json::from_str(&out).expect("renderer must emit valid JSON");
    (out, parsed)
}

#[test]
fn flat_change_log() {
    let (_, parsed) = json_diff(
        json!({"host": "hexlet.io", "timeout": 50, "proxy": "123.234.53.22", "follow": false}),
        json!({"host": "hexlet.io", "timeout": 20, "verbose": true}),
    );
    assert_eq!(
        parsed,
        json!({"diff": [
            {"key": "follow", "type": "removed", "value": false},
            {"key": "host", "type": "unchanged", "value": "hexlet.io"},
            {"key": "proxy", "type": "removed", "value": "123.234.53.22"},
            {"key": "timeout", "type": "updated", "oldValue": 50, "newValue": 20},
            {"key": "verbose", "type": "added", "value": true}
        ]})
    );
}

#[test]
fn output_is_pretty_printed() {
    let (out, _) = json_diff(json!({"timeout": 50}), json!({"timeout": 20}));
    assert!(out.starts_with("{\n  \"diff\": ["));
    assert!(out.contains("\"oldValue\": 50"));
    assert!(out.contains("\"newValue\": 20"));
}

#[test]
fn nested_entries_carry_children() {
    let (_, parsed) = json_diff(
        json!({"common": {"setting3": true}}),
        json!({"common": {"setting3": null}}),
    );
    assert_eq!(
        parsed,
        json!({"diff": [
            {"key": "common", "type": "nested", "children": [
                {"key": "setting3", "type": "updated", "oldValue": true, "newValue": null}
            ]}
        ]})
    );
}

#[test]
fn composite_values_are_native_objects() {
    let (_, parsed) = json_diff(
        json!({}),
        json!({"group3": {"deep": {"id": {"number": 45}}, "fee": 100500}}),
    );
    let value = &parsed["diff"][0]["value"];
    assert!(value.is_object());
    assert_eq!(value, &json!({"deep": {"id": {"number": 45}}, "fee": 100500}));
}

#[test]
fn reconstructed_sequences_are_index_keyed_objects() {
    let (_, parsed) = json_diff(json!({}), json!({"tags": ["a", "b"]}));
    assert_eq!(parsed["diff"][0]["value"], json!({"[0]": "a", "[1]": "b"}));
}

#[test]
fn empty_diff() {
    let (_, parsed) = json_diff(json!({}), json!({}));
    assert_eq!(parsed, json!({"diff": []}));
}
