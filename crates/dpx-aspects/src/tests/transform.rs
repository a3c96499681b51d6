use serde_json::json;

use super::{aspects_json, resource};
use crate::{AspectEntry, AspectError, AspectOp, Value, expand_aspects, flatten_aspects};

#[test]
fn expand_is_noop_without_aspects() {
    let mut res = resource(json!({ "otherKey": "value" }));
    expand_aspects(&mut res).unwrap();
    assert_eq!(aspects_json(&res), None);

    let mut res = resource(json!({ "aspects": null }));
    expand_aspects(&mut res).unwrap();
    assert_eq!(aspects_json(&res), Some(json!(null)));
}

#[test]
fn expand_empty_map_to_empty_list() {
    let mut res = resource(json!({ "aspects": {} }));
    expand_aspects(&mut res).unwrap();
    assert_eq!(aspects_json(&res), Some(json!([])));
}

#[test]
fn expand_emits_entries_in_key_order() {
    let mut res = resource(json!({
        "name": "entry",
        "aspects": {
            "key2": { "data": "value2" },
            "key1": { "data": "value1" }
        }
    }));
    expand_aspects(&mut res).unwrap();
    assert_eq!(
        aspects_json(&res),
        Some(json!([
            { "aspectKey": "key1", "aspect": { "data": "value1" } },
            { "aspectKey": "key2", "aspect": { "data": "value2" } }
        ]))
    );
    assert_eq!(res.get("name"), Some(&Value::from("entry")));
}

#[test]
fn expand_rejects_wrong_type_without_mutation() {
    let mut res = resource(json!({ "aspects": "not a map" }));
    let before = res.clone();
    let err = expand_aspects(&mut res).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expand_aspects: 'aspects' is not a map, got string"
    );
    assert_eq!(res, before);
}

#[test]
fn expand_rejects_non_map_value_without_mutation() {
    let mut res = resource(json!({
        "aspects": { "a": { "data": 1 }, "key1": "not a map value" }
    }));
    let before = res.clone();
    let err = expand_aspects(&mut res).unwrap_err();
    assert_eq!(
        err,
        AspectError::KeyedTypeMismatch {
            op: AspectOp::Expand,
            key: "key1".into(),
            expected: "map",
            found: "string",
        }
    );
    assert_eq!(
        err.to_string(),
        "expand_aspects: value for key 'key1' is not a map, got string"
    );
    assert_eq!(res, before);
}

#[test]
fn flatten_is_noop_without_aspects() {
    let mut res = resource(json!({ "otherKey": "value" }));
    flatten_aspects(&mut res).unwrap();
    assert_eq!(aspects_json(&res), None);

    let mut res = resource(json!({ "aspects": null }));
    flatten_aspects(&mut res).unwrap();
    assert_eq!(aspects_json(&res), Some(json!(null)));
}

#[test]
fn flatten_empty_list_to_empty_map() {
    let mut res = resource(json!({ "aspects": [] }));
    flatten_aspects(&mut res).unwrap();
    assert_eq!(aspects_json(&res), Some(json!({})));
}

#[test]
fn flatten_builds_keyed_map() {
    let mut res = resource(json!({
        "aspects": [
            { "aspectKey": "key1", "aspect": { "data": "value1" } },
            { "aspectKey": "key2", "aspect": { "data": "value2" } }
        ]
    }));
    flatten_aspects(&mut res).unwrap();
    assert_eq!(
        aspects_json(&res),
        Some(json!({
            "key1": { "data": "value1" },
            "key2": { "data": "value2" }
        }))
    );
}

#[test]
fn flatten_last_duplicate_wins() {
    let mut res = resource(json!({
        "aspects": [
            { "aspectKey": "key1", "aspect": { "data": "value_first" } },
            { "aspectKey": "key2", "aspect": { "data": "value2" } },
            { "aspectKey": "key1", "aspect": { "data": "value_last" } }
        ]
    }));
    flatten_aspects(&mut res).unwrap();
    assert_eq!(
        aspects_json(&res),
        Some(json!({
            "key1": { "data": "value_last" },
            "key2": { "data": "value2" }
        }))
    );
}

#[test]
fn flatten_defaults_missing_or_malformed_aspect() {
    let mut res = resource(json!({ "aspects": [{ "aspectKey": "key1" }] }));
    flatten_aspects(&mut res).unwrap();
    assert_eq!(aspects_json(&res), Some(json!({ "key1": { "data": {} } })));

    let mut res = resource(json!({
        "aspects": [{ "aspectKey": "key1", "aspect": "not a map" }]
    }));
    flatten_aspects(&mut res).unwrap();
    assert_eq!(aspects_json(&res), Some(json!({ "key1": { "data": {} } })));
}

#[test]
fn flatten_error_cases_leave_resource_untouched() {
    let cases = [
        (
            json!({ "aspects": "not a slice" }),
            "flatten_aspects: 'aspects' is not a list, got string",
        ),
        (
            json!({ "aspects": ["not a map"] }),
            "flatten_aspects: item in 'aspects' list at index 0 is not a map, got string",
        ),
        (
            json!({ "aspects": [{ "wrongKey": "k1", "aspect": {} }] }),
            "flatten_aspects: 'aspectKey' not found in aspect item at index 0",
        ),
        (
            json!({ "aspects": [{ "aspectKey": 123, "aspect": {} }] }),
            "flatten_aspects: 'aspectKey' in item at index 0 is not a string, got int",
        ),
        (
            json!({ "aspects": [
                { "aspectKey": "ok", "aspect": { "data": 1 } },
                { "aspect": {} }
            ] }),
            "flatten_aspects: 'aspectKey' not found in aspect item at index 1",
        ),
    ];
    for (doc, message) in cases {
        let mut res = resource(doc);
        let before = res.clone();
        let err = flatten_aspects(&mut res).unwrap_err();
        assert_eq!(err.to_string(), message);
        assert_eq!(res, before, "resource mutated for case: {message}");
    }
}

#[test]
fn map_round_trips_through_list_form() {
    let original = json!({
        "aspects": {
            "1.us-central1.schema": { "data": { "type": "VIEW" } },
            "1.us-central1.story": { "data": { "story": "SEQUENCE" }, "path": "" },
            "2.global.overview": { "data": {} }
        }
    });
    let mut res = resource(original.clone());
    expand_aspects(&mut res).unwrap();
    flatten_aspects(&mut res).unwrap();
    assert_eq!(res, resource(original));
}

#[test]
fn unique_list_round_trips_through_map_form() {
    let list = json!([
        { "aspectKey": "b", "aspect": { "data": { "n": 2 } } },
        { "aspectKey": "a", "aspect": { "data": { "n": 1 } } }
    ]);
    let mut res = resource(json!({ "aspects": list }));
    flatten_aspects(&mut res).unwrap();
    expand_aspects(&mut res).unwrap();

    let mut expected: Vec<AspectEntry> = serde_json::from_value(list).unwrap();
    expected.sort_by(|a, b| a.aspect_key.cmp(&b.aspect_key));
    let actual: Vec<AspectEntry> = serde_json::from_value(aspects_json(&res).unwrap()).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn aspect_entry_defaults_missing_aspect_on_decode() {
    let entry: AspectEntry = serde_json::from_value(json!({ "aspectKey": "k" })).unwrap();
    assert_eq!(entry.aspect, Value::from(json!({ "data": {} })));
}
