use serde_json::Value as Json;

use crate::{ASPECTS_FIELD, Resource, Value};

pub mod transform;

/// Builds a resource from a JSON object literal.
pub(crate) fn resource(doc: Json) -> Resource {
    match Value::from(doc) {
        Value::Map(fields) => fields,
        other => panic!("resource fixture must be a JSON object, got {}", other.kind()),
    }
}

/// Current `aspects` field as JSON; `None` when the field is absent.
pub(crate) fn aspects_json(resource: &Resource) -> Option<Json> {
    resource.get(ASPECTS_FIELD).cloned().map(Json::from)
}
