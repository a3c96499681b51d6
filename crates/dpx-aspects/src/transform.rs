//! Conversions between the API's keyed aspect map and the configuration's
//! ordered list of `{aspectKey, aspect}` records.

use serde::{Deserialize, Serialize};

use crate::{ASPECTS_FIELD, AspectError, AspectOp, Resource, Value, ValueMap};

pub const ENTRY_KEY_FIELD: &str = "aspectKey";
pub const ENTRY_VALUE_FIELD: &str = "aspect";
/// Payload field of an aspect; filled with an empty map when the aspect is missing.
pub const ASPECT_DATA_FIELD: &str = "data";

/// One item of the configuration-side aspect list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectEntry {
    pub aspect_key: String,
    #[serde(default = "empty_aspect")]
    pub aspect: Value,
}

impl AspectEntry {
    pub fn new(aspect_key: impl Into<String>, aspect: Value) -> Self {
        Self {
            aspect_key: aspect_key.into(),
            aspect,
        }
    }
}

impl From<AspectEntry> for Value {
    fn from(entry: AspectEntry) -> Self {
        Value::map([
            (ENTRY_KEY_FIELD, Value::Text(entry.aspect_key)),
            (ENTRY_VALUE_FIELD, entry.aspect),
        ])
    }
}

/// Aspect body used when a configured entry carries no usable `aspect`.
pub fn empty_aspect() -> Value {
    Value::map([(ASPECT_DATA_FIELD, Value::Map(ValueMap::new()))])
}

/// Rewrites an API aspect map into the configuration's entry list (API -> state).
///
/// Entries come out in key order. Every map value must itself be a map;
/// otherwise the resource is left untouched.
pub fn expand_aspects(resource: &mut Resource) -> Result<(), AspectError> {
    let aspects = match resource.get(ASPECTS_FIELD) {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Map(aspects)) => aspects,
        Some(other) => {
            return Err(AspectError::TypeMismatch {
                op: AspectOp::Expand,
                field: ASPECTS_FIELD,
                expected: "map",
                found: other.kind(),
            });
        }
    };

    let mut entries = Vec::with_capacity(aspects.len());
    for (key, aspect) in aspects {
        if !matches!(aspect, Value::Map(_)) {
            return Err(AspectError::KeyedTypeMismatch {
                op: AspectOp::Expand,
                key: key.clone(),
                expected: "map",
                found: aspect.kind(),
            });
        }
        entries.push(Value::from(AspectEntry::new(key.clone(), aspect.clone())));
    }

    tracing::debug!(count = entries.len(), "expanded aspects");
    resource.insert(ASPECTS_FIELD.into(), Value::List(entries));
    Ok(())
}

/// Rewrites the configuration's entry list into the API aspect map (config -> API).
///
/// A later entry overwrites an earlier one with the same key. Only `aspectKey`
/// is enforced; a missing or non-map `aspect` becomes [`empty_aspect`].
pub fn flatten_aspects(resource: &mut Resource) -> Result<(), AspectError> {
    let items = match resource.get(ASPECTS_FIELD) {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::List(items)) => items,
        Some(other) => {
            return Err(AspectError::TypeMismatch {
                op: AspectOp::Flatten,
                field: ASPECTS_FIELD,
                expected: "list",
                found: other.kind(),
            });
        }
    };

    let mut aspects = ValueMap::new();
    for (index, item) in items.iter().enumerate() {
        let fields = item.as_map().ok_or_else(|| AspectError::IndexedTypeMismatch {
            op: AspectOp::Flatten,
            subject: format!("item in '{ASPECTS_FIELD}' list"),
            index,
            expected: "map",
            found: item.kind(),
        })?;
        let raw_key = fields.get(ENTRY_KEY_FIELD).ok_or(AspectError::MissingField {
            op: AspectOp::Flatten,
            field: ENTRY_KEY_FIELD,
            index,
        })?;
        let key = raw_key
            .as_str()
            .ok_or_else(|| AspectError::IndexedTypeMismatch {
                op: AspectOp::Flatten,
                subject: format!("'{ENTRY_KEY_FIELD}' in item"),
                index,
                expected: "string",
                found: raw_key.kind(),
            })?;
        let aspect = match fields.get(ENTRY_VALUE_FIELD) {
            Some(aspect @ Value::Map(_)) => aspect.clone(),
            _ => empty_aspect(),
        };
        if aspects.insert(key.to_owned(), aspect).is_some() {
            tracing::debug!(key, index, "duplicate aspect key, later entry wins");
        }
    }

    tracing::debug!(count = aspects.len(), "flattened aspects");
    resource.insert(ASPECTS_FIELD.into(), Value::Map(aspects));
    Ok(())
}
