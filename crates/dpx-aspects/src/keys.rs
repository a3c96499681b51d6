use std::collections::BTreeSet;

use crate::{ASPECTS_FIELD, AspectError, AspectOp, Resource, Value};

/// Aspect keys a caller wants preserved when reconciling a partial view.
pub type AspectKeySet = BTreeSet<String>;

/// Key field of an aspect block in the configuration schema.
pub const CONFIG_KEY_FIELD: &str = "aspect_key";

/// Adds every `aspect_key` found in a configured aspect list to `set`.
///
/// `aspects` is the raw schema value: null and the empty list are no-ops. The
/// set is only extended once every item has been checked.
pub fn collect_aspect_keys(set: &mut AspectKeySet, aspects: &Value) -> Result<(), AspectError> {
    let items = match aspects {
        Value::Null => return Ok(()),
        Value::List(items) => items,
        other => {
            return Err(AspectError::TypeMismatch {
                op: AspectOp::CollectKeys,
                field: ASPECTS_FIELD,
                expected: "list",
                found: other.kind(),
            });
        }
    };

    let mut keys = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let fields = item.as_map().ok_or_else(|| AspectError::IndexedTypeMismatch {
            op: AspectOp::CollectKeys,
            subject: "item".into(),
            index,
            expected: "map",
            found: item.kind(),
        })?;
        let raw_key = fields
            .get(CONFIG_KEY_FIELD)
            .ok_or(AspectError::MissingField {
                op: AspectOp::CollectKeys,
                field: CONFIG_KEY_FIELD,
                index,
            })?;
        let key = raw_key
            .as_str()
            .ok_or_else(|| AspectError::IndexedTypeMismatch {
                op: AspectOp::CollectKeys,
                subject: format!("'{CONFIG_KEY_FIELD}' in item"),
                index,
                expected: "string",
                found: raw_key.kind(),
            })?;
        keys.push(key);
    }

    set.extend(keys.into_iter().map(str::to_owned));
    Ok(())
}

/// Drops every API-side aspect whose key is not in `keep`.
///
/// An empty `keep` leaves an empty map behind; the field itself is never removed.
pub fn filter_aspects(keep: &AspectKeySet, resource: &mut Resource) -> Result<(), AspectError> {
    let aspects = match resource.get_mut(ASPECTS_FIELD) {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Map(aspects)) => aspects,
        Some(other) => {
            return Err(AspectError::TypeMismatch {
                op: AspectOp::Filter,
                field: ASPECTS_FIELD,
                expected: "map",
                found: other.kind(),
            });
        }
    };

    let before = aspects.len();
    aspects.retain(|key, _| keep.contains(key));
    tracing::debug!(
        kept = aspects.len(),
        dropped = before - aspects.len(),
        "filtered aspects"
    );
    Ok(())
}
