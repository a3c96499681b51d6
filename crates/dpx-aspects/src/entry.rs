//! Entry-level pipeline wiring the aspect transforms and validators together
//! the way the resource lifecycle uses them.

use crate::keys::CONFIG_KEY_FIELD;
use crate::transform::ENTRY_KEY_FIELD;
use crate::validate::{
    validate_aspect_count_with_limit, validate_aspect_project_number,
    validate_project_number_path,
};
use crate::{
    ASPECTS_FIELD, AspectError, AspectKeySet, AspectLimits, Resource, ValidationError, Value,
    collect_aspect_keys, expand_aspects, filter_aspects, flatten_aspects,
};

pub const ENTRY_TYPE_FIELD: &str = "entry_type";
pub const PARENT_ENTRY_FIELD: &str = "parent_entry";

/// Keeps only the response aspects whose keys appear in the configuration.
///
/// Aspects attached out of band stay out of state and never show up as drift.
pub fn retain_configured_aspects(
    config: &Resource,
    response: &mut Resource,
) -> Result<AspectKeySet, AspectError> {
    let mut keep = AspectKeySet::new();
    if let Some(configured) = config.get(ASPECTS_FIELD) {
        collect_aspect_keys(&mut keep, configured)?;
    }
    filter_aspects(&keep, response)?;
    Ok(keep)
}

/// Builds the API request body for a configured entry.
///
/// Configured items carry `aspect_key`; they are checked with the same rules as
/// [`retain_configured_aspects`] and renamed to `aspectKey` before flattening.
pub fn prepare_request(config: &Resource) -> Result<Resource, AspectError> {
    if let Some(configured) = config.get(ASPECTS_FIELD) {
        collect_aspect_keys(&mut AspectKeySet::new(), configured)?;
    }
    let mut body = config.clone();
    rename_item_key(&mut body, CONFIG_KEY_FIELD, ENTRY_KEY_FIELD);
    flatten_aspects(&mut body)?;
    Ok(body)
}

/// Turns an API response into state, keeping only the configured aspects.
///
/// State uses the configured item shape (`aspect_key`), so it can be fed back
/// as configuration.
pub fn reconcile_response(
    config: &Resource,
    mut response: Resource,
) -> Result<Resource, AspectError> {
    let keep = retain_configured_aspects(config, &mut response)?;
    expand_aspects(&mut response)?;
    rename_item_key(&mut response, ENTRY_KEY_FIELD, CONFIG_KEY_FIELD);
    tracing::debug!(retained = keep.len(), "reconciled entry response");
    Ok(response)
}

fn rename_item_key(resource: &mut Resource, from: &str, to: &str) {
    let Some(Value::List(items)) = resource.get_mut(ASPECTS_FIELD) else {
        return;
    };
    for fields in items.iter_mut().filter_map(|item| match item {
        Value::Map(fields) => Some(fields),
        _ => None,
    }) {
        if let Some(key) = fields.remove(from) {
            fields.insert(to.to_owned(), key);
        }
    }
}

/// Runs every field validator that applies to a configured entry.
///
/// Optional fields are only checked when set. Aspect keys are reported under
/// `aspects.<index>.aspect_key`.
pub fn validate_entry(config: &Resource, limits: &AspectLimits) -> Vec<ValidationError> {
    let mut diagnostics = Vec::new();

    if let Some(aspects) = config.get(ASPECTS_FIELD).filter(|v| !v.is_null()) {
        diagnostics.extend(validate_aspect_count_with_limit(
            aspects,
            ASPECTS_FIELD,
            limits.max_aspects,
        ));
        for (index, item) in aspects.as_list().unwrap_or_default().iter().enumerate() {
            let Some(key) = item.as_map().and_then(|fields| fields.get(CONFIG_KEY_FIELD)) else {
                continue;
            };
            let field = format!("{ASPECTS_FIELD}.{index}.{CONFIG_KEY_FIELD}");
            diagnostics.extend(validate_aspect_project_number(key, &field));
        }
    }

    for field in [ENTRY_TYPE_FIELD, PARENT_ENTRY_FIELD] {
        match config.get(field) {
            None | Some(Value::Null) => {}
            Some(value) => diagnostics.extend(validate_project_number_path(value, field)),
        }
    }

    if !diagnostics.is_empty() {
        tracing::warn!(count = diagnostics.len(), "entry failed validation");
    }
    diagnostics
}
