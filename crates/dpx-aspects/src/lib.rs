//! Catalog entry aspect model: map/list transforms, key filtering and field validators.

mod config;
pub mod entry;
mod error;
mod keys;
mod transform;
pub mod validate;
mod value;

pub use config::{AspectLimits, MAX_ASPECTS};
pub use error::{AspectError, AspectOp};
pub use keys::{AspectKeySet, collect_aspect_keys, filter_aspects};
pub use transform::{AspectEntry, expand_aspects, flatten_aspects};
pub use validate::ValidationError;
pub use value::{Resource, Value, ValueMap};

/// Field holding the aspect collection on both the API and configuration side.
pub const ASPECTS_FIELD: &str = "aspects";

#[cfg(test)]
mod tests;
