//! JSON output envelope shared by every command.
//!
//! Responses are wrapped in `{ data, warnings? }` on stdout; `--pretty`
//! indents and `--quiet` drops warnings.

use anyhow::Result;
use serde_json::{Map, Value, json};

use crate::opts::GlobalOpts;

pub fn print_success(opts: &GlobalOpts, data: Value, mut warnings: Vec<String>) -> Result<()> {
    if opts.quiet {
        warnings.clear();
    }
    let mut root = Map::new();
    root.insert("data".into(), data);
    if !warnings.is_empty() {
        root.insert(
            "warnings".into(),
            warnings.into_iter().map(Value::String).collect(),
        );
    }
    print_json(opts, &Value::Object(root))
}

fn print_json(opts: &GlobalOpts, root: &Value) -> Result<()> {
    if opts.pretty {
        println!("{}", serde_json::to_string_pretty(root)?);
    } else {
        println!("{}", serde_json::to_string(root)?);
    }
    Ok(())
}

/// Render a diagnostic list as `[{ field, message }]`.
pub fn diagnostics_json(diagnostics: &[dpx_aspects::ValidationError]) -> Value {
    diagnostics
        .iter()
        .map(|d| json!({ "field": d.field(), "message": d.to_string() }))
        .collect()
}
