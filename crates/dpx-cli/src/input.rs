//! Input parsing utilities for @file and @- syntax.

use std::io::Read;

use anyhow::{Context, Result, bail};
use dpx_aspects::{Resource, Value};

/// Read an argument that may be a JSON literal, @file, or @- for stdin.
///
/// - `@-` reads from stdin
/// - `@path` reads from the specified file
/// - Otherwise, returns the value as-is (assumed to be JSON literal)
pub fn parse_input_value(value: &str) -> Result<String> {
    if value == "@-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read from stdin")?;
        Ok(buf)
    } else if let Some(path) = value.strip_prefix('@') {
        std::fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path))
    } else {
        Ok(value.to_string())
    }
}

/// Parse any JSON document argument into a [`Value`].
pub fn parse_value(arg: &str) -> Result<Value> {
    let text = parse_input_value(arg)?;
    let json: serde_json::Value =
        serde_json::from_str(&text).context("input is not valid JSON")?;
    Ok(Value::from(json))
}

/// Parse a JSON object argument into a resource.
pub fn parse_resource(arg: &str) -> Result<Resource> {
    match parse_value(arg)? {
        Value::Map(fields) => Ok(fields),
        other => bail!("expected a JSON object resource, got {}", other.kind()),
    }
}
