//! Single-transform commands over one resource document.

use anyhow::{Context, Result};
use clap::Args;
use dpx_aspects::{
    ASPECTS_FIELD, AspectKeySet, Resource, Value, collect_aspect_keys, expand_aspects,
    filter_aspects, flatten_aspects,
};

use crate::input::{parse_resource, parse_value};
use crate::opts::GlobalOpts;
use crate::output::print_success;

#[derive(Args, Debug)]
pub struct ResourceArgs {
    /// Resource JSON (literal, @file, or @- for stdin)
    pub resource: String,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// API resource JSON (literal, @file, or @- for stdin)
    pub resource: String,

    /// Aspect key to keep (repeatable)
    #[arg(long = "keep", value_name = "KEY")]
    pub keep: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CollectKeysArgs {
    /// Configured aspect list JSON (literal, @file, or @- for stdin)
    pub aspects: String,
}

pub fn cmd_flatten(opts: &GlobalOpts, args: &ResourceArgs) -> Result<()> {
    let mut resource = parse_resource(&args.resource)?;
    let warnings = missing_aspects_warning(&resource);
    flatten_aspects(&mut resource).context("flatten aspects")?;
    print_resource(opts, resource, warnings)
}

pub fn cmd_expand(opts: &GlobalOpts, args: &ResourceArgs) -> Result<()> {
    let mut resource = parse_resource(&args.resource)?;
    let warnings = missing_aspects_warning(&resource);
    expand_aspects(&mut resource).context("expand aspects")?;
    print_resource(opts, resource, warnings)
}

pub fn cmd_filter(opts: &GlobalOpts, args: &FilterArgs) -> Result<()> {
    let mut resource = parse_resource(&args.resource)?;
    let keep: AspectKeySet = args.keep.iter().cloned().collect();
    filter_aspects(&keep, &mut resource).context("filter aspects")?;
    let mut warnings = Vec::new();
    if keep.is_empty() {
        warnings.push("no --keep keys given; every aspect was dropped".to_string());
    }
    print_resource(opts, resource, warnings)
}

pub fn cmd_collect_keys(opts: &GlobalOpts, args: &CollectKeysArgs) -> Result<()> {
    let aspects = parse_value(&args.aspects)?;
    let mut keys = AspectKeySet::new();
    collect_aspect_keys(&mut keys, &aspects).context("collect aspect keys")?;
    let data = keys.into_iter().map(serde_json::Value::String).collect();
    print_success(opts, data, Vec::new())
}

pub(crate) fn print_resource(
    opts: &GlobalOpts,
    resource: Resource,
    warnings: Vec<String>,
) -> Result<()> {
    print_success(opts, Value::Map(resource).into(), warnings)
}

fn missing_aspects_warning(resource: &Resource) -> Vec<String> {
    if resource.get(ASPECTS_FIELD).is_none_or(Value::is_null) {
        vec![format!("resource has no '{ASPECTS_FIELD}' field; left unchanged")]
    } else {
        Vec::new()
    }
}
