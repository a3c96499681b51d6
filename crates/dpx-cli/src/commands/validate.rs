use anyhow::{Result, bail};
use dpx_aspects::entry::validate_entry;
use serde_json::json;

use crate::commands::transform::ResourceArgs;
use crate::input::parse_resource;
use crate::opts::GlobalOpts;
use crate::output::{diagnostics_json, print_success};

/// Validate a configured entry; fails when any diagnostic is reported.
pub fn cmd_validate(opts: &GlobalOpts, args: &ResourceArgs) -> Result<()> {
    let config = parse_resource(&args.resource)?;
    let diagnostics = validate_entry(&config, &opts.limits());
    let data = json!({
        "valid": diagnostics.is_empty(),
        "diagnostics": diagnostics_json(&diagnostics),
    });
    print_success(opts, data, Vec::new())?;
    if !diagnostics.is_empty() {
        bail!("entry has {} validation error(s)", diagnostics.len());
    }
    Ok(())
}
