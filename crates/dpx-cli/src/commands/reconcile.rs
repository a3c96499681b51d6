//! Request/response commands that mirror the entry lifecycle.

use anyhow::{Context, Result};
use clap::Args;
use dpx_aspects::entry::{prepare_request, reconcile_response};

use crate::commands::transform::{ResourceArgs, print_resource};
use crate::input::parse_resource;
use crate::opts::GlobalOpts;

#[derive(Args, Debug)]
pub struct ReconcileArgs {
    /// Configured entry JSON (literal, @file, or @- for stdin)
    #[arg(long)]
    pub config: String,

    /// API response JSON (literal, @file, or @- for stdin)
    #[arg(long)]
    pub response: String,
}

pub fn cmd_request(opts: &GlobalOpts, args: &ResourceArgs) -> Result<()> {
    let config = parse_resource(&args.resource)?;
    let body = prepare_request(&config).context("prepare request body")?;
    print_resource(opts, body, Vec::new())
}

pub fn cmd_reconcile(opts: &GlobalOpts, args: &ReconcileArgs) -> Result<()> {
    let config = parse_resource(&args.config).context("read configured entry")?;
    let response = parse_resource(&args.response).context("read API response")?;
    let state = reconcile_response(&config, response).context("reconcile response")?;
    print_resource(opts, state, Vec::new())
}
