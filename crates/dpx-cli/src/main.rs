mod commands;
mod input;
mod opts;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::reconcile::ReconcileArgs;
use commands::transform::{CollectKeysArgs, FilterArgs, ResourceArgs};
use opts::GlobalOpts;

#[derive(Parser, Debug)]
#[command(name = "dpx", version, about = "Catalog entry aspect transforms")]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a configured aspect list into the API aspect map
    Flatten(ResourceArgs),

    /// Convert an API aspect map into the configured aspect list
    Expand(ResourceArgs),

    /// Keep only the listed aspects of an API resource
    Filter(FilterArgs),

    /// Print the unique aspect_key values of a configured aspect list
    CollectKeys(CollectKeysArgs),

    /// Build the API request body for a configured entry
    Request(ResourceArgs),

    /// Turn an API response into state, keeping only configured aspects
    Reconcile(ReconcileArgs),

    /// Validate a configured entry
    Validate(ResourceArgs),
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();
    let opts = &cli.opts;
    tracing::debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Command::Flatten(args) => commands::transform::cmd_flatten(opts, &args),
        Command::Expand(args) => commands::transform::cmd_expand(opts, &args),
        Command::Filter(args) => commands::transform::cmd_filter(opts, &args),
        Command::CollectKeys(args) => commands::transform::cmd_collect_keys(opts, &args),
        Command::Request(args) => commands::reconcile::cmd_request(opts, &args),
        Command::Reconcile(args) => commands::reconcile::cmd_reconcile(opts, &args),
        Command::Validate(args) => commands::validate::cmd_validate(opts, &args),
    }
}

/// Log to stderr so stdout stays a clean JSON envelope.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();
}
