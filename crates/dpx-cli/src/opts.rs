//! Global CLI options.

use clap::Args;
use dpx_aspects::AspectLimits;

/// Options that apply to every command; limits can be set via env vars.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Suppress warnings in the output envelope
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Maximum number of aspects per entry (default: DPX_MAX_ASPECTS, then 99)
    #[arg(long, global = true)]
    pub max_aspects: Option<usize>,
}

impl GlobalOpts {
    pub fn limits(&self) -> AspectLimits {
        match self.max_aspects {
            Some(max_aspects) => AspectLimits { max_aspects },
            None => AspectLimits::from_env(),
        }
    }
}
