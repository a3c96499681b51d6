/// Upper bound the API accepts for aspects attached to a single entry.
pub const MAX_ASPECTS: usize = 99;

/// Environment variable overriding [`AspectLimits::max_aspects`].
pub const MAX_ASPECTS_ENV: &str = "DPX_MAX_ASPECTS";

/// Limits applied during the entry validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectLimits {
    pub max_aspects: usize,
}

impl Default for AspectLimits {
    fn default() -> Self {
        Self {
            max_aspects: MAX_ASPECTS,
        }
    }
}

impl AspectLimits {
    /// Build limits from the environment; malformed values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_ASPECTS_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match raw.trim().parse::<usize>() {
            Ok(max_aspects) => Self { max_aspects },
            Err(err) => {
                tracing::warn!("ignoring {MAX_ASPECTS_ENV}={raw:?}: {err}");
                Self::default()
            }
        }
    }
}
