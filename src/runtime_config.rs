//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the matching policy.
//!
//! ## Environment Variables
//!
//! ### `ROUTESET_MATCH_POLICY`
//!
//! Selects the matching strategy:
//! - `linear` - always scan per-route patterns in table order
//! - `combined` - always run the single combined alternation
//! - `auto` - combined at or above the threshold route count (default)
//!
//! Unrecognized values fall back to `auto`.
//!
//! ### `ROUTESET_COMBINED_THRESHOLD`
//!
//! Route count at which `auto` switches to the combined pattern. Decimal,
//! default 16. Malformed values fall back to the default.
//!
//! ## Usage
//!
//! ```rust
//! use routeset::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Match policy: {:?}", config.match_policy);
//! ```
//!
//! ## Example Configuration
//!
//! ```bash
//! # Force the combined pattern regardless of table size
//! export ROUTESET_MATCH_POLICY=combined
//!
//! # Or raise the automatic crossover to 64 routes
//! export ROUTESET_MATCH_POLICY=auto
//! export ROUTESET_COMBINED_THRESHOLD=64
//! ```

use std::env;

use crate::router::{MatchPolicy, DEFAULT_COMBINED_THRESHOLD};

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`] and pass the
/// policy to `Router::with_policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Strategy selection policy (default: auto with threshold 16)
    pub match_policy: MatchPolicy,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let threshold = env::var("ROUTESET_COMBINED_THRESHOLD")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(DEFAULT_COMBINED_THRESHOLD);
        let match_policy = match env::var("ROUTESET_MATCH_POLICY") {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
                "linear" => MatchPolicy::Linear,
                "combined" => MatchPolicy::Combined,
                _ => MatchPolicy::Auto { threshold },
            },
            Err(_) => MatchPolicy::Auto { threshold },
        };
        RuntimeConfig { match_policy }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            match_policy: MatchPolicy::default(),
        }
    }
}
