//! Server configuration
//!
//! Loaded from an optional TOML file; a missing file yields the defaults.
//! Command line flags are applied on top by the binary.
//!
//! ```toml
//! log_filter = "todo_mcp=debug"
//! login_delay_ms = 1000
//! seed_tasks = ["GYM", "Coding", "Aptitude"]
//! ```

use crate::todo::DEFAULT_SEED;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LOG_FILTER: &str = "todo_mcp=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Simulated latency before resolving login/signup, in milliseconds
    pub login_delay_ms: u64,

    /// Titles of the tasks every fresh session starts with
    pub seed_tasks: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            login_delay_ms: 0,
            seed_tasks: DEFAULT_SEED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject seed titles that would break the non-empty title rule
    pub fn validate(&self) -> Result<()> {
        if let Some(pos) = self.seed_tasks.iter().position(|t| t.trim().is_empty()) {
            bail!(
                "seed_tasks[{}] is blank. Every seed task needs a non-empty title.",
                pos
            );
        }
        Ok(())
    }
}
