//! Report settings: how wide the failure separators are and which format to print.
//!
//! Settings come from a `docgate.toml` in the working directory (or the file passed with
//! `--config`); anything missing keeps its default, and command-line flags win over both.

use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "docgate.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from `docgate.toml` or falling back to defaults.
pub struct Config {
    #[facet(default = 80)]
    /// Number of dashes printed between failure blocks.
    pub separator_width: usize,
    #[facet(default = "text".to_string())]
    /// Report format when `--format` is not given: `text` or `json`.
    pub output_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator_width: 80,
            output_format: "text".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `docgate.toml` in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is absent or unusable.
    ///
    /// A file that exists but cannot be read or parsed is reported with a warning rather than
    /// failing the run.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config");
                return Self::default();
            }
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
