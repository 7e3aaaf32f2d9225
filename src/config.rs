//! Optional `readcraft.toml` configuration
//!
//! Loaded from the directory containing the archive (falling back to the
//! current directory). Absent file means defaults; a malformed file is
//! logged and ignored rather than aborting the run.
//!
//! # Configuration Format
//!
//! ```toml
//! # readcraft.toml
//!
//! [extract]
//! min_fragment_len = 3
//! min_words = 2
//! ```

use crate::extract::ExtractOptions;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = "readcraft.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractConfig {
    #[serde(default = "default_min_fragment_len")]
    pub min_fragment_len: usize,
    #[serde(default = "default_min_words")]
    pub min_words: usize,
}

fn default_min_fragment_len() -> usize {
    ExtractOptions::default().min_fragment_len
}

fn default_min_words() -> usize {
    ExtractOptions::default().min_words
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_fragment_len: default_min_fragment_len(),
            min_words: default_min_words(),
        }
    }
}

impl Config {
    /// Load `readcraft.toml` from `dir`, or defaults when missing/invalid.
    pub fn load(dir: &Path) -> Config {
        let path = dir.join(CONFIG_FILENAME);
        let Ok(content) = std::fs::read_to_string(&path) else {
            debug!(path = %path.display(), "no config file, using defaults");
            return Config::default();
        };
        match toml::from_str(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                Config::default()
            }
        }
    }

    /// Load config from the directory next to the archive, or CWD when the
    /// archive path has no parent.
    pub fn load_for_archive(archive_path: &Path) -> Config {
        let dir = archive_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Config::load(dir)
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            min_fragment_len: self.extract.min_fragment_len,
            min_words: self.extract.min_words,
        }
    }
}
