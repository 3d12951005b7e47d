//! Runtime configuration.
//!
//! | Source | Example | Notes |
//! |--------|---------|-------|
//! | defaults | `storage_path = "./data"` | always applied first |
//! | TOML file | `config/jacc.toml` | path from `JACC_CONFIG` (extension optional) |
//! | env | `JACC__STORAGE_PATH=/tmp/jacc` | prefix `JACC`, separator `__` |

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::JaccResult;

const DEFAULT_CONFIG_PATH: &str = "config/jacc";
const STORE_DIR: &str = "jacc_store";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JaccConfig {
    /// Root directory for the Sled store.
    pub storage_path: String,
    /// Start from the bundled assignment list when nothing is stored yet.
    #[serde(default = "default_true")]
    pub seed_assignments: bool,
}

fn default_true() -> bool {
    true
}

impl Default for JaccConfig {
    fn default() -> Self {
        Self {
            storage_path: "./data".to_string(),
            seed_assignments: true,
        }
    }
}

impl JaccConfig {
    /// Load config from file and environment. Precedence: env > file > defaults.
    pub fn load() -> JaccResult<Self> {
        let config_path = std::env::var("JACC_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    pub fn load_from(path: &Path) -> JaccResult<Self> {
        let builder = config::Config::builder()
            .set_default("storage_path", "./data")?
            .set_default("seed_assignments", true)?
            .add_source(config::File::from(path).required(false));

        let built = builder
            .add_source(config::Environment::with_prefix("JACC").separator("__"))
            .build()?;

        Ok(built.try_deserialize()?)
    }

    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_path).join(STORE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("jacc.toml");
        std::fs::write(&file, "storage_path = \"/srv/jacc\"\nseed_assignments = false\n").unwrap();
        let cfg = JaccConfig::load_from(&file).unwrap();
        assert_eq!(cfg.storage_path, "/srv/jacc");
        assert!(!cfg.seed_assignments);
        assert_eq!(cfg.store_path(), PathBuf::from("/srv/jacc").join("jacc_store"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = JaccConfig::load_from(&dir.path().join("absent")).unwrap();
        assert!(cfg.seed_assignments);
    }
}
