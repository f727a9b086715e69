use std::error::Error;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "voxchess.toml";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_style_dir")]
    pub style_dir: PathBuf,
    #[serde(default = "default_style")]
    pub default_style: String,
}

fn default_style_dir() -> PathBuf {
    PathBuf::from("assets/styles")
}

fn default_style() -> String {
    "standard".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style_dir: default_style_dir(),
            default_style: default_style(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// An explicit path must exist. Without one, `voxchess.toml` in the
    /// working directory is used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    log::debug!("no {}, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                p
            }
        };
        let s = std::fs::read_to_string(&path)
            .map_err(|e| format!("read error: {}: {}", path.display(), e))?;
        let cfg = Self::from_toml_str(&s)
            .map_err(|e| format!("parse error: {}: {}", path.display(), e))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let cfg = AppConfig::from_toml_str("style_dir = \"/srv/styles\"").unwrap();
        assert_eq!(cfg.style_dir, PathBuf::from("/srv/styles"));
        assert_eq!(cfg.default_style, "standard");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
