//! On-disk shape of a piece style.
//!
//! ```toml
//! name = "standard"
//! comment = "optional free text"
//!
//! [materials.white]
//! X = "wool:white"
//!
//! [materials.black]
//! X = "wool:black"
//!
//! [pieces]
//! P = [[" X ", "XXX", " X "], ["XXX", "XXX", "XXX"]]
//! ```
//!
//! Every section is optional at the serde level so that a missing one can
//! be reported by name instead of as a generic parse failure.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<MaterialsSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieces: Option<BTreeMap<String, Vec<Vec<String>>>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black: Option<BTreeMap<String, String>>,
}

/// A document whose required sections are all present and non-empty.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedStyle<'a> {
    pub name: &'a str,
    pub comment: Option<&'a str>,
    pub pieces: &'a BTreeMap<String, Vec<Vec<String>>>,
    pub white: &'a BTreeMap<String, String>,
    pub black: &'a BTreeMap<String, String>,
}

impl StyleDocument {
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        fs::write(path, text).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check required sections in order: `name`, `pieces`,
    /// `materials.white`, `materials.black`.
    pub fn validate(&self) -> Result<ValidatedStyle<'_>> {
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or(StyleError::MissingSection("name"))?;
        let pieces = self
            .pieces
            .as_ref()
            .filter(|p| !p.is_empty())
            .ok_or(StyleError::MissingSection("pieces"))?;
        let materials = self.materials.as_ref();
        let white = materials
            .and_then(|m| m.white.as_ref())
            .filter(|m| !m.is_empty())
            .ok_or(StyleError::MissingSection("materials.white"))?;
        let black = materials
            .and_then(|m| m.black.as_ref())
            .filter(|m| !m.is_empty())
            .ok_or(StyleError::MissingSection("materials.black"))?;
        Ok(ValidatedStyle {
            name,
            comment: self.comment.as_deref(),
            pieces,
            white,
            black,
        })
    }
}

/// File stem used for a style name: lowercased ASCII alphanumerics, `-`
/// and `_` are kept, everything else becomes `_`.
pub fn safe_file_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// `<dir>/<safe name>.toml`
pub fn style_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.toml", safe_file_name(name)))
}
