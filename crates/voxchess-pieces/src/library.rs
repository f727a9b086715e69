use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::HashMap;
use voxchess_blocks::MaterialRegistry;

use crate::config::{StyleDocument, safe_file_name, style_path};
use crate::error::{Result, StyleError};
use crate::set::PieceSet;

/// Process-wide table of loaded styles backed by a directory of
/// `<name>.toml` files.
///
/// Styles are keyed by file stem: a name is trimmed, lowercased and
/// sanitized with [`safe_file_name`], so `"Fancy Set"`, `"fancy set"` and
/// `"fancy_set"` all refer to `fancy_set.toml`.
///
/// Styles load on first reference. A style that fails to load leaves
/// nothing behind, and other loaded styles are untouched.
pub struct StyleLibrary {
    dir: PathBuf,
    registry: Arc<MaterialRegistry>,
    sets: RwLock<HashMap<String, Arc<PieceSet>>>,
}

impl StyleLibrary {
    pub fn new(dir: impl Into<PathBuf>, registry: Arc<MaterialRegistry>) -> Self {
        Self {
            dir: dir.into(),
            registry,
            sets: RwLock::new(HashMap::new()),
        }
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[inline]
    pub fn registry(&self) -> &Arc<MaterialRegistry> {
        &self.registry
    }

    fn key(name: &str) -> String {
        safe_file_name(name)
    }

    /// Fetch a style, loading `<dir>/<name>.toml` if it is not held yet.
    pub fn get(&self, name: &str) -> Result<Arc<PieceSet>> {
        let key = Self::key(name);
        if let Some(set) = self
            .sets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(self.load(name, &key)?);
        let mut sets = self.sets.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(sets.entry(key).or_insert(set)))
    }

    fn load(&self, name: &str, key: &str) -> Result<PieceSet> {
        let path = style_path(&self.dir, key);
        let doc = match StyleDocument::from_path(&path) {
            Err(StyleError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                return Err(StyleError::UnknownStyle(name.to_string()));
            }
            other => other?,
        };
        let set = PieceSet::from_document(&doc, Arc::clone(&self.registry))?;
        log::info!("loaded style '{}' from {}", set.name(), path.display());
        Ok(set)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.sets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&Self::key(name))
    }

    /// Keys of loaded styles, sorted. Each one is accepted by `get`.
    pub fn names(&self) -> Vec<String> {
        let sets = self.sets.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = sets.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn all(&self) -> Vec<Arc<PieceSet>> {
        let sets = self.sets.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<(&String, &Arc<PieceSet>)> = sets.iter().collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        all.into_iter().map(|(_, s)| Arc::clone(s)).collect()
    }

    /// Register a set under the key of its own name, replacing any previous
    /// holder.
    pub fn insert(&self, set: PieceSet) -> Arc<PieceSet> {
        let set = Arc::new(set);
        self.sets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Self::key(set.name()), Arc::clone(&set));
        set
    }

    pub fn unload(&self, name: &str) -> Option<Arc<PieceSet>> {
        let removed = self
            .sets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&Self::key(name));
        if removed.is_some() {
            log::info!("unloaded style '{}'", name);
        }
        removed
    }

    /// Drop any held copy and load again from disk. On failure the old
    /// copy stays unloaded.
    pub fn reload(&self, name: &str) -> Result<Arc<PieceSet>> {
        self.unload(name);
        self.get(name)
    }

    pub fn clear(&self) {
        self.sets.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Style names with a readable, valid file in the directory. Files that
    /// fail to parse are logged and skipped.
    pub fn available(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StyleError::Io {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut names = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if Self::key(stem) != stem {
                log::warn!("skipping {}: not a lowercase style file name", path.display());
                continue;
            }
            match StyleDocument::from_path(&path).and_then(|d| d.validate().map(|_| ())) {
                Ok(()) => names.push(stem.to_string()),
                Err(e) => log::warn!("skipping {}: {}", path.display(), e),
            }
        }
        names.sort();
        Ok(names)
    }

    /// Save a loaded style under a new name and register the copy.
    pub fn save_as(&self, name: &str, new_name: &str) -> Result<Arc<PieceSet>> {
        let set = self.get(name)?;
        set.save(&self.dir, new_name)?;
        self.reload(new_name)
    }
}

impl std::fmt::Debug for StyleLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleLibrary")
            .field("dir", &self.dir)
            .field("loaded", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLO: &str = r#"
        name = "solo"
        [materials.white]
        X = "gold_block"
        [materials.black]
        X = "obsidian"
        [pieces]
        K = [["X"]]
    "#;

    fn library_with(files: &[(&str, &str)]) -> (tempfile::TempDir, StyleLibrary) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(format!("{name}.toml")), body).unwrap();
        }
        let lib = StyleLibrary::new(dir.path(), Arc::new(MaterialRegistry::new()));
        (dir, lib)
    }

    #[test]
    fn loads_on_first_reference() {
        let (_dir, lib) = library_with(&[("solo", SOLO)]);
        assert!(!lib.is_loaded("solo"));
        let a = lib.get("solo").unwrap();
        let b = lib.get("SOLO").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(lib.names(), vec!["solo".to_string()]);
    }

    #[test]
    fn missing_file_is_unknown_style() {
        let (_dir, lib) = library_with(&[]);
        assert!(matches!(lib.get("nope"), Err(StyleError::UnknownStyle(n)) if n == "nope"));
        assert!(lib.names().is_empty());
    }

    #[test]
    fn unload_then_get_loads_fresh_copy() {
        let (_dir, lib) = library_with(&[("solo", SOLO)]);
        let a = lib.get("solo").unwrap();
        assert!(lib.unload("solo").is_some());
        assert!(!lib.is_loaded("solo"));
        let b = lib.reload("solo").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        lib.clear();
        assert!(lib.all().is_empty());
    }

    #[test]
    fn first_request_may_use_any_case() {
        let (_dir, lib) = library_with(&[("solo", SOLO)]);
        let a = lib.get("SOLO").unwrap();
        assert!(lib.is_loaded("solo"));
        assert!(Arc::ptr_eq(&a, &lib.get("Solo").unwrap()));
    }

    #[test]
    fn reported_names_round_trip_through_get() {
        let fancy = SOLO.replace("name = \"solo\"", "name = \"Fancy Set\"");
        let (_dir, lib) = library_with(&[("fancy", &fancy)]);
        let set = lib.get("fancy").unwrap();
        assert_eq!(set.name(), "Fancy Set");
        assert_eq!(lib.names(), vec!["fancy".to_string()]);
        for name in lib.names() {
            assert!(lib.is_loaded(&name));
            assert!(Arc::ptr_eq(&set, &lib.get(&name).unwrap()));
        }

        let copy = PieceSet::from_document(&set.to_document(), Arc::clone(lib.registry())).unwrap();
        let other = lib.insert(copy);
        assert!(lib.is_loaded("Fancy Set"));
        assert!(Arc::ptr_eq(&other, &lib.get("fancy_set").unwrap()));
    }

    #[test]
    fn save_as_with_sanitized_name_is_reachable() {
        let (_dir, lib) = library_with(&[("solo", SOLO)]);
        let copy = lib.save_as("solo", "Gold Set").unwrap();
        assert_eq!(copy.name(), "Gold Set");
        assert_eq!(lib.names(), vec!["gold_set".to_string(), "solo".to_string()]);
        assert!(Arc::ptr_eq(&copy, &lib.get("GOLD SET").unwrap()));
        assert_eq!(lib.available().unwrap(), lib.names());
    }

    #[test]
    fn available_skips_broken_files() {
        let (_dir, lib) = library_with(&[("solo", SOLO), ("broken", "name = [")]);
        assert_eq!(lib.available().unwrap(), vec!["solo".to_string()]);
    }
}
