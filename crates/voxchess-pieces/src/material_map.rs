use std::collections::BTreeMap;
use std::sync::Arc;

use voxchess_blocks::{MaterialRegistry, MaterialValue};

use crate::error::{Result, StyleError};

/// Symbol-to-material table for one colour of a style.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialMap {
    entries: BTreeMap<char, Arc<MaterialValue>>,
}

impl MaterialMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `symbol = "spec"` pairs as they appear in a style file.
    /// Keys must be exactly one character.
    pub fn from_specs<'a, I>(registry: &MaterialRegistry, specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::new();
        for (key, spec) in specs {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(StyleError::InvalidSymbol(key.to_string())),
            };
            map.insert(symbol, registry.get(spec)?);
        }
        Ok(map)
    }

    pub fn insert(&mut self, symbol: char, material: Arc<MaterialValue>) {
        self.entries.insert(symbol, material);
    }

    #[inline]
    pub fn get(&self, symbol: char) -> Option<&Arc<MaterialValue>> {
        self.entries.get(&symbol)
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.entries.contains_key(&symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Arc<MaterialValue>)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `symbol -> spec string` pairs that parse back to this map.
    pub fn to_specs(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_spec_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_specs_and_back() {
        let reg = MaterialRegistry::new();
        let map =
            MaterialMap::from_specs(&reg, [("X", "wool:white"), ("s", "wood_stairs:2")]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get('X').unwrap().to_string(), "wool:white");
        let specs = map.to_specs();
        assert_eq!(specs["s"], "wood_stairs:2");
        let again = MaterialMap::from_specs(
            &reg,
            specs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
        .unwrap();
        assert_eq!(again, map);
    }

    #[test]
    fn multi_char_keys_are_rejected() {
        let reg = MaterialRegistry::new();
        let err = MaterialMap::from_specs(&reg, [("XY", "stone")]).unwrap_err();
        assert!(matches!(err, StyleError::InvalidSymbol(k) if k == "XY"));
        assert!(MaterialMap::from_specs(&reg, [("", "stone")]).is_err());
    }

    #[test]
    fn bad_spec_surfaces_material_error() {
        let reg = MaterialRegistry::new();
        let err = MaterialMap::from_specs(&reg, [("X", "wool:mauve")]).unwrap_err();
        assert!(matches!(err, StyleError::Material(_)));
    }
}
