use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::Result;
use crate::names;
use crate::rotation::RotationFamily;
use crate::spec::{self, MaterialSpec, TEXT_LINES};
use crate::world::{BlockPos, BlockSink, Cuboid};

/// A block type, its data value, and optional attached text.
///
/// Values are interned by [`MaterialRegistry`] and never mutated. Equality
/// and hashing consider only the type id and data value: two signs with
/// different text are the same material.
#[derive(Clone, Debug)]
pub struct MaterialValue {
    type_id: u16,
    data: u8,
    text: Option<[String; TEXT_LINES]>,
}

impl MaterialValue {
    fn from_spec(spec: MaterialSpec) -> Self {
        Self {
            type_id: spec.type_id,
            data: spec.data,
            text: spec.text,
        }
    }

    #[inline]
    pub fn type_id(&self) -> u16 {
        self.type_id
    }

    #[inline]
    pub fn data(&self) -> u8 {
        self.data
    }

    #[inline]
    pub fn text(&self) -> Option<&[String; TEXT_LINES]> {
        self.text.as_ref()
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.type_id == names::AIR
    }

    #[inline]
    pub fn is_sign(&self) -> bool {
        matches!(self.type_id, names::SIGN_POST | names::WALL_SIGN)
    }

    #[inline]
    pub fn family(&self) -> RotationFamily {
        RotationFamily::of(self.type_id)
    }

    /// Spec string that parses back to this exact value, text included.
    pub fn to_spec_string(&self) -> String {
        match &self.text {
            Some(lines) => format!("{}={}", self, lines.join(";")),
            None => self.to_string(),
        }
    }

    /// This material turned about the vertical axis. Only 90, 180 and 270
    /// change anything; other values hand back an equal material. The
    /// result is interned through `registry`.
    pub fn rotate(&self, registry: &MaterialRegistry, degrees: i32) -> Result<Arc<MaterialValue>> {
        let family = self.family();
        let data = match degrees {
            90 => family.rotate90(self.data),
            180 => family.rotate90(family.rotate90(self.data)),
            270 => family.rotate90_reverse(self.data),
            _ => self.data,
        };
        registry.get_with_text(self.type_id, data, self.text.as_ref())
    }

    /// Write this material at `pos`, followed by its text when it is a sign.
    pub fn apply_to<S: BlockSink + ?Sized>(self: &Arc<Self>, sink: &mut S, pos: BlockPos) {
        sink.set_material(pos, self);
        if !self.is_sign() {
            return;
        }
        if let Some(lines) = &self.text {
            sink.set_sign_text(pos, lines);
        }
    }

    /// Fill every position of `cuboid`. Lighting and client updates are the
    /// sink's business.
    pub fn apply_to_cuboid<S: BlockSink + ?Sized>(self: &Arc<Self>, sink: &mut S, cuboid: &Cuboid) {
        for pos in cuboid.positions() {
            sink.set_material(pos, self);
        }
    }
}

impl PartialEq for MaterialValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.data == other.data
    }
}

impl Eq for MaterialValue {}

impl Hash for MaterialValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.data.hash(state);
    }
}

impl fmt::Display for MaterialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match names::standard_name(self.type_id) {
            Some(name) => write!(f, "{}", name)?,
            None => write!(f, "{}", self.type_id)?,
        }
        match (self.type_id, names::dye_name(self.data)) {
            (names::WOOL, Some(colour)) => write!(f, ":{}", colour),
            _ => write!(f, ":{}", self.data),
        }
    }
}

/// Flyweight cache of materials.
///
/// Each value is stored once under its numeric `id:data[=text]` form, and
/// every spec string that resolved to it is kept as an alias, so `"wool:red"`,
/// `"35:14"` and `"WOOL:RED"` all hand out the same instance. Entries are
/// only ever added between clears; when two callers race on the same key
/// the first insert wins and both receive that instance.
#[derive(Default)]
pub struct MaterialRegistry {
    inner: RwLock<Interned>,
}

#[derive(Default)]
struct Interned {
    // numeric form -> value
    values: HashMap<String, Arc<MaterialValue>>,
    // normalized request string -> value
    aliases: HashMap<String, Arc<MaterialValue>>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interned material for a spec string such as `"wool:red"`,
    /// `"53:2"` or `"sign=Hello;World"`.
    pub fn get(&self, spec: &str) -> Result<Arc<MaterialValue>> {
        let key = spec::cache_key(spec);
        if let Some(found) = self.lookup(&key) {
            return Ok(found);
        }
        let parsed = MaterialSpec::parse(&key)?;
        let canonical = MaterialSpec::compose(parsed.type_id, parsed.data, parsed.text.as_ref());

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let shared = match inner.values.entry(canonical) {
            Entry::Occupied(e) => Arc::clone(e.get()),
            Entry::Vacant(e) => {
                let value = MaterialValue::from_spec(parsed);
                log::debug!("material {} created for {:?}", value, key);
                Arc::clone(e.insert(Arc::new(value)))
            }
        };
        Ok(Arc::clone(inner.aliases.entry(key).or_insert(shared)))
    }

    #[inline]
    pub fn get_id(&self, type_id: u16) -> Result<Arc<MaterialValue>> {
        self.get_with_data(type_id, 0)
    }

    pub fn get_with_data(&self, type_id: u16, data: u8) -> Result<Arc<MaterialValue>> {
        self.get(&MaterialSpec::compose(type_id, data, None))
    }

    pub fn get_with_text(
        &self,
        type_id: u16,
        data: u8,
        text: Option<&[String; TEXT_LINES]>,
    ) -> Result<Arc<MaterialValue>> {
        self.get(&MaterialSpec::compose(type_id, data, text))
    }

    /// Number of distinct materials held.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every interned value. Materials already handed out stay valid;
    /// later requests build fresh instances.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.values.clear();
        inner.aliases.clear();
    }

    fn lookup(&self, key: &str) -> Option<Arc<MaterialValue>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .aliases
            .get(key)
            .cloned()
    }
}

impl fmt::Debug for MaterialRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterialRegistry")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterialError;
    use crate::world::MemoryWorld;

    #[test]
    fn wool_renders_with_colour_name() {
        let reg = MaterialRegistry::new();
        let red = reg.get("35:14").unwrap();
        assert_eq!(red.to_string(), "wool:red");
        assert_eq!(reg.get("stone").unwrap().to_string(), "stone:0");
        assert_eq!(reg.get("200:3").unwrap().to_string(), "200:3");
    }

    #[test]
    fn case_variants_share_one_instance() {
        let reg = MaterialRegistry::new();
        let a = reg.get("stone").unwrap();
        let b = reg.get("STONE").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn numeric_overloads_are_interned() {
        let reg = MaterialRegistry::new();
        let a = reg.get_with_data(35, 14).unwrap();
        let b = reg.get_with_data(35, 14).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &reg.get("wool:red").unwrap()));
        assert_eq!(reg.len(), 1);
        assert_eq!(*reg.get_id(1).unwrap(), *reg.get("stone").unwrap());
    }

    #[test]
    fn equality_ignores_text() {
        let reg = MaterialRegistry::new();
        let plain = reg.get_with_text(63, 0, None).unwrap();
        let text = ["Hello".to_string(), "World".into(), "".into(), "".into()];
        let signed = reg.get_with_text(63, 0, Some(&text)).unwrap();
        assert!(!Arc::ptr_eq(&plain, &signed));
        assert_eq!(plain, signed);
        assert_eq!(signed.text(), Some(&text));
        assert_eq!(plain.text(), None);
    }

    #[test]
    fn sign_text_keeps_case() {
        let reg = MaterialRegistry::new();
        let sign = reg.get("63=Hello;World;;").unwrap();
        let lines = sign.text().unwrap();
        assert_eq!(lines, &["Hello", "World", "", ""].map(String::from));
        assert_eq!(sign.to_spec_string(), "sign_post:0=Hello;World;;");
    }

    #[test]
    fn rotation_is_interned() {
        let reg = MaterialRegistry::new();
        let stairs = reg.get("wood_stairs:0").unwrap();
        let turned = stairs.rotate(&reg, 90).unwrap();
        assert_eq!(turned.data(), 2);
        assert!(Arc::ptr_eq(&turned, &reg.get_with_data(53, 2).unwrap()));
        assert_eq!(stairs.rotate(&reg, 270).unwrap().data(), 3);
        assert_eq!(stairs.rotate(&reg, 180).unwrap().data(), 1);
        assert_eq!(*stairs.rotate(&reg, 45).unwrap(), *stairs);
    }

    #[test]
    fn rotation_keeps_sign_text() {
        let reg = MaterialRegistry::new();
        let sign = reg.get("68:2=Check;mate").unwrap();
        let turned = sign.rotate(&reg, 90).unwrap();
        assert_eq!(turned.data(), 5);
        assert_eq!(turned.text(), sign.text());
    }

    #[test]
    fn failed_parse_caches_nothing() {
        let reg = MaterialRegistry::new();
        assert!(matches!(reg.get("nope"), Err(MaterialError::UnknownMaterial(_))));
        assert!(reg.is_empty());
    }

    #[test]
    fn apply_writes_sign_text_only_for_signs() {
        let reg = MaterialRegistry::new();
        let mut world = MemoryWorld::new();
        let sign = reg.get("sign=a;b").unwrap();
        let stone = reg.get("stone").unwrap();
        sign.apply_to(&mut world, BlockPos::new(0, 0, 0));
        stone.apply_to(&mut world, BlockPos::new(1, 0, 0));
        assert_eq!(world.sign_text(BlockPos::new(0, 0, 0)).unwrap()[1], "b");
        assert!(world.sign_text(BlockPos::new(1, 0, 0)).is_none());
        assert_eq!(world.get(BlockPos::new(1, 0, 0)), Some(stone));
    }

    #[test]
    fn apply_to_cuboid_fills_inclusive_box() {
        let reg = MaterialRegistry::new();
        let mut world = MemoryWorld::new();
        let glass = reg.get("glass").unwrap();
        glass.apply_to_cuboid(&mut world, &Cuboid::new(BlockPos::new(0, 0, 0), BlockPos::new(1, 2, 1)));
        assert_eq!(world.len(), 12);
    }

    #[test]
    fn clear_forgets_instances() {
        let reg = MaterialRegistry::new();
        let before = reg.get("dirt").unwrap();
        reg.clear();
        let after = reg.get("dirt").unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before, after);
    }
}
