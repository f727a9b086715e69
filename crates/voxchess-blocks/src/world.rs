//! Seam between realized materials and whatever owns the voxel world.

use std::collections::HashMap;
use std::sync::Arc;

use crate::material::MaterialValue;
use crate::spec::TEXT_LINES;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

/// Inclusive axis-aligned box of block positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cuboid {
    pub min: BlockPos,
    pub max: BlockPos,
}

impl Cuboid {
    /// Box spanning two corners given in any order.
    pub fn new(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    #[inline]
    pub fn size_x(&self) -> usize {
        (self.max.x - self.min.x + 1) as usize
    }

    #[inline]
    pub fn size_y(&self) -> usize {
        (self.max.y - self.min.y + 1) as usize
    }

    #[inline]
    pub fn size_z(&self) -> usize {
        (self.max.z - self.min.z + 1) as usize
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.size_x() * self.size_y() * self.size_z()
    }

    #[inline]
    pub fn contains(&self, p: BlockPos) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Every position in the box, y-major then z then x.
    pub fn positions(&self) -> impl Iterator<Item = BlockPos> + '_ {
        (self.min.y..=self.max.y).flat_map(move |y| {
            (self.min.z..=self.max.z)
                .flat_map(move |z| (self.min.x..=self.max.x).map(move |x| BlockPos::new(x, y, z)))
        })
    }
}

/// Write primitives a world-access layer provides to piece placement.
pub trait BlockSink {
    fn set_material(&mut self, pos: BlockPos, material: &Arc<MaterialValue>);
    fn set_sign_text(&mut self, pos: BlockPos, lines: &[String; TEXT_LINES]);
}

/// Sparse in-memory world, mostly useful for previews and tests.
#[derive(Default, Debug)]
pub struct MemoryWorld {
    blocks: HashMap<BlockPos, Arc<MaterialValue>>,
    signs: HashMap<BlockPos, [String; TEXT_LINES]>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: BlockPos) -> Option<Arc<MaterialValue>> {
        self.blocks.get(&pos).cloned()
    }

    pub fn sign_text(&self, pos: BlockPos) -> Option<&[String; TEXT_LINES]> {
        self.signs.get(&pos)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
        self.signs.clear();
    }

    /// Written positions in ascending coordinate order.
    pub fn snapshot_all(&self) -> Vec<(BlockPos, Arc<MaterialValue>)> {
        let mut out: Vec<_> = self.blocks.iter().map(|(k, v)| (*k, Arc::clone(v))).collect();
        out.sort_by_key(|(pos, _)| (pos.y, pos.z, pos.x));
        out
    }
}

impl BlockSink for MemoryWorld {
    fn set_material(&mut self, pos: BlockPos, material: &Arc<MaterialValue>) {
        // Overwriting a sign with anything clears its text.
        self.signs.remove(&pos);
        self.blocks.insert(pos, Arc::clone(material));
    }

    fn set_sign_text(&mut self, pos: BlockPos, lines: &[String; TEXT_LINES]) {
        self.signs.insert(pos, lines.clone());
    }
}
