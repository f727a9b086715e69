use std::sync::Arc;

use voxchess_blocks::{BlockPos, BlockSink, MaterialRegistry, MaterialValue};

use crate::chess::{PieceColor, PieceKind, StoneCode};
use crate::error::{Result, StyleError};
use crate::material_map::MaterialMap;
use crate::orientation::BoardOrientation;
use crate::template::ShapeTemplate;

/// One piece in one colour, turned for one board orientation, with every
/// cell resolved to a concrete material.
#[derive(Debug)]
pub struct Stone {
    piece: PieceKind,
    color: PieceColor,
    orientation: BoardOrientation,
    sx: usize,
    sy: usize,
    sz: usize,
    cells: Vec<Option<Arc<MaterialValue>>>,
}

impl Stone {
    /// Resolve each template symbol through `materials`, turn the material
    /// and its cell position by the orientation, and lay the result out.
    pub fn realize(
        piece: PieceKind,
        color: PieceColor,
        orientation: BoardOrientation,
        template: &ShapeTemplate,
        materials: &MaterialMap,
        registry: &MaterialRegistry,
    ) -> Result<Self> {
        let (tx, tz) = (template.size_x(), template.size_z());
        let (sx, sz) = orientation.rotated_dims(tx, tz);
        let sy = template.size_y();
        let degrees = orientation.degrees();

        let mut cells = vec![None; sx * sy * sz];
        for (x, y, z, symbol) in template.occupied() {
            let base = materials
                .get(symbol)
                .ok_or(StyleError::UnmappedSymbol { symbol, color })?;
            let turned = base.rotate(registry, degrees)?;
            let (rx, rz) = orientation.rotate_cell(x, z, tx, tz);
            cells[(y * sz + rz) * sx + rx] = Some(turned);
        }

        log::debug!(
            "realized {} {} facing {} ({}x{}x{})",
            color,
            piece,
            orientation,
            sx,
            sy,
            sz
        );
        Ok(Self {
            piece,
            color,
            orientation,
            sx,
            sy,
            sz,
            cells,
        })
    }

    #[inline]
    pub fn piece(&self) -> PieceKind {
        self.piece
    }

    #[inline]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    #[inline]
    pub fn orientation(&self) -> BoardOrientation {
        self.orientation
    }

    #[inline]
    pub fn code(&self) -> StoneCode {
        StoneCode::new(self.piece, self.color)
    }

    #[inline]
    pub fn size_x(&self) -> usize {
        self.sx
    }

    #[inline]
    pub fn size_y(&self) -> usize {
        self.sy
    }

    #[inline]
    pub fn size_z(&self) -> usize {
        self.sz
    }

    /// Wider of the two horizontal extents.
    #[inline]
    pub fn width(&self) -> usize {
        self.sx.max(self.sz)
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&Arc<MaterialValue>> {
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return None;
        }
        self.cells[(y * self.sz + z) * self.sx + x].as_ref()
    }

    /// Occupied cells as `(x, y, z, material)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, usize, &Arc<MaterialValue>)> {
        let (sx, sz) = (self.sx, self.sz);
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            let m = c.as_ref()?;
            Some((i % sx, i / (sx * sz), (i / sx) % sz, m))
        })
    }

    /// Place the stone on a board square whose north-west bottom corner is
    /// `origin` and whose side is `square` blocks, centred horizontally.
    /// Empty cells are left untouched.
    pub fn paint<S: BlockSink + ?Sized>(&self, sink: &mut S, origin: BlockPos, square: usize) {
        let ox = (square.saturating_sub(self.sx) / 2) as i32;
        let oz = (square.saturating_sub(self.sz) / 2) as i32;
        for (x, y, z, mat) in self.occupied() {
            mat.apply_to(sink, origin.offset(ox + x as i32, y as i32, oz + z as i32));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxchess_blocks::MemoryWorld;

    fn template(layers: &[&[&str]]) -> ShapeTemplate {
        ShapeTemplate::new(
            layers
                .iter()
                .map(|l| l.iter().map(|r| r.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn single_stair_turns_with_the_board() {
        let reg = MaterialRegistry::new();
        let map = MaterialMap::from_specs(&reg, [("s", "53:0")]).unwrap();
        let t = template(&[&["s"]]);
        let stone = Stone::realize(
            PieceKind::Pawn,
            PieceColor::White,
            BoardOrientation::East,
            &t,
            &map,
            &reg,
        )
        .unwrap();
        let cell = stone.get(0, 0, 0).unwrap();
        assert_eq!(cell.data(), voxchess_blocks::rotation::rotate90(53, 0));
    }

    #[test]
    fn geometry_turns_too() {
        let reg = MaterialRegistry::new();
        let map = MaterialMap::from_specs(&reg, [("a", "stone"), ("b", "dirt")]).unwrap();
        // one layer, x rows: "ab" then "  " -> a at (0,0), b at (0,1)
        let t = template(&[&["ab", "  ", "  "]]);
        let stone = Stone::realize(
            PieceKind::Rook,
            PieceColor::Black,
            BoardOrientation::East,
            &t,
            &map,
            &reg,
        )
        .unwrap();
        assert_eq!((stone.size_x(), stone.size_z()), (2, 3));
        // east: (x, z) -> (sz - 1 - z, x) with sz = 2
        assert_eq!(stone.get(1, 0, 0).unwrap().to_string(), "stone:0");
        assert_eq!(stone.get(0, 0, 0).unwrap().to_string(), "dirt:0");
        assert_eq!(stone.occupied().count(), 2);
    }

    #[test]
    fn missing_symbol_fails() {
        let reg = MaterialRegistry::new();
        let map = MaterialMap::from_specs(&reg, [("a", "stone")]).unwrap();
        let t = template(&[&["az"]]);
        let err = Stone::realize(
            PieceKind::King,
            PieceColor::Black,
            BoardOrientation::North,
            &t,
            &map,
            &reg,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StyleError::UnmappedSymbol {
                symbol: 'z',
                color: PieceColor::Black
            }
        ));
    }

    #[test]
    fn paint_centres_on_the_square() {
        let reg = MaterialRegistry::new();
        let map = MaterialMap::from_specs(&reg, [("a", "stone")]).unwrap();
        let t = template(&[&["a"], &["a"]]);
        let stone = Stone::realize(
            PieceKind::Pawn,
            PieceColor::White,
            BoardOrientation::North,
            &t,
            &map,
            &reg,
        )
        .unwrap();
        let mut world = MemoryWorld::new();
        stone.paint(&mut world, BlockPos::new(10, 64, 20), 5);
        assert_eq!(world.len(), 2);
        assert!(world.get(BlockPos::new(12, 64, 22)).is_some());
        assert!(world.get(BlockPos::new(12, 65, 22)).is_some());
    }
}
