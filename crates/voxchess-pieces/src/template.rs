use std::collections::BTreeSet;

use crate::error::TemplateError;

/// Character marking an unoccupied cell in template rows.
pub const EMPTY_MARKER: char = ' ';

/// Immutable 3D grid of material symbols for one piece.
///
/// Built from layers listed top to bottom; each layer is a list of rows
/// running along x, and each character of a row is one cell along z. The
/// grid must be a box: every layer has the same number of rows and every
/// row the same number of characters. Nothing is padded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeTemplate {
    layers: Vec<Vec<String>>,
    sx: usize,
    sy: usize,
    sz: usize,
    cells: Vec<Option<char>>,
}

impl ShapeTemplate {
    pub fn new(layers: Vec<Vec<String>>) -> Result<Self, TemplateError> {
        let sy = layers.len();
        let first = layers.first().ok_or(TemplateError::NoLayers)?;
        let sx = first.len();
        let sz = first.first().map(|r| r.chars().count()).unwrap_or(0);

        for (li, layer) in layers.iter().enumerate() {
            if layer.is_empty() {
                return Err(TemplateError::EmptyLayer { layer: li });
            }
            if layer.len() != sx {
                return Err(TemplateError::RaggedLayer {
                    layer: li,
                    expected: sx,
                    found: layer.len(),
                });
            }
            for (ri, row) in layer.iter().enumerate() {
                let found = row.chars().count();
                if found != sz {
                    return Err(TemplateError::RaggedRow {
                        layer: li,
                        row: ri,
                        expected: sz,
                        found,
                    });
                }
            }
        }
        if sz == 0 {
            return Err(TemplateError::EmptyLayer { layer: 0 });
        }

        let mut cells = vec![None; sx * sy * sz];
        for (li, layer) in layers.iter().enumerate() {
            let y = sy - 1 - li;
            for (x, row) in layer.iter().enumerate() {
                for (z, ch) in row.chars().enumerate() {
                    if ch != EMPTY_MARKER {
                        cells[(y * sz + z) * sx + x] = Some(ch);
                    }
                }
            }
        }

        Ok(Self {
            layers,
            sx,
            sy,
            sz,
            cells,
        })
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

    /// Row length (`size_z`); all rows share it. Board layout uses the
    /// footprint maximum of `size_x` and `size_z` instead, see
    /// `PieceSet::max_width`.
    #[inline]
    pub fn width(&self) -> usize {
        self.sz
    }

    /// Number of layers.
    #[inline]
    pub fn height(&self) -> usize {
        self.sy
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.sz + z) * self.sx + x
    }

    /// Symbol at `(x, y, z)` with `y = 0` at the bottom layer.
    pub fn cell(&self, x: usize, y: usize, z: usize) -> Option<char> {
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return None;
        }
        self.cells[self.idx(x, y, z)]
    }

    /// Occupied cells as `(x, y, z, symbol)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, usize, char)> + '_ {
        let (sx, sz) = (self.sx, self.sz);
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            let ch = (*c)?;
            let x = i % sx;
            let z = (i / sx) % sz;
            let y = i / (sx * sz);
            Some((x, y, z, ch))
        })
    }

    pub fn symbols(&self) -> BTreeSet<char> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Rows exactly as they were supplied, top layer first.
    pub fn layers(&self) -> &[Vec<String>] {
        &self.layers
    }
}
