use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use hashbrown::HashMap;
use rayon::prelude::*;
use voxchess_blocks::MaterialRegistry;

use crate::chess::{PieceColor, PieceKind, StoneCode};
use crate::config::{MaterialsSection, StyleDocument, style_path};
use crate::error::{Result, StyleError};
use crate::material_map::MaterialMap;
use crate::orientation::BoardOrientation;
use crate::stone::Stone;
use crate::template::ShapeTemplate;

type StoneKey = (PieceKind, PieceColor, BoardOrientation);

/// A loaded style: one template per piece, a material map per colour, and
/// a cache of realized stones.
///
/// Stones are built on first request and shared afterwards. The cache only
/// grows, so concurrent callers asking for the same key always end up
/// holding the same `Arc<Stone>`.
pub struct PieceSet {
    name: String,
    comment: Option<String>,
    templates: [Option<ShapeTemplate>; PieceKind::COUNT],
    white: MaterialMap,
    black: MaterialMap,
    max_width: usize,
    max_height: usize,
    registry: Arc<MaterialRegistry>,
    stones: RwLock<HashMap<StoneKey, Arc<Stone>>>,
}

impl PieceSet {
    /// Every symbol used by a template must be mapped for both colours, and
    /// each piece may appear only once.
    pub fn new(
        name: impl Into<String>,
        comment: Option<String>,
        templates: impl IntoIterator<Item = (PieceKind, ShapeTemplate)>,
        white: MaterialMap,
        black: MaterialMap,
        registry: Arc<MaterialRegistry>,
    ) -> Result<Self> {
        let mut slots: [Option<ShapeTemplate>; PieceKind::COUNT] = Default::default();
        for (piece, template) in templates {
            let slot = &mut slots[piece.index()];
            if slot.is_some() {
                return Err(StyleError::DuplicatePiece(piece));
            }
            *slot = Some(template);
        }

        for template in slots.iter().flatten() {
            for symbol in template.symbols() {
                for (color, map) in [(PieceColor::White, &white), (PieceColor::Black, &black)] {
                    if !map.contains(symbol) {
                        return Err(StyleError::UnmappedSymbol { symbol, color });
                    }
                }
            }
        }

        let max_width = slots
            .iter()
            .flatten()
            .map(|t| t.size_x().max(t.size_z()))
            .max()
            .unwrap_or(0);
        let max_height = slots.iter().flatten().map(|t| t.height()).max().unwrap_or(0);

        Ok(Self {
            name: name.into(),
            comment,
            templates: slots,
            white,
            black,
            max_width,
            max_height,
            registry,
            stones: RwLock::new(HashMap::new()),
        })
    }

    /// Build from a parsed style document. Required sections are checked
    /// before anything is resolved.
    pub fn from_document(doc: &StyleDocument, registry: Arc<MaterialRegistry>) -> Result<Self> {
        let style = doc.validate()?;

        let mut templates = Vec::with_capacity(style.pieces.len());
        for (key, layers) in style.pieces {
            let piece: PieceKind = key.parse()?;
            let template = ShapeTemplate::new(layers.clone())
                .map_err(|source| StyleError::MalformedTemplate { piece, source })?;
            templates.push((piece, template));
        }

        let white = MaterialMap::from_specs(
            &registry,
            style.white.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        let black = MaterialMap::from_specs(
            &registry,
            style.black.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;

        Self::new(
            style.name,
            style.comment.map(str::to_string),
            templates,
            white,
            black,
            registry,
        )
    }

    /// The document that reloads to this set.
    pub fn to_document(&self) -> StyleDocument {
        let pieces = PieceKind::ALL
            .into_iter()
            .filter_map(|p| {
                self.template(p)
                    .map(|t| (p.to_char().to_string(), t.layers().to_vec()))
            })
            .collect();
        StyleDocument {
            name: Some(self.name.clone()),
            comment: self.comment.clone(),
            materials: Some(MaterialsSection {
                white: Some(self.white.to_specs()),
                black: Some(self.black.to_specs()),
            }),
            pieces: Some(pieces),
        }
    }

    /// Write this set to `<dir>/<new_name>.toml` under the new name.
    pub fn save(&self, dir: impl AsRef<Path>, new_name: &str) -> Result<PathBuf> {
        let path = style_path(dir.as_ref(), new_name);
        let mut doc = self.to_document();
        doc.name = Some(new_name.to_string());
        doc.save(&path)?;
        log::info!("saved style '{}' as '{}' ({})", self.name, new_name, path.display());
        Ok(path)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Largest horizontal extent of any piece under any orientation.
    #[inline]
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    #[inline]
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    pub fn template(&self, piece: PieceKind) -> Option<&ShapeTemplate> {
        self.templates[piece.index()].as_ref()
    }

    pub fn material_map(&self, color: PieceColor) -> &MaterialMap {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }

    pub fn registry(&self) -> &Arc<MaterialRegistry> {
        &self.registry
    }

    pub fn get_stone(
        &self,
        piece: PieceKind,
        color: PieceColor,
        orientation: BoardOrientation,
    ) -> Result<Arc<Stone>> {
        let key = (piece, color, orientation);
        if let Some(stone) = self
            .stones
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(stone));
        }

        let template = self.template(piece).ok_or(StyleError::UnknownPieceType(piece))?;
        let stone = Stone::realize(
            piece,
            color,
            orientation,
            template,
            self.material_map(color),
            &self.registry,
        )?;

        // Another thread may have realized the same key meanwhile; keep theirs.
        let mut stones = self.stones.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(stones.entry(key).or_insert_with(|| Arc::new(stone))))
    }

    /// Decode a rules-engine stone code and fetch that stone.
    pub fn stone_for_code(&self, code: i8, orientation: BoardOrientation) -> Result<Arc<Stone>> {
        let (piece, color) = StoneCode::from(code)
            .decode()
            .ok_or(StyleError::InvalidStoneCode(code))?;
        self.get_stone(piece, color, orientation)
    }

    /// White rendering to black rendering for every symbol whose two
    /// materials render differently.
    pub fn white_to_black_diffs(&self) -> BTreeMap<String, String> {
        self.white
            .iter()
            .filter_map(|(symbol, w)| {
                let b = self.black.get(symbol)?;
                let (w, b) = (w.to_string(), b.to_string());
                (w != b).then_some((w, b))
            })
            .collect()
    }

    /// Stones realized so far. Later insertions do not show up in the
    /// returned list.
    pub fn stones(&self) -> Vec<Arc<Stone>> {
        let stones = self.stones.read().unwrap_or_else(PoisonError::into_inner);
        let mut out: Vec<Arc<Stone>> = stones.values().cloned().collect();
        out.sort_by_key(|s| (s.piece(), s.color(), s.orientation()));
        out
    }

    pub fn cached_stones(&self) -> usize {
        self.stones.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Realize every piece in both colours at all four orientations.
    /// Returns how many stones the cache holds afterwards.
    pub fn prewarm(&self) -> Result<usize> {
        let keys: Vec<StoneKey> = PieceKind::ALL
            .into_iter()
            .filter(|p| self.template(*p).is_some())
            .flat_map(|p| PieceColor::ALL.into_iter().map(move |c| (p, c)))
            .flat_map(|(p, c)| BoardOrientation::ALL.into_iter().map(move |o| (p, c, o)))
            .collect();
        keys.par_iter()
            .try_for_each(|&(p, c, o)| self.get_stone(p, c, o).map(|_| ()))?;
        let n = self.cached_stones();
        log::info!("style '{}': {} stones ready", self.name, n);
        Ok(n)
    }
}

impl fmt::Debug for PieceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pieces: Vec<char> = PieceKind::ALL
            .into_iter()
            .filter(|p| self.template(*p).is_some())
            .map(PieceKind::to_char)
            .collect();
        f.debug_struct("PieceSet")
            .field("name", &self.name)
            .field("pieces", &pieces)
            .field("max_width", &self.max_width)
            .field("max_height", &self.max_height)
            .field("cached_stones", &self.cached_stones())
            .finish()
    }
}
