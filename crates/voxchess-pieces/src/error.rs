use std::io;
use std::path::PathBuf;

use thiserror::Error;
use voxchess_blocks::MaterialError;

use crate::chess::{PieceColor, PieceKind};

/// Why a set of template rows cannot form a box-shaped grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template has no layers")]
    NoLayers,

    #[error("layer {layer} is empty")]
    EmptyLayer { layer: usize },

    #[error("layer {layer} has {found} rows, expected {expected}")]
    RaggedLayer {
        layer: usize,
        expected: usize,
        found: usize,
    },

    #[error("layer {layer} row {row} is {found} wide, expected {expected}")]
    RaggedRow {
        layer: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum StyleError {
    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error("malformed template for {piece}: {source}")]
    MalformedTemplate {
        piece: PieceKind,
        #[source]
        source: TemplateError,
    },

    #[error("missing required section '{0}'")]
    MissingSection(&'static str),

    #[error("more than one template for the {0}")]
    DuplicatePiece(PieceKind),

    #[error("this style has no template for the {0}")]
    UnknownPieceType(PieceKind),

    #[error("unknown piece '{0}'")]
    UnknownPiece(String),

    #[error("unknown colour '{0}'")]
    UnknownColor(String),

    #[error("unknown board orientation '{0}'")]
    UnknownOrientation(String),

    #[error("material key {0:?} must be a single character")]
    InvalidSymbol(String),

    #[error("symbol {symbol:?} has no {color} material")]
    UnmappedSymbol { symbol: char, color: PieceColor },

    #[error("invalid stone code {0}")]
    InvalidStoneCode(i8),

    #[error("no style named '{0}'")]
    UnknownStyle(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("style document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("style document: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, StyleError>;
