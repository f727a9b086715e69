//! Piece styles: shape templates, colour material maps, and the cache of
//! realized, oriented stones.
#![forbid(unsafe_code)]

pub mod chess;
pub mod config;
pub mod error;
pub mod library;
pub mod material_map;
pub mod orientation;
pub mod set;
pub mod stone;
pub mod template;

pub use chess::{PieceColor, PieceKind, StoneCode};
pub use config::StyleDocument;
pub use error::{Result, StyleError, TemplateError};
pub use library::StyleLibrary;
pub use material_map::MaterialMap;
pub use orientation::BoardOrientation;
pub use set::PieceSet;
pub use stone::Stone;
pub use template::ShapeTemplate;
