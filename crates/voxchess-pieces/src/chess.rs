//! Piece and colour encoding shared with the rules engine.
//!
//! Piece ids run 1..=6 in the order king, pawn, queen, rook, bishop,
//! knight. A stone code packs a piece and a colour into one signed byte:
//! white stones are the negated piece id, black stones the piece id, and
//! 0 is the empty square.

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King = 1,
    Pawn = 2,
    Queen = 3,
    Rook = 4,
    Bishop = 5,
    Knight = 6,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Pawn,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Zero-based slot, handy for fixed-size tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get((id as usize).checked_sub(1)?).copied()
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Pawn => 'P',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'P' => Some(PieceKind::Pawn),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Pawn => "pawn",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a piece character (`"K"`, `"n"`), a numeric id (`"3"`), or a
/// full name (`"bishop"`).
impl FromStr for PieceKind {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        let found = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => c.to_digit(10).and_then(|d| Self::from_id(d as u8)),
            (Some(c), None) => Self::from_char(c),
            _ => Self::ALL
                .into_iter()
                .find(|p| p.name().eq_ignore_ascii_case(t)),
        };
        found.ok_or_else(|| StyleError::UnknownPiece(s.to_string()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceColor {
    White = 0,
    Black = 1,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceColor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(PieceColor::White),
            "black" | "b" => Ok(PieceColor::Black),
            _ => Err(StyleError::UnknownColor(s.to_string())),
        }
    }
}

/// A piece of a given colour as the rules engine encodes it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoneCode(i8);

impl StoneCode {
    pub const EMPTY: StoneCode = StoneCode(0);

    pub fn new(piece: PieceKind, color: PieceColor) -> Self {
        let id = piece.id() as i8;
        match color {
            PieceColor::White => StoneCode(-id),
            PieceColor::Black => StoneCode(id),
        }
    }

    #[inline]
    pub fn raw(self) -> i8 {
        self.0
    }

    /// Split into piece and colour; `None` for the empty square and for
    /// codes outside the piece range.
    pub fn decode(self) -> Option<(PieceKind, PieceColor)> {
        let piece = PieceKind::from_id(self.0.unsigned_abs())?;
        let color = if self.0 < 0 {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Some((piece, color))
    }
}

impl From<i8> for StoneCode {
    fn from(raw: i8) -> Self {
        StoneCode(raw)
    }
}
