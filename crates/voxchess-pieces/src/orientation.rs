use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Direction the board faces. Each step clockwise from `North` adds a
/// quarter turn to every stone placed on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoardOrientation {
    North,
    East,
    South,
    West,
}

impl BoardOrientation {
    pub const ALL: [BoardOrientation; 4] = [
        BoardOrientation::North,
        BoardOrientation::East,
        BoardOrientation::South,
        BoardOrientation::West,
    ];

    #[inline]
    pub fn quarter_turns(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn degrees(self) -> i32 {
        self.quarter_turns() as i32 * 90
    }

    pub fn name(self) -> &'static str {
        match self {
            BoardOrientation::North => "north",
            BoardOrientation::East => "east",
            BoardOrientation::South => "south",
            BoardOrientation::West => "west",
        }
    }

    /// Horizontal footprint `(size_x, size_z)` after turning.
    #[inline]
    pub fn rotated_dims(self, sx: usize, sz: usize) -> (usize, usize) {
        if self.quarter_turns() % 2 == 1 { (sz, sx) } else { (sx, sz) }
    }

    /// Where cell `(x, z)` of an `sx` by `sz` footprint lands after turning
    /// clockwise (x east, z south).
    #[inline]
    pub fn rotate_cell(self, x: usize, z: usize, sx: usize, sz: usize) -> (usize, usize) {
        match self {
            BoardOrientation::North => (x, z),
            BoardOrientation::East => (sz - 1 - z, x),
            BoardOrientation::South => (sx - 1 - x, sz - 1 - z),
            BoardOrientation::West => (z, sx - 1 - x),
        }
    }
}

impl fmt::Display for BoardOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardOrientation {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(BoardOrientation::North),
            "east" | "e" => Ok(BoardOrientation::East),
            "south" | "s" => Ok(BoardOrientation::South),
            "west" | "w" => Ok(BoardOrientation::West),
            _ => Err(StyleError::UnknownOrientation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_follow_quarter_turns() {
        let d: Vec<i32> = BoardOrientation::ALL.iter().map(|o| o.degrees()).collect();
        assert_eq!(d, vec![0, 90, 180, 270]);
    }

    #[test]
    fn east_twice_is_south() {
        let (sx, sz) = (3, 2);
        for x in 0..sx {
            for z in 0..sz {
                let (x1, z1) = BoardOrientation::East.rotate_cell(x, z, sx, sz);
                let (sx1, sz1) = BoardOrientation::East.rotated_dims(sx, sz);
                let twice = BoardOrientation::East.rotate_cell(x1, z1, sx1, sz1);
                assert_eq!(twice, BoardOrientation::South.rotate_cell(x, z, sx, sz));
            }
        }
    }

    #[test]
    fn west_undoes_east() {
        let (sx, sz) = (4, 2);
        for x in 0..sx {
            for z in 0..sz {
                let (x1, z1) = BoardOrientation::East.rotate_cell(x, z, sx, sz);
                let (sx1, sz1) = BoardOrientation::East.rotated_dims(sx, sz);
                assert_eq!(BoardOrientation::West.rotate_cell(x1, z1, sx1, sz1), (x, z));
            }
        }
    }
}
