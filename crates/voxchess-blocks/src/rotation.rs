//! Quarter-turn rotation of orientation-bearing data values.
//!
//! Every block id belongs to exactly one [`RotationFamily`]. The family
//! decides how the low bits of the data value encode a horizontal
//! direction; ids that encode no direction fall into
//! [`RotationFamily::Fixed`] and rotate to themselves. All rotations are
//! about the vertical axis, clockwise when seen from above.

/// Block families whose data value carries a horizontal orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RotationFamily {
    /// Torches: wall attachment 1..=4, 5 is standing.
    Torch,
    /// Plain rails: straight 0..=5, curves 6..=9.
    Rail,
    /// Powered and detector rails: straight only, bit 3 is the powered flag.
    PoweredRail,
    /// All stair variants: facing in bits 0-1, upside-down in bit 2.
    Stairs,
    /// Levers and buttons: wall attachment 1..=4, bit 3 is the thrown flag.
    LeverButton,
    /// Doors: bottom halves keep facing in bits 0-1 and the swung flag in
    /// bit 2; top halves (bit 3) keep hinge side and never turn.
    Door,
    /// Free-standing signs: sixteen compass steps.
    SignPost,
    /// Ladders, wall signs, furnaces, dispensers, chests: faces 2..=5.
    Facing,
    /// Pumpkins and lanterns: facing 0..=3.
    Pumpkin,
    /// Repeaters: facing in bits 0-1, delay above.
    Repeater,
    /// Trap doors: hinge wall in bits 0-1.
    TrapDoor,
    /// Pistons and piston heads: face in bits 0-2, extended flag above.
    Piston,
    /// Huge mushroom caps: 3x3 texture layout, 10+ are stems.
    MushroomCap,
    /// Vines: one attachment bit per side.
    Vine,
    /// Fence gates and beds: facing in bits 0-1.
    Quarter,
    /// Logs: axis in bits 2-3, X and Z swap.
    Log,
    /// No orientation encoded in the data value.
    Fixed,
}

impl RotationFamily {
    pub fn of(type_id: u16) -> Self {
        match type_id {
            50 | 75 | 76 => Self::Torch,
            66 => Self::Rail,
            27 | 28 => Self::PoweredRail,
            53 | 67 | 108 | 109 | 114 => Self::Stairs,
            69 | 77 => Self::LeverButton,
            64 | 71 => Self::Door,
            63 => Self::SignPost,
            23 | 54 | 61 | 62 | 65 | 68 | 95 => Self::Facing,
            86 | 91 => Self::Pumpkin,
            93 | 94 => Self::Repeater,
            96 => Self::TrapDoor,
            29 | 33 | 34 => Self::Piston,
            99 | 100 => Self::MushroomCap,
            106 => Self::Vine,
            26 | 107 => Self::Quarter,
            17 => Self::Log,
            _ => Self::Fixed,
        }
    }

    #[inline]
    pub fn is_orientable(self) -> bool {
        self != Self::Fixed
    }

    /// Data value after one clockwise quarter turn.
    pub fn rotate90(self, data: u8) -> u8 {
        match self {
            Self::Torch => match data {
                1 => 3,
                2 => 4,
                3 => 2,
                4 => 1,
                _ => data,
            },
            Self::Rail => match data {
                6 => 7,
                7 => 8,
                8 => 9,
                9 => 6,
                _ => straight_rail(data, [1, 0, 5, 4, 2, 3]),
            },
            Self::PoweredRail => straight_rail(data, [1, 0, 5, 4, 2, 3]),
            Self::Stairs => match data {
                0 => 2,
                1 => 3,
                2 => 1,
                3 => 0,
                4 => 6,
                5 => 7,
                6 => 5,
                7 => 4,
                _ => data,
            },
            Self::LeverButton => {
                let thrown = data & 0x8;
                match data & !0x8 {
                    1 => 3 | thrown,
                    2 => 4 | thrown,
                    3 => 2 | thrown,
                    4 => 1 | thrown,
                    _ => data,
                }
            }
            // Top halves carry hinge side, not facing.
            Self::Door if data & 0x8 != 0 => data,
            Self::Door | Self::Repeater | Self::Quarter => (data.wrapping_add(1) & 0x3) | (data & !0x3),
            Self::SignPost => data.wrapping_add(4) & 0xf,
            Self::Facing => match data {
                2 => 5,
                3 => 4,
                4 => 2,
                5 => 3,
                _ => data,
            },
            Self::Pumpkin => match data {
                0..=3 => (data + 1) & 0x3,
                _ => data,
            },
            Self::TrapDoor => {
                let rest = data & !0x3;
                match data & 0x3 {
                    0 => 3 | rest,
                    1 => 2 | rest,
                    2 => rest,
                    _ => 1 | rest,
                }
            }
            Self::Piston => {
                let rest = data & !0x7;
                match data & 0x7 {
                    2 => 5 | rest,
                    3 => 4 | rest,
                    4 => 2 | rest,
                    5 => 3 | rest,
                    _ => data,
                }
            }
            Self::MushroomCap => {
                if data >= 10 {
                    data
                } else {
                    (data * 3) % 10
                }
            }
            Self::Vine => ((data << 1) | (data >> 3)) & 0xf,
            Self::Log => log_axis_swap(data),
            Self::Fixed => data,
        }
    }

    /// Data value after one counter-clockwise quarter turn; the exact
    /// inverse of [`RotationFamily::rotate90`].
    pub fn rotate90_reverse(self, data: u8) -> u8 {
        match self {
            Self::Torch => match data {
                3 => 1,
                4 => 2,
                2 => 3,
                1 => 4,
                _ => data,
            },
            Self::Rail => match data {
                7 => 6,
                8 => 7,
                9 => 8,
                6 => 9,
                _ => straight_rail(data, [1, 0, 4, 5, 3, 2]),
            },
            Self::PoweredRail => straight_rail(data, [1, 0, 4, 5, 3, 2]),
            Self::Stairs => match data {
                2 => 0,
                3 => 1,
                1 => 2,
                0 => 3,
                6 => 4,
                7 => 5,
                5 => 6,
                4 => 7,
                _ => data,
            },
            Self::LeverButton => {
                let thrown = data & 0x8;
                match data & !0x8 {
                    3 => 1 | thrown,
                    4 => 2 | thrown,
                    2 => 3 | thrown,
                    1 => 4 | thrown,
                    _ => data,
                }
            }
            // Top halves carry hinge side, not facing.
            Self::Door if data & 0x8 != 0 => data,
            Self::Door | Self::Repeater | Self::Quarter => (data.wrapping_add(3) & 0x3) | (data & !0x3),
            Self::SignPost => data.wrapping_add(12) & 0xf,
            Self::Facing => match data {
                5 => 2,
                4 => 3,
                2 => 4,
                3 => 5,
                _ => data,
            },
            Self::Pumpkin => match data {
                0..=3 => (data + 3) & 0x3,
                _ => data,
            },
            Self::TrapDoor => {
                let rest = data & !0x3;
                match data & 0x3 {
                    3 => rest,
                    2 => 1 | rest,
                    0 => 2 | rest,
                    _ => 3 | rest,
                }
            }
            Self::Piston => {
                let rest = data & !0x7;
                match data & 0x7 {
                    5 => 2 | rest,
                    4 => 3 | rest,
                    2 => 4 | rest,
                    3 => 5 | rest,
                    _ => data,
                }
            }
            Self::MushroomCap => {
                if data >= 10 {
                    data
                } else {
                    (data * 7) % 10
                }
            }
            Self::Vine => ((data >> 1) | (data << 3)) & 0xf,
            Self::Log => log_axis_swap(data),
            Self::Fixed => data,
        }
    }
}

// Straight rail shapes 0..=5 live in the low three bits; anything above
// is a flag that must survive the turn.
#[inline]
fn straight_rail(data: u8, table: [u8; 6]) -> u8 {
    let shape = data & 0x7;
    match table.get(shape as usize) {
        Some(&turned) => turned | (data & !0x7),
        None => data,
    }
}

#[inline]
fn log_axis_swap(data: u8) -> u8 {
    if (4..=11).contains(&data) {
        data ^ 0xc
    } else {
        data
    }
}

/// Data value of `type_id` after a clockwise quarter turn.
#[inline]
pub fn rotate90(type_id: u16, data: u8) -> u8 {
    RotationFamily::of(type_id).rotate90(data)
}

/// Data value of `type_id` after a counter-clockwise quarter turn.
#[inline]
pub fn rotate90_reverse(type_id: u16, data: u8) -> u8 {
    RotationFamily::of(type_id).rotate90_reverse(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stairs_walk_the_compass() {
        let mut d = 0u8;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(d);
            d = rotate90(53, d);
        }
        assert_eq!(seen, vec![0, 2, 1, 3]);
        assert_eq!(d, 0);
        // upside-down stairs keep the flag
        assert_eq!(rotate90(67, 4), 6);
    }

    #[test]
    fn curved_rails_cycle_separately() {
        assert_eq!(rotate90(66, 6), 7);
        assert_eq!(rotate90(66, 9), 6);
        assert_eq!(rotate90(66, 0), 1);
        // powered rails have no curves: 6 is left alone
        assert_eq!(rotate90(27, 6), 6);
        // powered flag survives
        assert_eq!(rotate90(27, 0x8 | 2), 0x8 | 5);
    }

    #[test]
    fn sign_post_steps_by_four() {
        assert_eq!(rotate90(63, 0), 4);
        assert_eq!(rotate90(63, 14), 2);
        assert_eq!(rotate90_reverse(63, 2), 14);
    }

    #[test]
    fn door_top_halves_stay_put() {
        for (id, data) in [(64u16, 8u8), (64, 9), (71, 9), (71, 11)] {
            assert_eq!(rotate90(id, data), data, "{id}:{data}");
            assert_eq!(rotate90_reverse(id, data), data, "{id}:{data}");
        }
        // bottom halves turn and keep the swung flag
        assert_eq!(rotate90(64, 3), 0);
        assert_eq!(rotate90(71, 4 | 1), 4 | 2);
        assert_eq!(rotate90_reverse(64, 0), 3);
    }

    #[test]
    fn wall_facing_blocks() {
        for id in [23u16, 54, 61, 62, 65, 68] {
            assert_eq!(rotate90(id, 2), 5, "id {id}");
            assert_eq!(rotate90_reverse(id, 5), 2, "id {id}");
        }
    }

    #[test]
    fn fixed_family_is_identity() {
        assert_eq!(RotationFamily::of(1), RotationFamily::Fixed);
        assert!(!RotationFamily::of(35).is_orientable());
        for d in 0..16 {
            assert_eq!(rotate90(35, d), d);
            assert_eq!(rotate90_reverse(35, d), d);
        }
    }

    #[test]
    fn mushroom_stems_do_not_turn() {
        assert_eq!(rotate90(99, 1), 3);
        assert_eq!(rotate90(99, 10), 10);
        assert_eq!(rotate90_reverse(100, 3), 1);
    }

    #[test]
    fn log_axes_swap() {
        assert_eq!(rotate90(17, 4), 8);
        assert_eq!(rotate90(17, 9), 5);
        assert_eq!(rotate90(17, 0), 0);
        assert_eq!(rotate90(17, 12), 12);
    }
}
