//! Legacy numeric block ids, their names, and the dye colour table.
//!
//! Two name tables are consulted when resolving a material: a table of
//! short aliases (`cobble`, `woodstair`, `cloth`, ...) and the table of
//! standard names indexed by id (`cobblestone`, `wood_stairs`, `wool`).
//! An alias that is spelled like a standard name always resolves to the
//! same id, so a rendered name parses back to the id it came from.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const AIR: u16 = 0;
pub const WOOL: u16 = 35;
pub const SIGN_POST: u16 = 63;
pub const WALL_SIGN: u16 = 68;

/// Standard block names, indexed by numeric id.
pub const STANDARD_NAMES: [&str; 125] = [
    "air",
    "stone",
    "grass",
    "dirt",
    "cobblestone",
    "wood",
    "sapling",
    "bedrock",
    "water",
    "stationary_water",
    "lava",
    "stationary_lava",
    "sand",
    "gravel",
    "gold_ore",
    "iron_ore",
    "coal_ore",
    "log",
    "leaves",
    "sponge",
    "glass",
    "lapis_ore",
    "lapis_block",
    "dispenser",
    "sandstone",
    "note_block",
    "bed_block",
    "powered_rail",
    "detector_rail",
    "piston_sticky_base",
    "web",
    "long_grass",
    "dead_bush",
    "piston_base",
    "piston_extension",
    "wool",
    "piston_moving_piece",
    "yellow_flower",
    "red_rose",
    "brown_mushroom",
    "red_mushroom",
    "gold_block",
    "iron_block",
    "double_step",
    "step",
    "brick",
    "tnt",
    "bookshelf",
    "mossy_cobblestone",
    "obsidian",
    "torch",
    "fire",
    "mob_spawner",
    "wood_stairs",
    "chest",
    "redstone_wire",
    "diamond_ore",
    "diamond_block",
    "workbench",
    "crops",
    "soil",
    "furnace",
    "burning_furnace",
    "sign_post",
    "wooden_door",
    "ladder",
    "rails",
    "cobblestone_stairs",
    "wall_sign",
    "lever",
    "stone_plate",
    "iron_door_block",
    "wood_plate",
    "redstone_ore",
    "glowing_redstone_ore",
    "redstone_torch_off",
    "redstone_torch_on",
    "stone_button",
    "snow",
    "ice",
    "snow_block",
    "cactus",
    "clay",
    "sugar_cane_block",
    "jukebox",
    "fence",
    "pumpkin",
    "netherrack",
    "soul_sand",
    "glowstone",
    "portal",
    "jack_o_lantern",
    "cake_block",
    "diode_block_off",
    "diode_block_on",
    "locked_chest",
    "trap_door",
    "monster_eggs",
    "smooth_brick",
    "huge_mushroom_1",
    "huge_mushroom_2",
    "iron_fence",
    "thin_glass",
    "melon_block",
    "pumpkin_stem",
    "melon_stem",
    "vine",
    "fence_gate",
    "brick_stairs",
    "smooth_stairs",
    "mycel",
    "water_lily",
    "nether_brick",
    "nether_fence",
    "nether_brick_stairs",
    "nether_warts",
    "enchantment_table",
    "brewing_stand",
    "cauldron",
    "ender_portal",
    "ender_portal_frame",
    "ender_stone",
    "dragon_egg",
    "redstone_lamp_off",
    "redstone_lamp_on",
];

// Short block-type aliases. Matched exactly after lowercasing.
const BLOCK_ALIASES: &[(&str, u16)] = &[
    ("rock", 1),
    ("cobble", 4),
    ("plank", 5),
    ("planks", 5),
    ("woodplank", 5),
    ("woodplanks", 5),
    ("seedling", 6),
    ("adminium", 7),
    ("watermoving", 8),
    ("movingwater", 8),
    ("flowingwater", 8),
    ("waterstationary", 9),
    ("stationarywater", 9),
    ("stillwater", 9),
    ("lavamoving", 10),
    ("movinglava", 10),
    ("flowinglava", 10),
    ("lavastationary", 11),
    ("stationarylava", 11),
    ("stilllava", 11),
    ("goldore", 14),
    ("ironore", 15),
    ("coalore", 16),
    ("tree", 17),
    ("trunk", 17),
    ("leaf", 18),
    ("lapisore", 21),
    ("lapislazuliore", 21),
    ("blueore", 21),
    ("lapisblock", 22),
    ("lapislazuliblock", 22),
    ("bluerock", 22),
    ("noteblock", 25),
    ("musicblock", 25),
    ("note", 25),
    ("music", 25),
    ("instrument", 25),
    ("bed", 26),
    ("poweredrail", 27),
    ("boosterrail", 27),
    ("poweredtrack", 27),
    ("booster", 27),
    ("detectorrail", 28),
    ("detector", 28),
    ("stickypiston", 29),
    ("spiderweb", 30),
    ("longgrass", 31),
    ("tallgrass", 31),
    ("deadbush", 32),
    ("shrub", 32),
    ("deadshrub", 32),
    ("piston", 33),
    ("pistonhead", 34),
    ("pistonextension", 34),
    ("cloth", 35),
    ("pistonmoving", 36),
    ("dandelion", 37),
    ("yellowflower", 37),
    ("rose", 38),
    ("redrose", 38),
    ("brownmushroom", 39),
    ("redmushroom", 40),
    ("gold", 41),
    ("goldblock", 41),
    ("iron", 42),
    ("ironblock", 42),
    ("doubleslab", 43),
    ("doublestep", 43),
    ("slab", 44),
    ("halfblock", 44),
    ("bricks", 45),
    ("dynamite", 46),
    ("bookcase", 47),
    ("mossycobblestone", 48),
    ("mossstone", 48),
    ("mossy", 48),
    ("mobspawner", 52),
    ("spawner", 52),
    ("woodstair", 53),
    ("woodstairs", 53),
    ("woodenstairs", 53),
    ("redstone", 55),
    ("redstonedust", 55),
    ("diamondore", 56),
    ("diamond", 57),
    ("diamondblock", 57),
    ("craftingtable", 58),
    ("crafting", 58),
    ("wheat", 59),
    ("farmland", 60),
    ("burningfurnace", 62),
    ("litfurnace", 62),
    ("sign", 63),
    ("signpost", 63),
    ("door", 64),
    ("wooddoor", 64),
    ("woodendoor", 64),
    ("track", 66),
    ("tracks", 66),
    ("rail", 66),
    ("minecarttrack", 66),
    ("cobblestair", 67),
    ("cobblestairs", 67),
    ("cobblestonestairs", 67),
    ("wallsign", 68),
    ("switch", 69),
    ("stoneplate", 70),
    ("stonepressureplate", 70),
    ("irondoor", 71),
    ("woodplate", 72),
    ("woodpressureplate", 72),
    ("redstoneore", 73),
    ("glowingredstoneore", 74),
    ("redstonetorchoff", 75),
    ("redstonetorch", 76),
    ("redstonetorchon", 76),
    ("button", 77),
    ("stonebutton", 77),
    ("snowblock", 80),
    ("sugarcane", 83),
    ("reed", 83),
    ("reeds", 83),
    ("netherstone", 87),
    ("hellrock", 87),
    ("soulsand", 88),
    ("slowsand", 88),
    ("lightstone", 89),
    ("brittlegold", 89),
    ("jackolantern", 91),
    ("pumpkinlantern", 91),
    ("cake", 92),
    ("diode", 93),
    ("repeater", 93),
    ("repeateroff", 93),
    ("repeateron", 94),
    ("lockedchest", 95),
    ("trapdoor", 96),
    ("hatch", 96),
    ("silverfishblock", 97),
    ("stonebrick", 98),
    ("stonebricks", 98),
    ("smoothbrick", 98),
    ("bigbrownmushroom", 99),
    ("bigredmushroom", 100),
    ("ironbars", 101),
    ("bars", 101),
    ("glasspane", 102),
    ("pane", 102),
    ("melon", 103),
    ("melonblock", 103),
    ("pumpkinstem", 104),
    ("melonstem", 105),
    ("vines", 106),
    ("fencegate", 107),
    ("gate", 107),
    ("brickstair", 108),
    ("brickstairs", 108),
    ("stonebrickstair", 109),
    ("stonebrickstairs", 109),
    ("smoothstairs", 109),
    ("mycelium", 110),
    ("lilypad", 111),
    ("waterlily", 111),
    ("netherbrick", 112),
    ("netherfence", 113),
    ("netherbrickfence", 113),
    ("netherbrickstair", 114),
    ("netherbrickstairs", 114),
    ("netherwart", 115),
    ("enchantmenttable", 116),
    ("enchantingtable", 116),
    ("brewingstand", 117),
    ("enderportal", 119),
    ("enderportalframe", 120),
    ("endstone", 121),
    ("enderstone", 121),
    ("dragonegg", 122),
    ("redstonelamp", 123),
    ("redstonelampoff", 123),
    ("redstonelampon", 124),
];

/// Dye colour names, indexed by wool data value.
pub const DYE_COLORS: [&str; 16] = [
    "white",
    "orange",
    "magenta",
    "light_blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "silver",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

const DYE_ALIASES: &[(&str, u8)] = &[
    ("lightblue", 3),
    ("light blue", 3),
    ("lightgreen", 5),
    ("light green", 5),
    ("grey", 7),
    ("darkgray", 7),
    ("darkgrey", 7),
    ("lightgray", 8),
    ("lightgrey", 8),
    ("light_gray", 8),
    ("light gray", 8),
    ("light grey", 8),
    ("darkgreen", 13),
    ("dark green", 13),
];

fn alias_index() -> &'static HashMap<&'static str, u16> {
    static INDEX: OnceLock<HashMap<&'static str, u16>> = OnceLock::new();
    INDEX.get_or_init(|| BLOCK_ALIASES.iter().copied().collect())
}

fn standard_index() -> &'static HashMap<&'static str, u16> {
    static INDEX: OnceLock<HashMap<&'static str, u16>> = OnceLock::new();
    INDEX.get_or_init(|| {
        STANDARD_NAMES
            .iter()
            .enumerate()
            .map(|(id, name)| (*name, id as u16))
            .collect()
    })
}

/// Look up a short block-type alias. `name` must already be lowercase.
pub fn lookup_alias(name: &str) -> Option<u16> {
    alias_index().get(name).copied()
}

/// Look up a standard block name, tolerating spaces in place of
/// underscores and stray punctuation (`"Wood Stairs"`, `"jack-o-lantern"`).
pub fn lookup_standard(name: &str) -> Option<u16> {
    let normalized = normalize_standard(name);
    standard_index().get(normalized.as_str()).copied()
}

/// Resolve a symbolic block name: aliases first, then standard names.
pub fn lookup_block(name: &str) -> Option<u16> {
    let lower = name.to_lowercase();
    lookup_alias(&lower).or_else(|| lookup_standard(&lower))
}

#[inline]
pub fn standard_name(id: u16) -> Option<&'static str> {
    STANDARD_NAMES.get(id as usize).copied()
}

pub fn lookup_dye(name: &str) -> Option<u8> {
    let lower = name.to_lowercase();
    if let Some(idx) = DYE_COLORS.iter().position(|c| *c == lower) {
        return Some(idx as u8);
    }
    DYE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, data)| *data)
}

#[inline]
pub fn dye_name(data: u8) -> Option<&'static str> {
    DYE_COLORS.get(data as usize).copied()
}

fn normalize_standard(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_alphanumeric() || ch == '_' {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
