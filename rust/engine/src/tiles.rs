use serde::{Deserialize, Serialize};

/// Number of distinct tile colors in the game.
pub const NUM_COLORS: usize = 5;

/// Total number of tiles in a fresh bag.
pub const NUM_TILES: usize = 100;

/// Represents one of the five tile colors.
/// Used as the single attribute of [`Tile`]; the enumeration order is fixed
/// and drives the round-robin bag construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum TileColor {
    /// Red tile
    Red,
    /// Yellow tile
    Yellow,
    /// Blue tile
    Blue,
    /// Green tile
    Green,
    /// Purple tile
    Purple,
}

impl TileColor {
    /// Canonical uppercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            TileColor::Red => "RED",
            TileColor::Yellow => "YELLOW",
            TileColor::Blue => "BLUE",
            TileColor::Green => "GREEN",
            TileColor::Purple => "PURPLE",
        }
    }

    /// Look up a color by its canonical name. Matching is exact against the
    /// uppercase names; callers case-fold input first.
    pub fn from_name(name: &str) -> Option<TileColor> {
        all_colors().into_iter().find(|c| c.name() == name)
    }

    pub fn from_index(v: usize) -> TileColor {
        match v % NUM_COLORS {
            0 => TileColor::Red,
            1 => TileColor::Yellow,
            2 => TileColor::Blue,
            3 => TileColor::Green,
            _ => TileColor::Purple,
        }
    }
}

/// Represents a single tile. Tiles are the fundamental unit of the game,
/// moving from the bag through factories to player boards and the middle area.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Tile {
    /// The color of the tile
    pub color: TileColor,
}

pub fn all_colors() -> [TileColor; NUM_COLORS] {
    [
        TileColor::Red,
        TileColor::Yellow,
        TileColor::Blue,
        TileColor::Green,
        TileColor::Purple,
    ]
}

/// Build the contents of a fresh bag: `count` tiles with colors assigned
/// round-robin over the enumeration, so every color appears `count / 5` times
/// when `count` is divisible by the number of colors.
pub fn full_bag(count: usize) -> Vec<Tile> {
    let mut v = Vec::with_capacity(count);
    for i in 0..count {
        v.push(Tile {
            color: TileColor::from_index(i),
        });
    }
    v
}
