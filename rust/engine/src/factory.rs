use crate::bag::TileBag;
use crate::tiles::Tile;

/// Number of factories on the table.
pub const NUM_FACTORIES: usize = 5;

/// Tiles a factory holds when fully stocked.
pub const FACTORY_CAPACITY: usize = 4;

/// A bounded group of tiles offered for selection each turn. Filled from the
/// bag at round setup and emptied entirely whenever a player picks from it.
#[derive(Debug, Clone, Default)]
pub struct Factory {
    tiles: Vec<Tile>,
}

impl Factory {
    pub fn new() -> Self {
        Self {
            tiles: Vec::with_capacity(FACTORY_CAPACITY),
        }
    }

    /// Factory pre-loaded with specific tiles, for scripted setups.
    pub fn with_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Top up to capacity from the bag. Stops early when the bag runs dry,
    /// leaving the factory visibly short.
    pub fn refill_from(&mut self, bag: &mut TileBag) {
        while self.tiles.len() < FACTORY_CAPACITY {
            match bag.draw() {
                Some(tile) => self.tiles.push(tile),
                None => break,
            }
        }
    }

    /// Drain every tile out of the factory.
    pub fn take_all(&mut self) -> Vec<Tile> {
        std::mem::take(&mut self.tiles)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

/// Communal pool receiving every tile rejected from a factory pick.
/// Grows only; the described turn loop never consumes from it.
#[derive(Debug, Clone, Default)]
pub struct MiddleArea {
    tiles: Vec<Tile>,
}

impl MiddleArea {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
