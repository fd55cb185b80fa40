use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::tiles::{full_bag, Tile, NUM_TILES};

/// The tile supply for one game: an ordered sequence of tiles drained from
/// the back by factory refills. Never replenished mid-game.
#[derive(Debug)]
pub struct TileBag {
    tiles: Vec<Tile>,
    rng: ChaCha20Rng,
}

impl TileBag {
    /// Standard 100-tile bag with an even color distribution.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_count(NUM_TILES, seed)
    }

    /// Bag with an arbitrary tile count, colors assigned round-robin.
    pub fn with_count(count: usize, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep round-robin order until shuffle is called explicitly
        Self {
            tiles: full_bag(count),
            rng,
        }
    }

    /// Permute the remaining tiles in place.
    pub fn shuffle(&mut self) {
        self.tiles.shuffle(&mut self.rng);
    }

    /// Remove and return the last tile, or `None` once the bag is empty.
    /// Callers decide how to surface exhaustion; factories simply stop
    /// filling and stay short.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
