use crate::bag::TileBag;
use crate::board::{PlayerBoard, BOARD_SIZE};
use crate::errors::GameError;
use crate::factory::{Factory, MiddleArea, NUM_FACTORIES};
use crate::game::{GameState, NUM_PLAYERS};
use crate::rules::{resolve_pick, PickOutcome};
use crate::scoring::{score_board, FinalScore};
use crate::tiles::TileColor;

/// Core game engine that orchestrates a two-player game. Owns the tile bag,
/// the factories, the middle area, and the game state for the whole game.
///
/// # Examples
///
/// ```
/// use azulejo_engine::engine::Engine;
///
/// // Create an engine with a fixed seed and the default round count
/// let mut engine = Engine::new(Some(12345), 5);
///
/// // Shuffle the bag, then stock the factories for round 1
/// engine.shuffle();
/// let round = engine.setup_round();
/// assert_eq!(round, 1);
///
/// // Five factories of four tiles leave 80 tiles in the bag
/// assert_eq!(engine.bag_remaining(), 80);
/// ```
#[derive(Debug)]
pub struct Engine {
    bag: TileBag,
    factories: [Factory; NUM_FACTORIES],
    middle: MiddleArea,
    state: GameState,
}

impl Engine {
    pub fn new(seed: Option<u64>, num_rounds: u32) -> Self {
        let seed = seed.unwrap_or(0xA2_1E10);
        let bag = TileBag::new_with_seed(seed);
        let players = [PlayerBoard::new("Player 1"), PlayerBoard::new("Player 2")];
        Self {
            bag,
            factories: std::array::from_fn(|_| Factory::new()),
            middle: MiddleArea::new(),
            state: GameState::new(players, num_rounds),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }
    pub fn bag_remaining(&self) -> usize {
        self.bag.remaining()
    }

    pub fn factories(&self) -> &[Factory; NUM_FACTORIES] {
        &self.factories
    }

    pub fn middle(&self) -> &MiddleArea {
        &self.middle
    }

    pub fn shuffle(&mut self) {
        self.bag.shuffle();
    }

    /// Start the next round: top every factory up to capacity from the bag.
    /// Near bag exhaustion factories stay short or empty, which remains
    /// visible through the render path. Returns the 1-based round number.
    pub fn setup_round(&mut self) -> u32 {
        for factory in &mut self.factories {
            factory.refill_from(&mut self.bag);
        }
        self.state.begin_round()
    }

    /// Apply one validated turn choice: `player` takes `color` from factory
    /// `factory_idx` (0-based) into staging row `row` (0-based).
    pub fn apply_pick(
        &mut self,
        player: usize,
        color: TileColor,
        factory_idx: usize,
        row: usize,
    ) -> Result<PickOutcome, GameError> {
        if player >= NUM_PLAYERS {
            return Err(GameError::InvalidPlayerIndex { index: player });
        }
        if factory_idx >= NUM_FACTORIES {
            return Err(GameError::InvalidFactoryIndex {
                index: factory_idx,
                max: NUM_FACTORIES,
            });
        }
        if row >= BOARD_SIZE {
            return Err(GameError::InvalidRowIndex {
                index: row,
                max: BOARD_SIZE,
            });
        }

        let board = &mut self.state.players_mut()[player];
        Ok(resolve_pick(
            board,
            &mut self.factories[factory_idx],
            &mut self.middle,
            color,
            row,
        ))
    }

    /// End-of-game scoring for both players, applied once after the final
    /// round. Returns the per-player breakdowns in player order.
    pub fn score_final(&mut self) -> [FinalScore; NUM_PLAYERS] {
        let players = self.state.players_mut();
        [score_board(&mut players[0]), score_board(&mut players[1])]
    }
}
