//! # azulejo-engine: Tile-Drafting Game Engine Core
//!
//! A deterministic rules engine for a two-player tile-placement board game.
//! Provides game state management, placement resolution, end-of-game scoring,
//! and match logging with reproducible RNG for replayable games.
//!
//! ## Core Modules
//!
//! - [`tiles`] - Tile representation (TileColor, Tile) and bag construction
//! - [`bag`] - Deterministic bag shuffling with ChaCha20 RNG
//! - [`factory`] - Factory groups and the communal middle area
//! - [`board`] - Player boards: wall, staging triangle, floor line
//! - [`rules`] - Placement validation and pick resolution
//! - [`scoring`] - End-of-game line scoring and floor penalties
//! - [`engine`] - Main game orchestration and round setup
//! - [`game`] - Game state aggregate and round bookkeeping
//! - [`logger`] - Match history and TurnRecord serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use azulejo_engine::engine::Engine;
//! use azulejo_engine::tiles::TileColor;
//!
//! let mut engine = Engine::new(Some(42), 5);
//! engine.shuffle();
//! engine.setup_round();
//!
//! // Player 0 takes all RED tiles from factory 0 into staging row 2
//! let outcome = engine.apply_pick(0, TileColor::Red, 0, 2).unwrap();
//! assert!(outcome.placed + outcome.to_middle + outcome.to_floor <= 4);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use azulejo_engine::bag::TileBag;
//!
//! // Same seed produces same shuffle
//! let mut bag1 = TileBag::new_with_seed(42);
//! let mut bag2 = TileBag::new_with_seed(42);
//! bag1.shuffle();
//! bag2.shuffle();
//! assert_eq!(bag1.tiles(), bag2.tiles());
//! ```

pub mod bag;
pub mod board;
pub mod engine;
pub mod errors;
pub mod factory;
pub mod game;
pub mod logger;
pub mod rules;
pub mod scoring;
pub mod tiles;
