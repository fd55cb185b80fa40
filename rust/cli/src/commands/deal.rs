//! Deal command handler for seeded round-setup inspection.
//!
//! This module provides the `deal` command which shuffles a fresh bag,
//! stocks the five factories, and prints their contents together with the
//! remaining bag count. The command supports optional seeding for
//! deterministic output.

use crate::error::CliError;
use crate::formatters::format_tiles;
use azulejo_engine::engine::Engine;
use azulejo_engine::game::DEFAULT_ROUNDS;
use std::io::Write;

/// Handle the deal command.
///
/// Fills the factories from a freshly shuffled bag and displays each
/// factory's tiles plus the number of tiles left in the bag. Supports
/// optional seeding for reproducibility.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut eng = Engine::new(Some(base_seed), DEFAULT_ROUNDS);
    eng.shuffle();
    eng.setup_round();

    writeln!(out, "Seed: {}", base_seed)?;
    for (i, factory) in eng.factories().iter().enumerate() {
        writeln!(out, "Factory {}: {}", i + 1, format_tiles(factory.tiles()))?;
    }
    writeln!(out, "Remaining in bag: {}", eng.bag_remaining())?;
    Ok(())
}
