//! # Play Command
//!
//! Interactive two-player tile drafting at the terminal.
//!
//! This module provides the `handle_play_command` function driving the full
//! game session: round setup, per-turn prompts for both players, pick
//! resolution, board rendering, and end-of-game scoring.
//!
//! ## Features
//!
//! - Interactive input validation with bounded re-prompting
//! - Graceful quit handling (user can exit with 'q', 'quit', or EOF)
//! - ANSI-colored rendering of bag, factories, middle area, and boards
//! - Optional JSONL match logging for later inspection

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_floor_line, format_tiles};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{
    ColorChoice, IndexChoice, MAX_PROMPT_ATTEMPTS, parse_color_choice, parse_index_choice,
};
use azulejo_engine::board::BOARD_SIZE;
use azulejo_engine::engine::Engine;
use azulejo_engine::factory::NUM_FACTORIES;
use azulejo_engine::game::NUM_PLAYERS;
use azulejo_engine::logger::{MatchLogger, MatchRecord, TurnRecord};
use azulejo_engine::scoring::decide_winner;
use azulejo_engine::tiles::TileColor;
use std::io::{BufRead, Write};

/// Handle the play command: interactive two-player gameplay.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (default from configuration)
/// * `seed` - RNG seed for reproducibility (default: configuration, then random)
/// * `p1` / `p2` - Player display names (default from configuration)
/// * `log` - Optional JSONL file receiving the match record
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player choices
///
/// # Returns
///
/// * `Ok(())` on completed game or clean quit
/// * `Err(CliError)` on configuration errors, prompt exhaustion, or I/O errors
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    p1: Option<String>,
    p2: Option<String>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let rounds = rounds.unwrap_or(cfg.rounds);
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let names = [
        p1.unwrap_or(cfg.p1_name),
        p2.unwrap_or(cfg.p2_name),
    ];

    writeln!(out, "play: rounds={} seed={}", rounds, seed)?;

    let mut eng = Engine::new(Some(seed), rounds);
    for (player, name) in names.iter().enumerate() {
        eng.state_mut().players_mut()[player].set_name(name);
    }
    eng.shuffle();

    let mut logger = match &log {
        Some(path) => Some(MatchLogger::create(path)?),
        None => None,
    };
    let match_id = logger.as_mut().map(|l| l.next_id()).unwrap_or_default();
    let mut turns: Vec<TurnRecord> = Vec::new();

    let mut quit_requested = false;
    while !eng.state().is_over() && !quit_requested {
        let round = eng.setup_round();
        writeln!(out, "Round {}", round)?;
        for player in 0..NUM_PLAYERS {
            match take_turn(&mut eng, player, round, out, err, stdin)? {
                Some(record) => turns.push(record),
                None => {
                    quit_requested = true;
                    break;
                }
            }
        }
    }

    if quit_requested {
        writeln!(out, "Session ended.")?;
        if let Some(logger) = logger.as_mut() {
            logger.write(&MatchRecord {
                match_id,
                seed: Some(seed),
                rounds,
                turns,
                final_scores: None,
                result: None,
                ts: None,
            })?;
        }
        return Ok(());
    }

    eng.score_final();
    let scores = eng.state().scores();
    writeln!(out, "Final Scores:")?;
    writeln!(out, "{}: {}", names[0], scores[0])?;
    writeln!(out, "{}: {}", names[1], scores[1])?;
    let result = match decide_winner(scores) {
        Some(winner) => {
            writeln!(out, "{} wins!", names[winner])?;
            format!("{} wins", names[winner])
        }
        None => {
            writeln!(out, "It's a tie!")?;
            "tie".to_string()
        }
    };

    if let Some(logger) = logger.as_mut() {
        logger.write(&MatchRecord {
            match_id,
            seed: Some(seed),
            rounds,
            turns,
            final_scores: Some(scores.to_vec()),
            result: Some(result),
            ts: None,
        })?;
    }
    Ok(())
}

/// Run one player's turn: render the table, collect the three choices,
/// apply the pick, and show the updated board. Returns `None` when the
/// player quit.
fn take_turn(
    eng: &mut Engine,
    player: usize,
    round: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<TurnRecord>, CliError> {
    let name = eng.state().players()[player].name().to_string();
    writeln!(out, "{}'s turn:", name)?;
    writeln!(
        out,
        "Tile Bag Contents (remaining tiles: {}):",
        eng.bag_remaining()
    )?;
    writeln!(out, "{}", format_tiles(eng.bag().tiles()))?;
    for (i, factory) in eng.factories().iter().enumerate() {
        writeln!(out, "Factory {}: {}", i + 1, format_tiles(factory.tiles()))?;
    }
    writeln!(out, "Middle Area: {}", format_tiles(eng.middle().tiles()))?;

    write!(out, "Select tile color for {}: ", name)?;
    out.flush()?;
    let color = match read_stdin_line(stdin) {
        None => return Ok(None),
        Some(line) => match parse_color_choice(&line) {
            ColorChoice::Quit => return Ok(None),
            ColorChoice::Picked(color) => color,
            ColorChoice::Fallback => {
                ui::display_warning(err, "Unrecognized color name, defaulting to RED.")?;
                TileColor::Red
            }
        },
    };

    let factory_prompt = format!("Select factory for {} (1-{}): ", name, NUM_FACTORIES);
    let Some(factory_idx) = prompt_number(&factory_prompt, NUM_FACTORIES, out, stdin)? else {
        return Ok(None);
    };

    let row_prompt = format!("Select line for {} (1-{}): ", name, BOARD_SIZE);
    let Some(row) = prompt_number(&row_prompt, BOARD_SIZE, out, stdin)? else {
        return Ok(None);
    };

    let outcome = eng.apply_pick(player, color, factory_idx, row)?;
    if outcome.row_conflict {
        writeln!(
            out,
            "Cannot place color {} in row {} as it already exists.",
            color.name(),
            row + 1
        )?;
    }

    let board = &eng.state().players()[player];
    writeln!(out, "{}'s Board:", name)?;
    write!(out, "{}", format_board(board))?;
    writeln!(out, "{}'s Floor Line: {}", name, format_floor_line(board))?;

    Ok(Some(TurnRecord {
        round,
        player,
        color,
        factory: factory_idx,
        row,
        outcome,
    }))
}

/// Prompt for a number in `[1, max]`, re-asking on invalid input. Returns
/// the 0-based index, or `None` on quit/EOF. Exhausting the attempt budget
/// is an error.
fn prompt_number(
    prompt: &str,
    max: usize,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<usize>, CliError> {
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        write!(out, "{}", prompt)?;
        out.flush()?;
        match read_stdin_line(stdin) {
            None => return Ok(None),
            Some(line) => match parse_index_choice(&line, max) {
                IndexChoice::Quit => return Ok(None),
                IndexChoice::Index(idx) => return Ok(Some(idx)),
                IndexChoice::Retry(msg) => writeln!(out, "{}", msg)?,
            },
        }
    }
    Err(CliError::InvalidInput(format!(
        "no valid selection after {} attempts",
        MAX_PROMPT_ATTEMPTS
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_play(
        rounds: Option<u32>,
        seed: Option<u64>,
        log: Option<String>,
        input: &str,
    ) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            rounds, seed, None, None, log, &mut out, &mut err, &mut stdin,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_quit_at_first_prompt() {
        let (result, out, _) = run_play(Some(1), Some(42), None, "q\n");
        assert!(result.is_ok(), "quit should be a clean exit");
        assert!(out.contains("play: rounds=1 seed=42"));
        assert!(out.contains("Round 1"));
        assert!(out.contains("Session ended."));
        assert!(!out.contains("Final Scores:"));
    }

    #[test]
    fn test_eof_quits_cleanly() {
        let (result, out, _) = run_play(Some(1), Some(42), None, "");
        assert!(result.is_ok(), "EOF should be a clean exit");
        assert!(out.contains("Session ended."));
    }

    #[test]
    fn test_full_single_round_game() {
        let (result, out, _) = run_play(Some(1), Some(42), None, "red\n1\n5\nblue\n2\n5\n");
        assert!(result.is_ok());
        assert!(out.contains("Final Scores:"));
        assert!(out.contains("wins!") || out.contains("It's a tie!"));
    }

    #[test]
    fn test_unknown_color_warns_and_defaults() {
        let (result, _, err) = run_play(Some(1), Some(42), None, "mauve\n1\n5\nq\n");
        assert!(result.is_ok());
        assert!(
            err.contains("defaulting to RED"),
            "should warn about the color fallback"
        );
    }

    #[test]
    fn test_numeric_prompt_retries_then_accepts() {
        let (result, out, _) = run_play(Some(1), Some(42), None, "red\nabc\n99\n1\n5\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("Invalid input. Please enter a number between 1 and 5."));
        assert!(out.contains("Invalid choice. Please choose a number between 1 and 5."));
    }

    #[test]
    fn test_numeric_prompt_attempt_budget() {
        let junk = "x\n".repeat(MAX_PROMPT_ATTEMPTS);
        let (result, _, _) = run_play(Some(1), Some(42), None, &format!("red\n{}", junk));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let (result, _, err) = run_play(Some(0), Some(42), None, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("rounds must be >= 1"));
    }

    #[test]
    fn test_match_log_written_on_completion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.jsonl");
        let (result, _, _) = run_play(
            Some(1),
            Some(42),
            Some(path.to_string_lossy().into_owned()),
            "red\n1\n5\nblue\n2\n5\n",
        );
        assert!(result.is_ok());

        let content = std::fs::read_to_string(&path).unwrap();
        let record: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert_eq!(record["seed"], 42);
        assert_eq!(record["rounds"], 1);
        assert_eq!(record["turns"].as_array().unwrap().len(), 2);
        assert!(record["final_scores"].is_array());
        assert!(record["result"].is_string());
    }

    #[test]
    fn test_match_log_on_quit_has_no_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quit.jsonl");
        let (result, _, _) = run_play(
            Some(1),
            Some(42),
            Some(path.to_string_lossy().into_owned()),
            "q\n",
        );
        assert!(result.is_ok());

        let content = std::fs::read_to_string(&path).unwrap();
        let record: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
        assert!(record["final_scores"].is_null());
        assert!(record["result"].is_null());
    }

    #[test]
    fn test_player_names_flow_through_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"q\n".to_vec());
        let result = handle_play_command(
            Some(1),
            Some(42),
            Some("Ana".to_string()),
            Some("Befa".to_string()),
            None,
            &mut out,
            &mut err,
            &mut stdin,
        );
        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Ana's turn:"));
    }
}
