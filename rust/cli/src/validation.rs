//! Input parsing and validation for interactive commands.
//!
//! This module parses the three per-turn prompts of the `play` command:
//! tile color, factory number, and staging row number. Color input never
//! re-prompts; unmatched names fall back to RED. Numeric input re-prompts
//! with a descriptive message, bounded by [`MAX_PROMPT_ATTEMPTS`].

use azulejo_engine::tiles::TileColor;

/// Upper bound on re-prompts for a single numeric question.
pub const MAX_PROMPT_ATTEMPTS: usize = 10;

/// Outcome of parsing a color prompt line.
#[derive(Debug, PartialEq, Eq)]
pub enum ColorChoice {
    /// One of the five canonical color names, matched case-insensitively
    Picked(TileColor),
    /// Anything else; the caller substitutes RED
    Fallback,
    /// User entered quit command (q or quit)
    Quit,
}

/// Parse user input into a tile color choice.
///
/// Input is case-folded to uppercase and matched against the canonical
/// color names. Unrecognized input is not an error: the game continues
/// with RED, which the caller reports as a warning.
///
/// # Example
///
/// ```rust
/// # use azulejo_cli::validation::{parse_color_choice, ColorChoice};
/// use azulejo_engine::tiles::TileColor;
///
/// assert_eq!(parse_color_choice("blue"), ColorChoice::Picked(TileColor::Blue));
/// assert_eq!(parse_color_choice("PURPLE"), ColorChoice::Picked(TileColor::Purple));
/// assert_eq!(parse_color_choice("q"), ColorChoice::Quit);
/// assert_eq!(parse_color_choice("mauve"), ColorChoice::Fallback);
/// ```
pub fn parse_color_choice(input: &str) -> ColorChoice {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return ColorChoice::Quit;
    }
    match TileColor::from_name(&trimmed.to_uppercase()) {
        Some(color) => ColorChoice::Picked(color),
        None => ColorChoice::Fallback,
    }
}

/// Outcome of parsing a 1-based numeric prompt line.
#[derive(Debug, PartialEq, Eq)]
pub enum IndexChoice {
    /// In-range selection, converted to a 0-based index
    Index(usize),
    /// Out-of-range or non-numeric input, with the message to show
    Retry(String),
    /// User entered quit command (q or quit)
    Quit,
}

/// Parse user input as a number in `[1, max]`, returning it 0-based.
///
/// # Example
///
/// ```rust
/// # use azulejo_cli::validation::{parse_index_choice, IndexChoice};
///
/// assert_eq!(parse_index_choice("3", 5), IndexChoice::Index(2));
/// assert_eq!(parse_index_choice("quit", 5), IndexChoice::Quit);
/// assert!(matches!(parse_index_choice("9", 5), IndexChoice::Retry(_)));
/// assert!(matches!(parse_index_choice("abc", 5), IndexChoice::Retry(_)));
/// ```
pub fn parse_index_choice(input: &str, max: usize) -> IndexChoice {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return IndexChoice::Quit;
    }
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => IndexChoice::Index(n - 1),
        Ok(_) => IndexChoice::Retry(format!(
            "Invalid choice. Please choose a number between 1 and {}.",
            max
        )),
        Err(_) => IndexChoice::Retry(format!(
            "Invalid input. Please enter a number between 1 and {}.",
            max
        )),
    }
}
