//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! configuration settings with their sources (default, environment, or
//! configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "rounds": {
//!     "value": 5,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "p1_name": {
            "value": config.p1_name,
            "source": sources.p1_name,
        },
        "p2_name": {
            "value": config.p2_name,
            "source": sources.p2_name,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let _json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");

        assert!(output.contains("rounds"), "should contain rounds");
        assert!(output.contains("seed"), "should contain seed");
        assert!(output.contains("p1_name"), "should contain p1_name");
        assert!(output.contains("p2_name"), "should contain p2_name");
        assert!(output.contains("value"), "should contain value fields");
        assert!(output.contains("source"), "should contain source fields");
    }

    #[test]
    fn test_cfg_writes_pretty_json() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);

        if result.is_ok() {
            let output = String::from_utf8(out).unwrap();
            assert!(output.contains('\n'), "output should be pretty-printed");
            assert!(output.contains("  "), "output should be indented");
        }
    }

    #[test]
    fn test_cfg_no_error_output_on_success() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);

        if result.is_ok() {
            let error_output = String::from_utf8(err).unwrap();
            assert!(
                error_output.is_empty(),
                "should not write to stderr on success"
            );
        }
    }
}
