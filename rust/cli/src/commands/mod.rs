//! Command handler modules for the Azulejo CLI.
//!
//! This module contains individual handler functions for each CLI subcommand.
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum
//!
//! # Example
//!
//! ```rust,ignore
//! use azulejo_cli::commands::handle_cfg_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_cfg_command(&mut out, &mut err).expect("Command failed");
//! ```

pub mod cfg;
pub mod deal;
pub mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
