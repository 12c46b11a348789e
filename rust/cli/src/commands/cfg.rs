//! Configuration command handler.
//!
//! Prints the resolved configuration as pretty JSON, one object per field
//! with its value and where it came from:
//!
//! ```json
//! {
//!   "num_players": {
//!     "value": 6,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// `CliError::Config` when the file or an environment variable is invalid.
pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "num_players": { "value": config.num_players, "source": sources.num_players },
        "small_blind": { "value": config.small_blind, "source": sources.small_blind },
        "big_blind": { "value": config.big_blind, "source": sources.big_blind },
        "max_rounds": { "value": config.max_rounds, "source": sources.max_rounds },
        "starting_stack": { "value": config.starting_stack, "source": sources.starting_stack },
        "evaluation": { "value": config.evaluation, "source": sources.evaluation },
        "max_decision_attempts": {
            "value": config.max_decision_attempts,
            "source": sources.max_decision_attempts,
        },
        "seed": { "value": config.seed, "source": sources.seed },
        "agent": { "value": config.agent, "source": sources.agent },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
