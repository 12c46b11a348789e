//! Subcommand handlers.
//!
//! Each handler takes its parsed arguments plus `out`/`err` writers and
//! returns `Result<(), CliError>`; [`crate::run`] turns the result into an
//! exit code and prints the error once.

pub mod cfg;
pub mod dataset;
pub mod deal;
pub mod eval;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use dataset::handle_dataset_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use sim::handle_sim_command;

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use pokersim_engine::engine::Engine;

/// Resolves file/env configuration, applies command-line overrides and
/// builds an engine with one agent per seat.
///
/// Every seat gets its own agent instance; seeded agents are offset by seat
/// so random seats do not mirror each other.
pub(crate) fn build_engine(
    players: Option<usize>,
    seed: Option<u64>,
    agent: Option<&str>,
) -> Result<(Engine, ConfigResolved), CliError> {
    let resolved = config::load_with_sources()?.with_overrides(players, seed, agent)?;
    let cfg = &resolved.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let agents = (0..cfg.num_players)
        .map(|seat| pokersim_ai::create_agent(&cfg.agent, Some(seed.wrapping_add(seat as u64))))
        .collect::<Result<Vec<_>, _>>()?;
    let engine = Engine::with_agents(cfg.game_config(), Some(seed), agents)?;
    Ok((engine, resolved))
}
