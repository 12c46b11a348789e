//! Simulation command: plays hands back to back on one table.
//!
//! Stacks carry over from hand to hand; a seat that has busted is folded
//! by the engine. Every settled hand can be appended to a JSONL hand
//! history.
//!
//! # Environment Variables
//!
//! - `POKERSIM_SIM_BREAK_AFTER`: stop after N hands and exit as interrupted

use crate::commands::build_engine;
use crate::error::CliError;
use pokersim_engine::logger::{HandLogger, HandRecord};
use std::io::Write;
use std::path::Path;

pub const BREAK_AFTER_ENV: &str = "POKERSIM_SIM_BREAK_AFTER";

/// Handle the sim command.
///
/// # Errors
///
/// `InvalidInput` for `hands == 0`, `Config` for an invalid table or an
/// unknown agent, `Engine` when a hand fails, `Io` when the history cannot
/// be written, and `Interrupted` when `POKERSIM_SIM_BREAK_AFTER` stops the
/// run early. Hands written before the interruption stay on disk.
pub fn handle_sim_command(
    hands: u64,
    output: Option<&Path>,
    seed: Option<u64>,
    agent: Option<&str>,
    players: Option<usize>,
    out: &mut dyn Write,
    _err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let (mut engine, resolved) = build_engine(players, seed, agent)?;
    let mut logger = output.map(HandLogger::create).transpose()?;

    let break_after = std::env::var(BREAK_AFTER_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok());

    tracing::info!(
        hands,
        seed = engine.seed(),
        players = resolved.config.num_players,
        agent = %resolved.config.agent,
        "simulation started"
    );

    let mut completed = 0u64;
    while completed < hands {
        engine.reset();
        engine.play()?;
        if let Some(log) = logger.as_mut() {
            let hand_id = log.next_id();
            log.write(&HandRecord::from_engine(&engine, hand_id))?;
        }
        completed += 1;

        if let Some(b) = break_after
            && completed == b
            && completed < hands
        {
            writeln!(out, "Interrupted: saved {}/{}", completed, hands)?;
            return Err(CliError::Interrupted(format!(
                "saved {}/{} hands",
                completed, hands
            )));
        }
    }

    writeln!(out, "Simulated: {} hands", completed)?;
    let stacks: Vec<String> = engine
        .stacks_by_id()
        .iter()
        .map(|s| s.to_string())
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(" "))?;
    if let Some(p) = output {
        writeln!(out, "History: {}", p.display())?;
    }
    Ok(())
}
