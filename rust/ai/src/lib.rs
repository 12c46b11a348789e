//! # pokersim-ai: Agents and Training Data for the Poker Simulator
//!
//! Strategies that plug into the round engine through
//! [`pokersim_engine::agent::Agent`], plus the post-processing that turns a
//! played hand into reward-annotated training samples.
//!
//! ## Core Components
//!
//! - [`simple`] - Fixed strategies: always check, always call, seeded random
//! - [`baseline`] - Rule-based agent driven by the evaluated hand category
//! - [`create_agent`] - Factory for agents by name
//! - [`training`] - Reward annotation and per-event sample extraction
//! - [`encoding`] - Integer codes for suits, ranks, cards and actions
//!
//! ## Quick Start
//!
//! ```rust
//! use pokersim_ai::create_agent;
//! use pokersim_engine::config::GameConfig;
//! use pokersim_engine::engine::Engine;
//!
//! let agent = create_agent("baseline", Some(42)).unwrap();
//! let cfg = GameConfig { num_players: 4, ..GameConfig::default() };
//! let mut engine = Engine::new(cfg, Some(42), agent).unwrap();
//! let showdown = engine.play().unwrap();
//! println!("winners: {:?}", showdown.winners);
//! ```
//!
//! ## Agent Names
//!
//! - `"check"` - Always checks (the default table behaviour)
//! - `"call"` - Calls whatever minimum bet it faces
//! - `"random"` - Weighted random actions from a seeded RNG
//! - `"baseline"` - Hand-strength driven rule set

use pokersim_engine::agent::Agent;
use thiserror::Error;

pub mod baseline;
pub mod encoding;
pub mod simple;
pub mod training;

/// Names accepted by [`create_agent`].
pub const AGENT_NAMES: [&str; 4] = ["check", "call", "random", "baseline"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown agent: {0} (expected one of: check, call, random, baseline)")]
    UnknownAgent(String),
}

/// Builds an agent by name. Matching ignores case and surrounding spaces.
///
/// `seed` only matters for agents that draw random numbers.
///
/// # Example
///
/// ```rust
/// use pokersim_ai::create_agent;
///
/// let agent = create_agent("Baseline", None).unwrap();
/// assert_eq!(agent.name(), "BaselineAgent");
/// assert!(create_agent("oracle", None).is_err());
/// ```
pub fn create_agent(name: &str, seed: Option<u64>) -> Result<Box<dyn Agent>, AiError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "check" => Ok(Box::new(simple::CheckAgent)),
        "call" => Ok(Box::new(simple::CallAgent)),
        "random" => Ok(Box::new(simple::RandomAgent::new(seed))),
        "baseline" => Ok(Box::new(baseline::BaselineAgent::new())),
        _ => Err(AiError::UnknownAgent(name.to_string())),
    }
}
