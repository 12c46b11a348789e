use pokersim_engine::config::GameConfig;
use pokersim_engine::hand::EvaluationMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::str::FromStr;

pub const CONFIG_ENV: &str = "POKERSIM_CONFIG";

/// Table options plus the run-level settings the engine does not own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub num_players: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub max_rounds: usize,
    pub starting_stack: u32,
    pub evaluation: EvaluationMode,
    pub max_decision_attempts: u32,
    pub seed: Option<u64>,
    pub agent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub num_players: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub max_rounds: ValueSource,
    pub starting_stack: ValueSource,
    pub evaluation: ValueSource,
    pub max_decision_attempts: ValueSource,
    pub seed: ValueSource,
    pub agent: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            num_players: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            max_rounds: ValueSource::Default,
            starting_stack: ValueSource::Default,
            evaluation: ValueSource::Default,
            max_decision_attempts: ValueSource::Default,
            seed: ValueSource::Default,
            agent: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies `--players`/`--seed`/`--agent` style overrides and
    /// re-validates.
    pub fn with_overrides(
        mut self,
        num_players: Option<usize>,
        seed: Option<u64>,
        agent: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(n) = num_players {
            self.config.num_players = n;
            self.sources.num_players = ValueSource::Cli;
        }
        if let Some(s) = seed {
            self.config.seed = Some(s);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(a) = agent {
            self.config.agent = a.to_string();
            self.sources.agent = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        let game = GameConfig::default();
        Self {
            num_players: game.num_players,
            small_blind: game.small_blind,
            big_blind: game.big_blind,
            max_rounds: game.max_rounds,
            starting_stack: game.starting_stack,
            evaluation: game.evaluation,
            max_decision_attempts: game.max_decision_attempts,
            seed: None,
            agent: "check".into(),
        }
    }
}

impl Config {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            num_players: self.num_players,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            max_rounds: self.max_rounds,
            starting_stack: self.starting_stack,
            evaluation: self.evaluation,
            max_decision_attempts: self.max_decision_attempts,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, then the TOML file named by `POKERSIM_CONFIG`, then
/// `POKERSIM_*` variables. Empty variables are ignored.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.num_players {
            cfg.num_players = v;
            sources.num_players = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.max_rounds {
            cfg.max_rounds = v;
            sources.max_rounds = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.evaluation {
            cfg.evaluation = v;
            sources.evaluation = ValueSource::File;
        }
        if let Some(v) = f.max_decision_attempts {
            cfg.max_decision_attempts = v;
            sources.max_decision_attempts = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.agent {
            cfg.agent = v;
            sources.agent = ValueSource::File;
        }
    }

    if let Some(v) = env_parse("POKERSIM_PLAYERS")? {
        cfg.num_players = v;
        sources.num_players = ValueSource::Env;
    }
    if let Some(v) = env_parse("POKERSIM_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_parse("POKERSIM_BIG_BLIND")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_parse("POKERSIM_MAX_ROUNDS")? {
        cfg.max_rounds = v;
        sources.max_rounds = ValueSource::Env;
    }
    if let Some(v) = env_parse("POKERSIM_STARTING_STACK")? {
        cfg.starting_stack = v;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(v) = env_parse("POKERSIM_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Ok(mode) = std::env::var("POKERSIM_EVALUATION")
        && !mode.is_empty()
    {
        cfg.evaluation = parse_evaluation(&mode).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "Invalid POKERSIM_EVALUATION: {} (expected whole_set or best_five)",
                mode
            ))
        })?;
        sources.evaluation = ValueSource::Env;
    }
    if let Ok(agent) = std::env::var("POKERSIM_AGENT")
        && !agent.is_empty()
    {
        cfg.agent = agent;
        sources.agent = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    num_players: Option<usize>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    max_rounds: Option<usize>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    evaluation: Option<EvaluationMode>,
    #[serde(default)]
    max_decision_attempts: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    agent: Option<String>,
}

fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(raw) if !raw.is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", name, raw))),
        _ => Ok(None),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.game_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if !pokersim_ai::AGENT_NAMES.contains(&cfg.agent.trim().to_ascii_lowercase().as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown agent '{}' (expected one of {})",
            cfg.agent,
            pokersim_ai::AGENT_NAMES.join(", ")
        )));
    }
    Ok(())
}

fn parse_evaluation(s: &str) -> Option<EvaluationMode> {
    match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "whole_set" | "wholeset" => Some(EvaluationMode::WholeSet),
        "best_five" | "bestfive" => Some(EvaluationMode::BestFive),
        _ => None,
    }
}
