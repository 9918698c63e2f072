//! Configuration resolution for the CLI.
//!
//! Values come from three layers, lowest to highest precedence: built-in
//! defaults, a TOML file named by `FIVEDRAW_CONFIG`, then individual
//! `FIVEDRAW_*` environment variables. Every field remembers which layer
//! supplied it so `fivedraw cfg` can show the provenance.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::CliError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub bots: u32,
    pub strategy: String,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: 200,
            small_blind: 25,
            big_blind: 50,
            bots: 2,
            strategy: "random".into(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub bots: ValueSource,
    pub strategy: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            bots: ValueSource::Default,
            strategy: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

// All fields optional in the file; absent ones fall through to defaults.
#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    bots: Option<u32>,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
}

pub fn load() -> Result<Config, CliError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, CliError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FIVEDRAW_CONFIG") {
        let text = fs::read_to_string(&path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {}", path, e)))?;
        let file: FileConfig = toml::from_str(&text)
            .map_err(|e| CliError::Config(format!("cannot parse {}: {}", path, e)))?;
        if let Some(v) = file.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = file.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = file.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = file.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
        if let Some(v) = file.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = file.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(v) = std::env::var("FIVEDRAW_STACK")
        && !v.is_empty()
    {
        cfg.starting_stack = parse_env("FIVEDRAW_STACK", &v)?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("FIVEDRAW_SMALL_BLIND")
        && !v.is_empty()
    {
        cfg.small_blind = parse_env("FIVEDRAW_SMALL_BLIND", &v)?;
        sources.small_blind = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("FIVEDRAW_BIG_BLIND")
        && !v.is_empty()
    {
        cfg.big_blind = parse_env("FIVEDRAW_BIG_BLIND", &v)?;
        sources.big_blind = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("FIVEDRAW_BOTS")
        && !v.is_empty()
    {
        cfg.bots = parse_env("FIVEDRAW_BOTS", &v)?;
        sources.bots = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("FIVEDRAW_STRATEGY")
        && !v.is_empty()
    {
        cfg.strategy = v;
        sources.strategy = ValueSource::Env;
    }
    if let Ok(v) = std::env::var("FIVEDRAW_SEED")
        && !v.is_empty()
    {
        cfg.seed = Some(parse_env("FIVEDRAW_SEED", &v)?);
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("invalid {}: '{}'", name, value)))
}

pub fn validate(cfg: &Config) -> Result<(), CliError> {
    if cfg.small_blind == 0 || cfg.big_blind == 0 {
        return Err(CliError::Config("blinds must be positive".into()));
    }
    if cfg.small_blind > cfg.big_blind {
        return Err(CliError::Config(
            "small blind must not exceed big blind".into(),
        ));
    }
    if cfg.starting_stack < cfg.big_blind {
        return Err(CliError::Config(
            "starting stack must cover the big blind".into(),
        ));
    }
    if !(1..=5).contains(&cfg.bots) {
        return Err(CliError::Config("bots must be in 1..=5".into()));
    }
    if !fivedraw_ai::STRATEGY_NAMES.contains(&cfg.strategy.as_str()) {
        return Err(CliError::Config(format!(
            "unknown strategy '{}' (valid: {})",
            cfg.strategy,
            fivedraw_ai::STRATEGY_NAMES.join(", ")
        )));
    }
    Ok(())
}
