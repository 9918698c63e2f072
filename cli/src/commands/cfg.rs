//! Show the resolved configuration.
//!
//! Prints every field with the layer that supplied it (default, file, or
//! environment) as pretty JSON, so precedence problems are visible at a
//! glance.

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "starting_stack": { "value": config.starting_stack, "source": sources.starting_stack },
        "small_blind":    { "value": config.small_blind,    "source": sources.small_blind },
        "big_blind":      { "value": config.big_blind,      "source": sources.big_blind },
        "bots":           { "value": config.bots,           "source": sources.bots },
        "strategy":       { "value": config.strategy,       "source": sources.strategy },
        "seed":           { "value": config.seed,           "source": sources.seed },
    });
    let rendered = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
