//! Bot-only simulation: run rounds without a human seat and summarize.
//!
//! Useful for soak-testing the engine and comparing strategies. Optionally
//! appends the same `RoundRecord` stream the interactive session writes,
//! so `stats` works on simulation output unchanged.

use std::collections::BTreeMap;
use std::io::Write;

use fivedraw_engine::engine::{Phase, RoundEngine};
use fivedraw_engine::logger::{SessionLogger, default_session_id};

use crate::commands::{bot_seats, record_for_round};
use crate::config;
use crate::error::CliError;

pub fn handle_sim_command(
    rounds: u32,
    bots: Option<u32>,
    strategy: Option<String>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let bots = bots.unwrap_or_else(|| cfg.bots.max(2));
    if !(2..=6).contains(&bots) {
        return Err(CliError::InvalidInput("bots must be in 2..=6".to_string()));
    }
    let strategy = strategy.unwrap_or(cfg.strategy);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let seats = bot_seats(bots, &strategy, cfg.starting_stack, &[], seed)?;
    let mut engine = RoundEngine::new(seats, cfg.small_blind, cfg.big_blind, seed);
    let initial_chips = engine.total_chips();

    let session_id = default_session_id();
    let mut logger = match output.as_deref() {
        Some(path) => Some(SessionLogger::append(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: {} rounds, {} '{}' bots, blinds {}/{}, seed {}",
        rounds, bots, strategy, cfg.small_blind, cfg.big_blind, seed
    )?;

    let mut wins: BTreeMap<String, u32> = BTreeMap::new();
    for _ in 0..rounds {
        let before: Vec<(String, u32)> = engine
            .players()
            .iter()
            .map(|p| (p.name().to_string(), p.stack()))
            .collect();
        engine.start_round()?;
        if engine.phase() == Phase::GameOver {
            writeln!(out, "Game over after {} rounds", engine.rounds_played())?;
            break;
        }
        if let Some(result) = engine.last_result() {
            for winner in &result.winners {
                *wins.entry(winner.clone()).or_insert(0) += 1;
            }
        }
        if let Some(logger) = logger.as_mut() {
            let round = engine.rounds_played();
            if let Some(record) = record_for_round(&session_id, seed, round, &engine, &before) {
                logger.write(&record)?;
            }
        }
    }

    writeln!(out, "Rounds played: {}", engine.rounds_played())?;
    for player in engine.players() {
        writeln!(
            out,
            "  {}: {} win(s), {} chips",
            player.name(),
            wins.get(player.name()).copied().unwrap_or(0),
            player.stack()
        )?;
    }
    if engine.total_chips() == initial_chips {
        writeln!(out, "Chip conservation: ok ({} chips)", initial_chips)?;
    } else {
        // should be unreachable; any mismatch is an engine bug worth seeing
        return Err(CliError::InvalidInput(format!(
            "chip conservation violated: started {}, ended {}",
            initial_chips,
            engine.total_chips()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_sim(rounds: u32, output: Option<String>) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let result = handle_sim_command(
            rounds,
            Some(3),
            Some("random".to_string()),
            Some(7),
            output,
            &mut out,
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_sim_conserves_chips() {
        let (result, out) = run_sim(20, None);
        assert!(result.is_ok());
        assert!(out.contains("Chip conservation: ok"));
    }

    #[test]
    fn test_sim_rejects_zero_rounds() {
        let (result, _) = run_sim(0, None);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_sim_rejects_bad_table_size() {
        let mut out = Vec::new();
        let result = handle_sim_command(1, Some(7), None, Some(1), None, &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_sim_writes_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.jsonl");
        let (result, _) = run_sim(5, Some(path.to_string_lossy().to_string()));
        assert!(result.is_ok());
        let content = std::fs::read_to_string(&path).unwrap();
        let replay = fivedraw_engine::logger::parse_records(&content);
        assert_eq!(replay.corrupt_lines, 0);
        assert!(!replay.records.is_empty());
        assert!(replay.records.len() <= 5);
    }

    #[test]
    fn test_sim_same_seed_is_reproducible() {
        let (_, a) = run_sim(10, None);
        let (_, b) = run_sim(10, None);
        assert_eq!(a, b);
    }
}
