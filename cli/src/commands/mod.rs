//! Command handlers for the `fivedraw` CLI.
//!
//! One module per subcommand, each exposing a single
//! `handle_<command>_command` function that takes injected output streams
//! (and a `BufRead` where the command is interactive) and returns
//! `Result<(), CliError>`. Shared table-building and record helpers live
//! here.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use std::io::Write;

use fivedraw_engine::engine::RoundEngine;
use fivedraw_engine::logger::{PlayerSummary, RoundRecord};
use fivedraw_engine::player::Player;

use crate::error::CliError;

/// Builds `count` bot seats named `Bot 1`, `Bot 2`, … with the given
/// strategy, each with its own RNG stream derived from the session seed.
/// A missing stack entry falls back to `default_stack` (fresh seats).
pub(crate) fn bot_seats(
    count: u32,
    strategy: &str,
    default_stack: u32,
    stacks: &[(String, u32)],
    seed: u64,
) -> Result<Vec<Player>, CliError> {
    let mut seats = Vec::with_capacity(count as usize);
    for i in 0..count {
        let name = format!("Bot {}", i + 1);
        let bot = fivedraw_ai::create_strategy(strategy, seed.wrapping_add(i as u64 + 1))
            .ok_or_else(|| {
                CliError::Config(format!(
                    "unknown strategy '{}' (valid: {})",
                    strategy,
                    fivedraw_ai::STRATEGY_NAMES.join(", ")
                ))
            })?;
        let stack = stack_for(&name, stacks, default_stack);
        seats.push(Player::bot(name, stack, bot));
    }
    Ok(seats)
}

pub(crate) fn stack_for(name: &str, stacks: &[(String, u32)], default_stack: u32) -> u32 {
    stacks
        .iter()
        .find(|(n, _)| n == name)
        .map(|&(_, s)| s)
        .unwrap_or(default_stack)
}

/// Builds the persistence record for the round that just settled.
/// `before` holds each seat's stack at round start, for the net deltas.
pub(crate) fn record_for_round(
    session_id: &str,
    seed: u64,
    round: u32,
    engine: &RoundEngine,
    before: &[(String, u32)],
) -> Option<RoundRecord> {
    let result = engine.last_result()?;
    let players = engine
        .players()
        .iter()
        .map(|p| PlayerSummary {
            name: p.name().to_string(),
            stack: p.stack(),
            net: p.stack() as i64 - stack_for(p.name(), before, p.stack()) as i64,
        })
        .collect();
    Some(RoundRecord {
        session_id: session_id.to_string(),
        round,
        seed,
        pot: result.pot,
        winners: result.winners.clone(),
        winning_hand: result.winning_hand.map(str::to_string),
        players,
        ts: String::new(),
    })
}

/// Prints engine log lines added since the last call and moves the cursor.
pub(crate) fn print_new_log(
    out: &mut dyn Write,
    engine: &RoundEngine,
    printed: &mut usize,
) -> std::io::Result<()> {
    for line in &engine.log()[*printed..] {
        writeln!(out, "{}", line)?;
    }
    *printed = engine.log().len();
    Ok(())
}
