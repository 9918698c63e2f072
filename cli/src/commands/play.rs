//! Interactive play: one human seat against bot opponents.
//!
//! Drives the engine round by round, printing new event-log lines and the
//! table snapshot whenever the engine suspends on the human seat, and
//! prompting for a betting action or an exchange selection. One
//! `RoundRecord` is appended per completed round; `--resume` restores
//! stacks and the round counter from an existing session log.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use fivedraw_engine::engine::{Phase, RoundEngine};
use fivedraw_engine::logger::{SessionLogger, default_session_id, parse_records};
use fivedraw_engine::player::Player;

use crate::commands::{bot_seats, print_new_log, record_for_round, stack_for};
use crate::config;
use crate::error::CliError;
use crate::io_utils::{read_input_line, read_text_auto};
use crate::ui;
use crate::validation::{ParseResult, parse_bet_action, parse_exchange_indices};

#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    bots: Option<u32>,
    strategy: Option<String>,
    seed: Option<u64>,
    session: Option<String>,
    resume: Option<String>,
    name: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(b) = bots {
        cfg.bots = b;
    }
    if let Some(s) = strategy {
        cfg.strategy = s;
    }
    if let Some(s) = seed {
        cfg.seed = Some(s);
    }
    config::validate(&cfg)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let human_name = name.unwrap_or_else(|| "You".to_string());

    // Resumed stacks (by name) and the round counter to continue from.
    let mut resumed_stacks: Vec<(String, u32)> = Vec::new();
    let mut round_base = 0u32;
    if let Some(resume_path) = resume.as_deref() {
        let content = read_text_auto(Path::new(resume_path))?;
        let replay = parse_records(&content);
        if replay.corrupt_lines > 0 {
            ui::write_warning(
                err,
                &format!("{} corrupt line(s) skipped in {}", replay.corrupt_lines, resume_path),
            )?;
        }
        match replay.latest_state() {
            Some(state) => {
                resumed_stacks = state.stacks;
                round_base = state.rounds_played;
                writeln!(out, "Resumed after round {}", round_base)?;
            }
            None => {
                ui::write_warning(err, &format!("{} holds no usable rounds", resume_path))?;
            }
        }
    }

    let mut seats = vec![Player::human(
        &human_name,
        stack_for(&human_name, &resumed_stacks, cfg.starting_stack),
    )];
    seats.extend(bot_seats(
        cfg.bots,
        &cfg.strategy,
        cfg.starting_stack,
        &resumed_stacks,
        seed,
    )?);

    let session_id = session.unwrap_or_else(default_session_id);
    let log_path = session_log_path(resume.as_deref(), &session_id);
    let mut logger = SessionLogger::append(&log_path)?;

    writeln!(
        out,
        "Session {} | blinds {}/{} | seed {} | log {}",
        session_id,
        cfg.small_blind,
        cfg.big_blind,
        seed,
        logger.path().display()
    )?;

    let mut engine = RoundEngine::new(seats, cfg.small_blind, cfg.big_blind, seed);
    let mut printed = 0usize;

    loop {
        let before: Vec<(String, u32)> = engine
            .players()
            .iter()
            .map(|p| (p.name().to_string(), p.stack()))
            .collect();
        engine.start_round()?;
        if engine.phase() == Phase::GameOver {
            print_new_log(out, &engine, &mut printed)?;
            break;
        }

        if !drive_human_turns(&mut engine, out, err, input, &mut printed)? {
            writeln!(out, "Quit mid-round; this round is not recorded.")?;
            return Ok(());
        }
        print_new_log(out, &engine, &mut printed)?;

        let round = round_base + engine.rounds_played();
        if let Some(record) = record_for_round(&session_id, seed, round, &engine, &before) {
            logger.write(&record)?;
        }

        write!(out, "Press Enter for the next round, q to quit: ")?;
        out.flush()?;
        match read_input_line(input) {
            // EOF at the round boundary is a normal way to stop
            None => break,
            Some(line) if is_quit(&line) => break,
            Some(_) => {}
        }
    }

    writeln!(out, "Rounds recorded: {}", engine.rounds_played())?;
    Ok(())
}

/// Prompts for human decisions until the round resolves. Returns
/// `Ok(false)` when the user quits mid-round; `CliError::Interrupted` when
/// stdin closes mid-prompt.
fn drive_human_turns(
    engine: &mut RoundEngine,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
    printed: &mut usize,
) -> Result<bool, CliError> {
    while engine.awaiting_human() {
        print_new_log(out, engine, printed)?;
        let view = engine.view();
        ui::render_table(out, &view)?;

        if view.phase == Phase::Draw {
            write!(out, "Discard slots (e.g. 0 2 4, or none): ")?;
            out.flush()?;
            let Some(line) = read_input_line(input) else {
                return Err(CliError::Interrupted("stdin closed mid-round".into()));
            };
            if is_quit(&line) {
                return Ok(false);
            }
            match parse_exchange_indices(&line, view.hand.len()) {
                Ok(picks) => engine.apply_exchange(&picks)?,
                Err(msg) => ui::write_error(err, &msg)?,
            }
        } else {
            write!(out, "Action (check/call/fold/raise <total>/q): ")?;
            out.flush()?;
            let Some(line) = read_input_line(input) else {
                return Err(CliError::Interrupted("stdin closed mid-round".into()));
            };
            match parse_bet_action(&line) {
                ParseResult::Action(action) => engine.apply_action(action)?,
                ParseResult::Quit => return Ok(false),
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        }
    }
    Ok(true)
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

/// Resuming keeps writing to the resumed file; otherwise records go to
/// `data/session-<id>.jsonl`.
fn session_log_path(resume: Option<&str>, session_id: &str) -> PathBuf {
    match resume {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from("data").join(format!("session-{}.jsonl", session_id)),
    }
}
