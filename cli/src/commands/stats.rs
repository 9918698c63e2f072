//! Session log aggregation.
//!
//! Reads one session file or every `*.jsonl`/`*.jsonl.zst` under a
//! directory, and reports rounds played, wins and chip net per player, the
//! stacks of the latest record, and how many corrupt lines were skipped.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use fivedraw_engine::logger::{RoundRecord, parse_records};

use crate::error::CliError;
use crate::io_utils::{read_text_auto, session_files_in};
use crate::ui;

pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let files = if path.is_dir() {
        session_files_in(path)?
    } else {
        vec![path.to_path_buf()]
    };
    if files.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no session files under {}",
            input
        )));
    }

    let mut rounds = 0u64;
    let mut corrupt = 0usize;
    let mut wins: BTreeMap<String, u64> = BTreeMap::new();
    let mut net: BTreeMap<String, i64> = BTreeMap::new();
    let mut latest: Option<RoundRecord> = None;

    for file in &files {
        let content = read_text_auto(file)?;
        let replay = parse_records(&content);
        corrupt += replay.corrupt_lines;
        for record in replay.records {
            rounds += 1;
            for winner in &record.winners {
                *wins.entry(winner.clone()).or_insert(0) += 1;
            }
            for player in &record.players {
                *net.entry(player.name.clone()).or_insert(0) += player.net;
            }
            latest = Some(record);
        }
    }

    writeln!(out, "Files: {}", files.len())?;
    writeln!(out, "Rounds: {}", rounds)?;
    for (name, delta) in &net {
        writeln!(
            out,
            "  {}: {} win(s), net {:+}",
            name,
            wins.get(name).copied().unwrap_or(0),
            delta
        )?;
    }
    if let Some(last) = &latest {
        writeln!(out, "Latest stacks (round {}):", last.round)?;
        for player in &last.players {
            writeln!(out, "  {}: {}", player.name, player.stack)?;
        }
    }
    if corrupt > 0 {
        ui::write_warning(err, &format!("{} corrupt line(s) skipped", corrupt))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_engine::logger::{PlayerSummary, SessionLogger};

    fn record(round: u32, winner: &str) -> RoundRecord {
        RoundRecord {
            session_id: "20250101-000000".to_string(),
            round,
            seed: 1,
            pot: 100,
            winners: vec![winner.to_string()],
            winning_hand: Some("One Pair".to_string()),
            players: vec![
                PlayerSummary {
                    name: "A".to_string(),
                    stack: 250,
                    net: 50,
                },
                PlayerSummary {
                    name: "B".to_string(),
                    stack: 150,
                    net: -50,
                },
            ],
            ts: String::new(),
        }
    }

    #[test]
    fn test_stats_aggregates_wins_and_net() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.jsonl");
        {
            let mut logger = SessionLogger::append(&path).unwrap();
            logger.write(&record(1, "A")).unwrap();
            logger.write(&record(2, "A")).unwrap();
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_stats_command(path.to_string_lossy().to_string(), &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rounds: 2"));
        assert!(text.contains("A: 2 win(s), net +100"));
        assert!(text.contains("B: 0 win(s), net -100"));
        assert!(text.contains("Latest stacks (round 2):"));
    }

    #[test]
    fn test_stats_skips_corrupt_lines_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s.jsonl");
        let mut content = serde_json::to_string(&record(1, "B")).unwrap();
        content.push_str("\n{not json}\n");
        std::fs::write(&path, content).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_stats_command(path.to_string_lossy().to_string(), &mut out, &mut err).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Rounds: 1"));
        assert!(String::from_utf8(err).unwrap().contains("1 corrupt line(s)"));
    }

    #[test]
    fn test_stats_reads_directories_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("archive");
        std::fs::create_dir(&sub).unwrap();
        {
            let mut a = SessionLogger::append(dir.path().join("a.jsonl")).unwrap();
            a.write(&record(1, "A")).unwrap();
            let mut b = SessionLogger::append(sub.join("b.jsonl")).unwrap();
            b.write(&record(1, "B")).unwrap();
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_stats_command(dir.path().to_string_lossy().to_string(), &mut out, &mut err)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Files: 2"));
        assert!(text.contains("Rounds: 2"));
    }

    #[test]
    fn test_stats_missing_file_is_io_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command("no-such-file.jsonl".to_string(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
