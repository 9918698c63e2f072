//! Interactive session flow: records written per round, and resume.

use std::io::Cursor;
use std::path::Path;

use fivedraw_cli::commands::handle_play_command;
use fivedraw_engine::logger::parse_records;

// Always goes through --resume so records land in the tempdir; `resume =
// false` empties the file first, which behaves like a fresh session.
fn play_into(log: &Path, resume: bool, script: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(script.as_bytes().to_vec());
    if !resume {
        std::fs::write(log, "").unwrap();
    }
    handle_play_command(
        Some(1),
        Some("tight".to_string()),
        Some(11),
        None,
        Some(log.to_string_lossy().to_string()),
        Some("Dana".to_string()),
        &mut out,
        &mut err,
        &mut stdin,
    )
    .expect("play session");
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn each_completed_round_appends_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("session.jsonl");

    // fold two rounds, then quit at the boundary prompt
    let (out, _) = play_into(&log, false, "fold\n\nfold\nq\n");
    assert!(out.contains("Rounds recorded: 2"));

    let replay = parse_records(&std::fs::read_to_string(&log).unwrap());
    assert_eq!(replay.corrupt_lines, 0);
    assert_eq!(replay.records.len(), 2);
    assert_eq!(replay.records[0].round, 1);
    assert_eq!(replay.records[1].round, 2);
    // folding both rounds costs Dana her blinds
    let dana = replay.records[1]
        .players
        .iter()
        .find(|p| p.name == "Dana")
        .unwrap();
    assert!(dana.stack < 200);
}

#[test]
fn resume_continues_stacks_and_round_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("session.jsonl");

    let (_, _) = play_into(&log, false, "fold\nq\n");
    let first = parse_records(&std::fs::read_to_string(&log).unwrap());
    assert_eq!(first.records.len(), 1);

    let (out, _) = play_into(&log, true, "fold\nq\n");
    assert!(out.contains("Resumed after round 1"));

    let both = parse_records(&std::fs::read_to_string(&log).unwrap());
    assert_eq!(both.records.len(), 2);
    assert_eq!(both.records[1].round, 2);
    // the second round started from the first round's closing stacks
    for after in &both.records[1].players {
        let closing = both.records[0]
            .players
            .iter()
            .find(|p| p.name == after.name)
            .unwrap();
        assert_eq!(after.stack as i64 - after.net, closing.stack as i64);
    }
}

#[test]
fn chips_are_conserved_across_a_recorded_round() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("session.jsonl");
    let (_, _) = play_into(&log, false, "fold\nq\n");

    let replay = parse_records(&std::fs::read_to_string(&log).unwrap());
    let record = &replay.records[0];
    let net_sum: i64 = record.players.iter().map(|p| p.net).sum();
    assert_eq!(net_sum, 0, "a round never creates or destroys chips");
    let stack_sum: u32 = record.players.iter().map(|p| p.stack).sum();
    assert_eq!(stack_sum, 400);
}
