//! End-to-end checks of the `fivedraw` command surface through `run()`.

use fivedraw_cli::run;

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.to_vec(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn deal_is_deterministic_for_a_seed() {
    let (code_a, out_a, _) = run_capture(&["fivedraw", "deal", "--seed", "123"]);
    let (code_b, out_b, _) = run_capture(&["fivedraw", "deal", "--seed", "123"]);
    assert_eq!(code_a, 0);
    assert_eq!(code_b, 0);
    assert_eq!(out_a, out_b);
    assert!(out_a.contains("Hand: "));
    assert!(out_a.contains("Rank: "));
}

#[test]
fn different_seeds_usually_deal_differently() {
    let (_, out_a, _) = run_capture(&["fivedraw", "deal", "--seed", "1"]);
    let (_, out_b, _) = run_capture(&["fivedraw", "deal", "--seed", "2"]);
    assert_ne!(out_a, out_b);
}

#[test]
fn unknown_subcommand_exits_2_with_command_list() {
    let (code, _, err) = run_capture(&["fivedraw", "riverboat"]);
    assert_eq!(code, 2);
    assert!(err.contains("Commands:"));
    assert!(err.contains("  sim"));
}

#[test]
fn help_and_version_exit_zero() {
    let (code, out, _) = run_capture(&["fivedraw", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("play"));

    let (code, out, _) = run_capture(&["fivedraw", "--version"]);
    assert_eq!(code, 0);
    assert!(out.contains("fivedraw"));
}

#[test]
fn sim_then_stats_round_trips_the_record_stream() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("sim.jsonl");
    let log_str = log.to_string_lossy().to_string();

    let (code, out, _) = run_capture(&[
        "fivedraw", "sim", "--rounds", "10", "--bots", "3", "--seed", "99", "--output", &log_str,
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Chip conservation: ok"));

    let (code, out, err) = run_capture(&["fivedraw", "stats", "--input", &log_str]);
    assert_eq!(code, 0, "stats failed: {}", err);
    assert!(out.contains("Files: 1"));
    assert!(out.contains("Bot 1"));
    assert!(!err.contains("corrupt"), "sim output should parse cleanly");
}

#[test]
fn stats_reads_zstd_compressed_logs() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("s.jsonl");
    let log_str = plain.to_string_lossy().to_string();
    let (code, _, _) = run_capture(&[
        "fivedraw", "sim", "--rounds", "3", "--bots", "2", "--seed", "5", "--output", &log_str,
    ]);
    assert_eq!(code, 0);

    let raw = std::fs::read(&plain).unwrap();
    let compressed = zstd::stream::encode_all(raw.as_slice(), 0).unwrap();
    let zst = dir.path().join("s.jsonl.zst");
    std::fs::write(&zst, compressed).unwrap();
    std::fs::remove_file(&plain).unwrap();

    let (code, out, _) = run_capture(&["fivedraw", "stats", "--input", &zst.to_string_lossy()]);
    assert_eq!(code, 0);
    assert!(out.contains("Rounds: 3"));
}

#[test]
fn sim_rejects_invalid_table_size() {
    let (code, _, err) = run_capture(&["fivedraw", "sim", "--rounds", "1", "--bots", "9"]);
    assert_eq!(code, 2);
    let hits = err.matches("bots must be in 2..=6").count();
    assert_eq!(hits, 1, "the failure is reported once, got: {}", err);
}
