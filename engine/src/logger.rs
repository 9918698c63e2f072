use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Per-seat outcome inside a [`RoundRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSummary {
    pub name: String,
    /// Stack after the round settled.
    pub stack: u32,
    /// Chip delta across the round; negative when the seat lost chips.
    pub net: i64,
}

/// One completed round, serialized as a single JSON line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRecord {
    pub session_id: String,
    pub round: u32,
    pub seed: u64,
    pub pot: u32,
    pub winners: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_hand: Option<String>,
    pub players: Vec<PlayerSummary>,
    #[serde(default)]
    pub ts: String,
}

/// Session id in `YYYYMMDD-HHMMSS` form, taken from the wall clock.
pub fn default_session_id() -> String {
    Utc::now().format("%Y%m%d-%H%M%S").to_string()
}

/// Appends round records to a JSONL file, one line per round.
///
/// The parent directory is created on demand and the file is opened in
/// append mode, so resuming a session keeps earlier rounds intact.
#[derive(Debug)]
pub struct SessionLogger {
    path: PathBuf,
    writer: BufWriter<fs::File>,
}

impl SessionLogger {
    pub fn append(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one record, stamping `ts` with the current time, and flushes
    /// so a crash mid-session loses at most the round in progress.
    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut stamped = record.clone();
        stamped.ts = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let line = serde_json::to_string(&stamped).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Parsed contents of a session file. Lines that fail to parse are counted
/// rather than failing the whole load, so a truncated tail (crash mid-write)
/// does not block resuming.
#[derive(Debug, Default)]
pub struct SessionReplay {
    pub records: Vec<RoundRecord>,
    pub corrupt_lines: usize,
}

/// Stacks as of the last recorded round, used to resume a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub stacks: Vec<(String, u32)>,
    pub rounds_played: u32,
}

impl SessionReplay {
    pub fn latest_state(&self) -> Option<SessionState> {
        let last = self.records.last()?;
        Some(SessionState {
            stacks: last
                .players
                .iter()
                .map(|p| (p.name.clone(), p.stack))
                .collect(),
            rounds_played: last.round,
        })
    }
}

/// Parses JSONL session content line by line.
pub fn parse_records(content: &str) -> SessionReplay {
    let mut replay = SessionReplay::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<RoundRecord>(line) {
            Ok(record) => replay.records.push(record),
            Err(_) => replay.corrupt_lines += 1,
        }
    }
    replay
}
