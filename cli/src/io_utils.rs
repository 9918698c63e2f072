//! File and stream helpers shared by the commands.
//!
//! Session logs are plain JSONL, but archived ones may be zstd-compressed;
//! `read_text_auto` hides the difference. Interactive commands read lines
//! through `read_input_line` so tests can drive them with a `Cursor`.

use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Reads one trimmed line from an interactive reader. `None` means EOF or a
/// read error, which interactive commands treat as an interrupt.
pub fn read_input_line(input: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a text file, transparently decompressing `.zst` and stripping a
/// UTF-8 BOM if present.
pub fn read_text_auto(path: &Path) -> std::io::Result<String> {
    let mut content = if path.extension().is_some_and(|e| e == "zst") {
        let compressed = std::fs::read(path)?;
        let raw = zstd::stream::decode_all(compressed.as_slice())?;
        String::from_utf8(raw).map_err(std::io::Error::other)?
    } else {
        std::fs::read_to_string(path)?
    };
    if let Some(rest) = content.strip_prefix('\u{feff}') {
        content = rest.to_string();
    }
    Ok(content)
}

/// Collects every `*.jsonl` and `*.jsonl.zst` file under `dir`, recursing
/// into subdirectories, sorted by path for stable output.
pub fn session_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        for entry in std::fs::read_dir(&d)? {
            let path = entry?.path();
            if path.is_dir() {
                stack.push(path);
            } else if let Some(name) = path.file_name().and_then(|f| f.to_str())
                && (name.ends_with(".jsonl") || name.ends_with(".jsonl.zst"))
            {
                found.push(path);
            }
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_input_line_trims_and_detects_eof() {
        let mut input = Cursor::new(b"  call  \n".to_vec());
        assert_eq!(read_input_line(&mut input), Some("call".to_string()));
        assert_eq!(read_input_line(&mut input), None);
    }

    #[test]
    fn test_read_text_auto_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.jsonl");
        std::fs::write(&path, "\u{feff}{\"a\":1}\n").unwrap();
        let content = read_text_auto(&path).unwrap();
        assert!(content.starts_with('{'));
    }

    #[test]
    fn test_session_files_in_finds_jsonl_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("archive");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(dir.path().join("a.jsonl"), "").unwrap();
        std::fs::write(sub.join("b.jsonl.zst"), "").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = session_files_in(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }
}
