//! A small grep over files: fixed-string matching with the classic flag
//! set, returning matching lines (or file names with `-l`).

use anyhow::{Context, Result};
use std::fs;

#[derive(Debug, Default, Clone, Copy)]
pub struct Flags {
    /// -n: prefix each match with its 1-based line number
    line_numbers: bool,
    /// -l: print only the names of files containing matches
    names_only: bool,
    /// -i: case-insensitive comparison
    insensitive: bool,
    /// -v: invert the match
    invert: bool,
    /// -x: the whole line must match
    entire_line: bool,
}

impl Flags {
    /// Build from command-line style flags; unknown flags are ignored.
    pub fn new(flags: &[&str]) -> Self {
        let mut parsed = Flags::default();
        for &flag in flags {
            match flag {
                "-n" => parsed.line_numbers = true,
                "-l" => parsed.names_only = true,
                "-i" => parsed.insensitive = true,
                "-v" => parsed.invert = true,
                "-x" => parsed.entire_line = true,
                _ => {}
            }
        }
        parsed
    }
}

/// Search `files` for `pattern` under `flags`.
///
/// Matching lines are returned in file order; when more than one file is
/// searched, each line is prefixed with its file name. Fails if any file
/// cannot be read.
pub fn grep(pattern: &str, flags: &Flags, files: &[&str]) -> Result<Vec<String>> {
    let mut results = Vec::new();
    let multiple = files.len() > 1;

    for &file in files {
        let content =
            fs::read_to_string(file).with_context(|| format!("cannot read {}", file))?;
        for (index, line) in content.lines().enumerate() {
            if !line_matches(line, pattern, flags) {
                continue;
            }
            if flags.names_only {
                results.push(file.to_string());
                break;
            }
            let mut entry = String::new();
            if multiple {
                entry.push_str(file);
                entry.push(':');
            }
            if flags.line_numbers {
                entry.push_str(&(index + 1).to_string());
                entry.push(':');
            }
            entry.push_str(line);
            results.push(entry);
        }
    }
    Ok(results)
}

fn line_matches(line: &str, pattern: &str, flags: &Flags) -> bool {
    let (line, pattern) = if flags.insensitive {
        (line.to_lowercase(), pattern.to_lowercase())
    } else {
        (line.to_string(), pattern.to_string())
    };
    let found = if flags.entire_line {
        line == pattern
    } else {
        line.contains(&pattern)
    };
    found != flags.invert
}
