// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON Lines reader for seed files.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Reads every record of a JSONL file.
///
/// Blank lines are skipped. A missing file reads as empty. A record that
/// fails to parse is reported with its 1-based line number.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| Error::BadRecord {
            path: path.display().to_string(),
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
