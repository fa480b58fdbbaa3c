// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log scanning with corruption detection
//!
//! Invalid lines (checksum mismatch or parse errors) mark the truncation
//! point: everything before them is kept, everything from them on is not.

use super::entry::WalEntry;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Where and why a scan stopped early
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corruption {
    pub line: u64,
    pub reason: String,
}

/// Result of scanning a log file
#[derive(Debug)]
pub struct Scan<T> {
    /// Bodies of every valid line before the first invalid one
    pub bodies: Vec<T>,
    /// Byte length of the valid prefix
    pub valid_len: u64,
    pub corruption: Option<Corruption>,
}

/// Scan a log file; a missing file scans as empty
///
/// `accept` may reject a well-formed body (for example, one that breaks
/// ordering), which is treated like any other corruption.
pub fn scan<T, F>(path: &Path, mut accept: F) -> io::Result<Scan<T>>
where
    T: DeserializeOwned,
    F: FnMut(&T) -> Result<(), String>,
{
    let mut scan = Scan {
        bodies: Vec::new(),
        valid_len: 0,
        corruption: None,
    };

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(scan),
        Err(e) => return Err(e),
    };

    let mut reader = BufReader::new(file);
    let mut position: u64 = 0;
    let mut line_number: u64 = 0;

    loop {
        let mut line = String::new();
        let bytes_read = match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(n) => n,
            // Non-UTF-8 bytes: a torn write
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                scan.corruption = Some(Corruption {
                    line: line_number + 1,
                    reason: e.to_string(),
                });
                break;
            }
            Err(e) => return Err(e),
        };
        line_number += 1;
        position += bytes_read as u64;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            scan.valid_len = position;
            continue;
        }

        // A line without its newline was cut short mid-write
        if !line.ends_with('\n') {
            scan.corruption = Some(Corruption {
                line: line_number,
                reason: "unterminated line".to_string(),
            });
            break;
        }

        let entry = match WalEntry::from_line(trimmed) {
            Ok(e) => e,
            Err(e) => {
                scan.corruption = Some(Corruption {
                    line: line_number,
                    reason: e.to_string(),
                });
                break;
            }
        };

        if !entry.verify() {
            scan.corruption = Some(Corruption {
                line: line_number,
                reason: "checksum mismatch".to_string(),
            });
            break;
        }

        let body: T = match entry.decode() {
            Ok(body) => body,
            Err(e) => {
                scan.corruption = Some(Corruption {
                    line: line_number,
                    reason: e.to_string(),
                });
                break;
            }
        };

        if let Err(reason) = accept(&body) {
            scan.corruption = Some(Corruption {
                line: line_number,
                reason,
            });
            break;
        }

        scan.bodies.push(body);
        scan.valid_len = position;
    }

    Ok(scan)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
