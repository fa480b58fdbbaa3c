// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log line structure with checksum verification
//!
//! Each line holds one serialized body and a CRC32 checksum of that
//! body's exact text, so a torn or hand-edited line is detected on the
//! next scan. The body is kept raw until it has been verified; the
//! checksum never depends on how a parsed body would serialize again.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// A single line of a JSON-lines log file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalEntry {
    pub body: Box<RawValue>,
    /// CRC32 checksum of the body text as written
    pub checksum: u32,
}

impl WalEntry {
    /// Serialize a body and checksum its text
    pub fn new<T: Serialize>(body: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::value::to_raw_value(body)?;
        let checksum = checksum(&body);
        Ok(Self { body, checksum })
    }

    /// Verify the checksum matches the body text
    pub fn verify(&self) -> bool {
        self.checksum == checksum(&self.body)
    }

    /// Parse the body
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.body.get())
    }

    /// Serialize to one line of JSON (without the trailing newline)
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

fn checksum(body: &RawValue) -> u32 {
    crc32fast::hash(body.get().as_bytes())
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
