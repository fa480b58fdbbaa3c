// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Account and contract addresses

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid address {input:?}: expected 0x followed by 40 hex digits")]
pub struct AddressError {
    pub input: String,
}

/// A 20-byte address, stored as lowercase `0x`-prefixed hex
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub const LEN: usize = 20;

    /// Build an address from raw bytes
    pub fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        let mut hex = String::with_capacity(2 + Self::LEN * 2);
        hex.push_str("0x");
        for byte in bytes {
            hex.push_str(&format!("{:02x}", byte));
        }
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| AddressError {
                input: s.to_string(),
            })?;

        if digits.len() != Self::LEN * 2 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError {
                input: s.to_string(),
            });
        }

        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
