// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed note color palette.
//!
//! Notes without a usable stored color get one derived from their id, so the
//! same note always renders in the same color across snapshot pushes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Palette entries in display order. The first entry is the default.
pub const PALETTE: [&str; 7] = [
    "#fff0f7", "#ffd6e7", "#ffb6d9", "#ff92c2", "#ffe2f0", "#ffc2e2", "#ffffff",
];

/// A color drawn from [`PALETTE`], stored as its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(usize);

impl Color {
    /// Returns the color at `index`, if the palette has one.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < PALETTE.len()).then_some(Color(index))
    }

    /// Looks up a hex string in the palette (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        PALETTE
            .iter()
            .position(|c| c.eq_ignore_ascii_case(hex.trim()))
            .map(Color)
    }

    /// Deterministic fallback color for a note id.
    pub fn for_id(id: &str) -> Self {
        let hash = Sha256::digest(id.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash[..8]);
        let n = u64::from_be_bytes(prefix);
        Color((n % PALETTE.len() as u64) as usize)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn hex(&self) -> &'static str {
        PALETTE[self.0]
    }

    /// All palette entries in order.
    pub fn all() -> impl Iterator<Item = Color> {
        (0..PALETTE.len()).map(Color)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color(0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.hex().to_string()
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
