// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors surfaced by the jotter client.
///
/// Domain failures come from [`jt_core::Error`]; this layer adds the
/// configuration and file errors of the client itself.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] jt_core::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("config not found: {0}\n  hint: create it or run without --config to use defaults")]
    ConfigNotFound(String),

    #[error("note {0} is private\n  hint: make it public from the editor to share it")]
    NotShared(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
