// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jt-core operations.

use thiserror::Error;

/// All possible errors that can occur in jt-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("note not found: {0}")]
    NotFound(String),

    #[error("not signed in\n  hint: sign in before opening the dashboard or saving notes")]
    NotSignedIn,

    #[error("note {0} belongs to another user")]
    NotOwner(String),

    #[error("invalid tag: '{0}'\n  hint: tags must be non-empty after trimming")]
    InvalidTag(String),

    #[error("invalid sort order: '{0}'\n  hint: valid orders are: asc, desc")]
    InvalidSortOrder(String),

    #[error("invalid color: '{0}'")]
    InvalidColor(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("upload error: {0}")]
    Upload(String),

    #[error("subscription closed")]
    SubscriptionClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path}:{line}: {source}")]
    BadRecord {
        path: String,
        line: usize,
        source: serde_json::Error,
    },
}

/// A specialized Result type for jt-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
