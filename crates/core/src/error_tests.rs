// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    not_found = { Error::NotFound("abc123".into()), "abc123" },
    not_signed_in = { Error::NotSignedIn, "not signed in" },
    not_owner = { Error::NotOwner("n1".into()), "another user" },
    invalid_tag = { Error::InvalidTag("  ".into()), "invalid tag" },
    invalid_sort = { Error::InvalidSortOrder("sideways".into()), "asc, desc" },
    store = { Error::Store("permission denied".into()), "permission denied" },
    upload = { Error::Upload("too large".into()), "too large" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
