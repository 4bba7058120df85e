// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text helpers for note cards.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::note::{Note, UNTITLED};
use crate::tags::Tags;

// Hard-coded pattern, verified by the tests below.
static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"<[^>]*>") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Default preview length on dashboard cards.
pub const PREVIEW_CHARS: usize = 180;

/// Human-friendly age of a timestamp relative to `now`.
///
/// Under a week old reads as "just now" / "N min ago" / "N hr ago" /
/// "N days ago"; older dates read as "Oct 5".
pub fn relative_time(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = timestamp else {
        return "Unknown date".to_string();
    };
    let diff = (now - ts).num_seconds();

    if diff < MINUTE {
        "just now".to_string()
    } else if diff < HOUR {
        format!("{} min ago", diff / MINUTE)
    } else if diff < DAY {
        format!("{} hr ago", diff / HOUR)
    } else if diff < WEEK {
        let days = diff / DAY;
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else {
        ts.format("%b %-d").to_string()
    }
}

/// Plain-text preview: markup stripped, cut to `max` chars with "...".
pub fn preview(text: Option<&str>, max: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let plain = HTML_TAG_RE.replace_all(text, "");
    if plain.chars().count() <= max {
        plain.into_owned()
    } else {
        let mut cut: String = plain.chars().take(max).collect();
        cut.push_str("...");
        cut
    }
}

pub fn display_title(note: &Note) -> &str {
    match note.title.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => UNTITLED,
    }
}

/// First tag plus a `+N` overflow count, e.g. `("work", Some("+2"))`.
pub fn tag_summary(tags: &Tags) -> Option<(&str, Option<String>)> {
    let first = tags.iter().next()?;
    let rest = tags.len() - 1;
    Some((first, (rest > 0).then(|| format!("+{rest}"))))
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
