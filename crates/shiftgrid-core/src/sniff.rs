//! Quick structural read of a raw calendar text block.
//!
//! This is not part of the extraction pipeline; it answers "does this text
//! look like a week-based calendar" before a caller commits to parsing it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}\b").expect("valid day marker pattern"));

const MAX_LINES_PER_WEEK: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatGuess {
    WeekBased,
    Unknown,
}

impl std::fmt::Display for FormatGuess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatGuess::WeekBased => write!(f, "week_based"),
            FormatGuess::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarStructure {
    pub day_marker_count: usize,
    pub lines_per_week_estimate: usize,
    pub format_guess: FormatGuess,
}

/// Count standalone one- or two-digit numbers on the first non-blank line
/// and estimate how many text lines make up one week.
///
/// Blank lines are ignored everywhere, including in the lines-per-week
/// estimate, so layout spacing does not inflate it. A first line with no
/// day markers at all is `Unknown`, not `WeekBased`: a week needs at least
/// one day number and at most seven.
pub fn sniff_structure(text: &str) -> CalendarStructure {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    let day_marker_count = lines
        .first()
        .map(|line| DAY_MARKER.find_iter(line).count())
        .unwrap_or(0);

    let format_guess = if (1..=7).contains(&day_marker_count) {
        FormatGuess::WeekBased
    } else {
        FormatGuess::Unknown
    };

    CalendarStructure {
        day_marker_count,
        lines_per_week_estimate: lines.len().min(MAX_LINES_PER_WEEK),
        format_guess,
    }
}
