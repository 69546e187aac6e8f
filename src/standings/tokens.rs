//! Line classifiers for rendered standings text.
//!
//! A standings page, once reduced to its visible text, is a flat run of short
//! lines: rank, optional flag text, player name, rating, gender, score,
//! performance, rating delta. None of them are labelled, so each classifier
//! here recognises one kind of line purely by its shape.

use regex::Regex;
use std::sync::LazyLock;
use strum_macros::{Display, EnumString};

pub const HALF_POINT: char = '½';

/// Highest score a player can hold in one section.
pub const MAX_POINTS: f64 = 15.0;

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+/[0-9]+").expect("static regex"));

static SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(½|[0-9]+([.,][0-9]+|½)?)$").expect("static regex"));

/// Gender column values. They sit between name, rating and score and are always skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Gender {
    Male,
    Female,
}

pub fn is_gender_marker(line: &str) -> bool {
    line.parse::<Gender>().is_ok()
}

fn all_ascii_digits(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// A line made of digits only.
pub fn is_rank_marker(line: &str) -> bool {
    all_ascii_digits(line)
}

/// Rank value of a marker line. `None` for non-markers and `0`.
///
/// Markers too long for `u32` saturate to `u32::MAX`; the row is still read.
pub fn parse_rank(line: &str) -> Option<u32> {
    if !is_rank_marker(line) {
        return None;
    }
    match line.parse::<u32>() {
        Ok(0) => None,
        Ok(rank) => Some(rank),
        // Only overflow can fail on a digits-only line.
        Err(_) => Some(u32::MAX),
    }
}

/// The line right before the standings list: an "N items" counter or a round
/// progress fraction such as `5/7`.
pub fn is_block_marker(line: &str) -> bool {
    line.contains("items") || FRACTION.is_match(line)
}

pub fn is_name_candidate(line: &str) -> bool {
    if is_gender_marker(line) || line.chars().count() <= 2 {
        return false;
    }
    // Scores and other numbers, with or without separators.
    if line.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return false;
    }
    // Rating delta arrows.
    if line.starts_with('↑') || line.starts_with('↓') {
        return false;
    }
    // Guest player tag printed above the real name.
    if line.starts_with("extern") {
        return false;
    }
    line.chars().any(char::is_alphabetic)
}

/// Ratings are printed as a bare 3 or 4 digit number.
pub fn parse_rating(line: &str) -> Option<u32> {
    if !(3..=4).contains(&line.len()) || !all_ascii_digits(line) {
        return None;
    }
    line.parse().ok()
}

/// Parses a score such as `3`, `3.5`, `3,5`, `3½` or `½`.
///
/// Values outside `0..=15` are rejected so performance ratings and other
/// numbers further down the row are never mistaken for points.
pub fn parse_score(line: &str) -> Option<f64> {
    if !SCORE.is_match(line) {
        return None;
    }
    let normalized = line.replacen(',', ".", 1).replacen(HALF_POINT, ".5", 1);
    let value: f64 = normalized.parse().ok()?;
    (0.0..=MAX_POINTS).contains(&value).then_some(value)
}
