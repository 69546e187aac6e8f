//! Heuristic parser for the visible text of a standings page.
//!
//! The page offers no usable markup, so records are recovered from line
//! positions alone. Each rank marker opens a candidate; the candidate becomes
//! a [`SectionRecord`] only when a name and a score are found inside fixed
//! windows after it. Anything else is dropped and scanning moves on.

use super::tokens::{
    is_block_marker, is_gender_marker, is_name_candidate, is_rank_marker, parse_rank,
    parse_rating, parse_score,
};
use super::types::SectionRecord;
use std::collections::HashSet;
use tracing::debug;

/// Lines after a rank marker that may hold the player name.
pub const NAME_WINDOW: usize = 4;

/// Lines after the name that may hold the rating and the score.
pub const DETAIL_WINDOW: usize = 9;

/// Trimmed, non-empty lines in page order.
pub fn split_lines(page_text: &str) -> Vec<&str> {
    page_text
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Index of the first line of the standings list.
///
/// Falls back to `0` when the page carries no block marker.
pub fn find_block_start(lines: &[&str]) -> usize {
    lines
        .iter()
        .position(|l| is_block_marker(l))
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Extracts one section's standings from rendered page text.
///
/// Records come back in the order their rank markers were found, with later
/// duplicates of a name removed.
pub fn extract(page_text: &str) -> Vec<SectionRecord> {
    let lines = split_lines(page_text);
    let start = find_block_start(&lines);

    let mut candidates = 0usize;
    let mut records = Vec::new();
    for i in start..lines.len() {
        if !is_rank_marker(lines[i]) {
            continue;
        }
        candidates += 1;
        if let Some(record) = read_candidate(&lines, i) {
            records.push(record);
        }
    }

    let parsed = records.len();
    let records = dedup_by_name(records);
    debug!(
        "Extracted {} records from {} lines ({} candidates, {} discarded, {} duplicates)",
        records.len(),
        lines.len(),
        candidates,
        candidates - parsed,
        parsed - records.len()
    );
    records
}

/// Keeps the first record of every name, preserving order.
pub fn dedup_by_name(records: Vec<SectionRecord>) -> Vec<SectionRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.name.clone()))
        .collect()
}

fn read_candidate(lines: &[&str], marker: usize) -> Option<SectionRecord> {
    let rank = parse_rank(lines[marker])?;
    let name_at = find_name(lines, marker)?;
    let (rating, points) = find_rating_and_points(lines, name_at)?;

    Some(SectionRecord {
        rank,
        name: lines[name_at].to_string(),
        rating,
        points,
    })
}

fn find_name(lines: &[&str], marker: usize) -> Option<usize> {
    let end = (marker + 1 + NAME_WINDOW).min(lines.len());
    (marker + 1..end).find(|&j| is_name_candidate(lines[j]))
}

/// Rating first, then the first in-range score after it.
///
/// Scores are only accepted once a rating line has been seen, so an unrated
/// row never yields a record.
fn find_rating_and_points(lines: &[&str], name_at: usize) -> Option<(u32, f64)> {
    let end = (name_at + 1 + DETAIL_WINDOW).min(lines.len());
    let mut rating = None;

    for &line in &lines[name_at + 1..end] {
        if is_gender_marker(line) {
            continue;
        }
        match rating {
            None => rating = parse_rating(line),
            Some(r) => {
                if let Some(points) = parse_score(line) {
                    return Some((r, points));
                }
            }
        }
    }
    None
}
