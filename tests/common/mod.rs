#![allow(dead_code)] // Not every test binary uses every helper.

use chessrank::config::{EventConfig, SectionConfig};
use chessrank::standings::{SectionRecord, SectionStandings};
use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixtures_dir().join(name)).expect("fixture should exist")
}

pub fn record(rank: u32, name: &str, rating: u32, points: f64) -> SectionRecord {
    SectionRecord {
        rank,
        name: name.to_string(),
        rating,
        points,
    }
}

pub fn section(id: &str, records: Vec<SectionRecord>) -> SectionStandings {
    SectionStandings::new(id, records)
}

/// Builder for page text shaped like a rendered standings page.
///
/// Every row is followed by three filler lines (rating delta, performance
/// delta, game tally) so integer scores never sit close enough to the next
/// name to be read as a rank marker.
pub struct PageBuilder {
    lines: Vec<String>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            lines: ["Tornelo", "Standings", "Blok 1", "Round 5/7", "12 items", "#", "Name"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn without_header() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn row(mut self, rank: u32, name: &str, rating: &str, gender: &str, score: &str) -> Self {
        let rank = rank.to_string();
        for l in [rank.as_str(), name, rating, gender, score, "↑7", "+15", "3-1-1"] {
            self.lines.push(l.to_string());
        }
        self
    }

    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn two_section_config() -> EventConfig {
    let mut config = EventConfig {
        base_url: Some("https://example.org/chess/events/intern".to_string()),
        sections: vec![SectionConfig::new("blok-1"), SectionConfig::new("blok-2")],
        widget: Default::default(),
        output: Default::default(),
    };
    config.resolve().expect("valid config");
    config
}
