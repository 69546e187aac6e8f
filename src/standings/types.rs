use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One player's line in a single section's standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub rank: u32,
    pub name: String,
    /// 0 when the page shows no rating.
    pub rating: u32,
    pub points: f64,
}

/// Extracted records of one section, tagged with the section id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionStandings {
    pub section: String,
    pub records: Vec<SectionRecord>,
}

impl SectionStandings {
    pub fn new(section: impl Into<String>, records: Vec<SectionRecord>) -> Self {
        Self {
            section: section.into(),
            records,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of record counts over all sections. Zero means there is nothing to publish.
    pub fn total_records(all: &[SectionStandings]) -> usize {
        all.iter().map(|s| s.records.len()).sum()
    }
}

/// A player's combined result over every section of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTotal {
    pub rank: usize,
    pub name: String,
    pub rating: u32,
    pub total_points: f64,
    /// Points per section id. A missing key means the player did not play that section.
    pub sections: BTreeMap<String, f64>,
}

impl PlayerTotal {
    pub(crate) fn new(name: &str, rating: u32) -> Self {
        Self {
            rank: 0,
            name: name.to_string(),
            rating,
            total_points: 0.0,
            sections: BTreeMap::new(),
        }
    }

    pub fn points_in(&self, section: &str) -> Option<f64> {
        self.sections.get(section).copied()
    }
}
