use crate::config::EventConfig;
use crate::error::{RankError, RankResult};
use crate::render;
use crate::source::PageSource;
use crate::standings::{aggregate, extract, PlayerTotal, SectionStandings};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SectionInfo {
    pub id: String,
    pub label: String,
}

/// Everything the renderers need: section columns, ranked players and the
/// moment the ranking was built.
#[derive(Serialize, Debug, Clone)]
pub struct SeasonRanking {
    pub sections: Vec<SectionInfo>,
    pub players: Vec<PlayerTotal>,
    pub updated_at: DateTime<Utc>,
}

/// Fetches and extracts every configured section, in parallel.
///
/// The result keeps configuration order. A section that cannot be fetched is
/// logged and comes back empty.
pub fn collect_sections<S>(
    config: &EventConfig,
    source: &S,
    dump_dir: Option<&Path>,
) -> Vec<SectionStandings>
where
    S: PageSource + ?Sized,
{
    config
        .sections
        .par_iter()
        .map(|section| {
            let text = match source.fetch(section) {
                Ok(text) => text,
                Err(e) => {
                    warn!("⚠️  {}", e);
                    return SectionStandings::new(section.id.as_str(), Vec::new());
                }
            };

            if let Some(dir) = dump_dir {
                dump_text(dir, &section.id, &text);
            }

            let records = extract(&text);
            if records.is_empty() {
                warn!("⚠️  No standings found for {}", section.id);
            } else {
                info!("✅ {}: {} players", section.id, records.len());
            }
            SectionStandings::new(section.id.as_str(), records)
        })
        .collect()
}

fn dump_text(dir: &Path, id: &str, text: &str) {
    let path = dir.join(format!("{}.txt", id));
    let result = fs::create_dir_all(dir).and_then(|_| fs::write(&path, text));
    match result {
        Ok(()) => info!("💾 Saved page text to {}", path.display()),
        Err(e) => warn!("Could not save page text to {}: {}", path.display(), e),
    }
}

/// Combines extracted sections into the season ranking.
///
/// Fails with [`RankError::NoData`] when no section produced a single record,
/// so an empty ranking is never published.
pub fn build_ranking(
    config: &EventConfig,
    sections: &[SectionStandings],
) -> RankResult<SeasonRanking> {
    if SectionStandings::total_records(sections) == 0 {
        return Err(RankError::NoData);
    }

    let players = aggregate(sections);
    info!("📊 Combined {} unique players", players.len());

    Ok(SeasonRanking {
        sections: config
            .sections
            .iter()
            .map(|s| SectionInfo {
                id: s.id.clone(),
                label: s.label(),
            })
            .collect(),
        players,
        updated_at: Utc::now(),
    })
}

/// Fetch, extract and aggregate in one call.
pub fn run_update<S>(
    config: &EventConfig,
    source: &S,
    dump_dir: Option<&Path>,
) -> RankResult<SeasonRanking>
where
    S: PageSource + ?Sized,
{
    let sections = collect_sections(config, source, dump_dir);
    build_ranking(config, &sections)
}

/// Writes the HTML widget, the raw JSON, the widget JSON and, when
/// requested, the CSV export. Returns the written paths.
pub fn write_outputs(
    ranking: &SeasonRanking,
    config: &EventConfig,
    out_dir: &Path,
    with_csv: bool,
) -> RankResult<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let out = &config.output;
    let mut written = Vec::new();

    let html_path = out_dir.join(&out.html);
    fs::write(&html_path, render::html::widget(ranking, &config.widget))?;
    written.push(html_path);

    let json_path = out_dir.join(&out.json);
    fs::write(&json_path, render::json::standings(&ranking.players)?)?;
    written.push(json_path);

    let widget_path = out_dir.join(&out.widget_json);
    fs::write(&widget_path, render::json::widget_json(ranking)?)?;
    written.push(widget_path);

    let csv_name = match (&out.csv, with_csv) {
        (Some(name), _) => Some(name.clone()),
        (None, true) => Some("standings.csv".to_string()),
        (None, false) => None,
    };
    if let Some(name) = csv_name {
        let csv_path = out_dir.join(name);
        let writer = BufWriter::new(File::create(&csv_path)?);
        render::csv::write_standings(writer, ranking)?;
        written.push(csv_path);
    }

    for path in &written {
        info!("📁 Wrote {}", path.display());
    }
    Ok(written)
}
