use crate::error::{RankError, RankResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

#[derive(Args, Debug, Clone)]
pub struct FetchParams {
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    /// Keep fetched pages on disk and reuse them while fresh.
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
    /// Cache lifetime. 0 disables reuse.
    #[arg(long, default_value_t = 30)]
    pub cache_minutes: u64,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_dir: None,
            cache_minutes: 30,
        }
    }
}

/// The event definition file: which sections make up the season and where
/// the published files go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "🏆 Seizoenstand".to_string(),
            subtitle: "Gecombineerde resultaten van alle blokken".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub html: String,
    pub json: String,
    pub widget_json: String,
    pub csv: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
            html: "standings.html".to_string(),
            json: "standings.json".to_string(),
            widget_json: "tornelo-data.json".to_string(),
            csv: None,
        }
    }
}

impl SectionConfig {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: None,
            url: None,
        }
    }

    /// Display label, derived from the id when none is configured.
    pub fn label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| label_from_id(&self.id))
    }
}

/// `blok-1` -> `Blok 1`
pub fn label_from_id(id: &str) -> String {
    let spaced = id.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl EventConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RankResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RankError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> RankResult<Self> {
        let mut config: EventConfig = serde_json::from_str(content)?;
        config.resolve()?;
        Ok(config)
    }

    /// Validates the section list and fills in every section's URL.
    pub fn resolve(&mut self) -> RankResult<()> {
        if self.sections.is_empty() {
            return Err(RankError::Config("At least one section is required".into()));
        }

        let mut seen = HashSet::new();
        for section in &mut self.sections {
            let id = section.id.trim();
            if id.is_empty() {
                return Err(RankError::Config("Section id must not be empty".into()));
            }
            if !seen.insert(id.to_string()) {
                return Err(RankError::Config(format!("Duplicate section id '{}'", id)));
            }

            if section.url.is_none() {
                let base = self.base_url.as_deref().ok_or_else(|| {
                    RankError::Config(format!(
                        "Section '{}' has no url and no base_url is set",
                        id
                    ))
                })?;
                section.url = Some(format!(
                    "{}/standings/section/{}",
                    base.trim_end_matches('/'),
                    id
                ));
            }
        }
        Ok(())
    }

    pub fn labels(&self) -> Vec<String> {
        self.sections.iter().map(SectionConfig::label).collect()
    }
}
