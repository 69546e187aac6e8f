//! Where section pages come from.
//!
//! The extractor only needs the rendered text of a page; these sources hide
//! whether that text was fetched live, read from a saved dump or served from
//! the local cache.

mod cache;
mod http;

pub use cache::CachedSource;
pub use http::HttpSource;

use crate::config::SectionConfig;
use crate::error::{RankError, RankResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait PageSource: Sync {
    /// Visible text of the section's standings page.
    fn fetch(&self, section: &SectionConfig) -> RankResult<String>;
}

impl<T: PageSource + ?Sized> PageSource for Box<T> {
    fn fetch(&self, section: &SectionConfig) -> RankResult<String> {
        (**self).fetch(section)
    }
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch(&self, section: &SectionConfig) -> RankResult<String> {
        (**self).fetch(section)
    }
}

/// Reads previously saved page text from `<dir>/<section id>.txt`.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, section: &SectionConfig) -> PathBuf {
        self.dir.join(format!("{}.txt", section.id))
    }
}

impl PageSource for DirSource {
    fn fetch(&self, section: &SectionConfig) -> RankResult<String> {
        let path = self.path_for(section);
        debug!("Reading {} from {}", section.id, path.display());
        fs::read_to_string(&path).map_err(|e| RankError::Source {
            section: section.id.clone(),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}
