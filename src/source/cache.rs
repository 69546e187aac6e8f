use super::PageSource;
use crate::config::SectionConfig;
use crate::error::RankResult;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// File cache in front of another source, one entry per page URL.
pub struct CachedSource<S> {
    inner: S,
    dir: PathBuf,
    ttl: Duration,
}

impl<S: PageSource> CachedSource<S> {
    pub fn new<P: AsRef<Path>>(inner: S, dir: P, ttl_minutes: u64) -> Self {
        Self {
            inner,
            dir: dir.as_ref().to_path_buf(),
            ttl: Duration::from_secs(ttl_minutes.saturating_mul(60)),
        }
    }

    pub fn entry_path(&self, section: &SectionConfig) -> PathBuf {
        let key = section.url.as_deref().unwrap_or(&section.id);
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        self.dir
            .join(format!("page_{}.txt", hex::encode(hasher.finalize())))
    }

    fn read_fresh(&self, path: &Path) -> Option<String> {
        let age = fs::metadata(path).ok()?.modified().ok()?.elapsed().ok()?;
        if age >= self.ttl {
            return None;
        }
        fs::read_to_string(path).ok()
    }

    fn store(&self, path: &Path, text: &str) {
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(path, text));
        if let Err(e) = result {
            warn!("Could not write cache entry {}: {}", path.display(), e);
        }
    }
}

impl<S: PageSource> PageSource for CachedSource<S> {
    fn fetch(&self, section: &SectionConfig) -> RankResult<String> {
        if self.ttl.is_zero() {
            return self.inner.fetch(section);
        }

        let path = self.entry_path(section);
        if let Some(text) = self.read_fresh(&path) {
            debug!("Cache hit for {}", section.id);
            return Ok(text);
        }

        debug!("Cache miss for {}", section.id);
        let text = self.inner.fetch(section)?;
        self.store(&path, &text);
        Ok(text)
    }
}
