use super::PageSource;
use crate::config::{FetchParams, SectionConfig};
use crate::error::{RankError, RankResult};
use crate::text::visible_text;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;
use tracing::{debug, info};

/// Fetches standings pages over HTTP and reduces them to visible text.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(params: &FetchParams) -> RankResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("nl,en;q=0.9"));

        let client = Client::builder()
            .user_agent(params.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(params.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(3))
            .build()?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, section: &SectionConfig) -> RankResult<String> {
        let url = section.url.as_deref().ok_or_else(|| RankError::Source {
            section: section.id.clone(),
            reason: "no url configured".into(),
        })?;

        info!("📥 Fetching {} ({})", section.id, url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RankError::Source {
                section: section.id.clone(),
                reason: format!("HTTP {}", status),
            });
        }

        let html = response.text()?;
        debug!("Received {} bytes of HTML for {}", html.len(), section.id);
        Ok(visible_text(&html))
    }
}
