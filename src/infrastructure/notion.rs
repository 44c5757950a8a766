//! Blocking HTTP client for the Notion block API
//!
//! The exporter is single-threaded and strictly sequential, so the client
//! uses blocking requests with no explicit deadline: each fetch completes
//! (or fails) before the next step proceeds.

use reqwest::blocking::Client;
use reqwest::header;
use tracing::debug;

use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::entities::ChildrenPage;
use crate::infrastructure::error::{SourceError, SourceResult};
use crate::infrastructure::traits::BlockSource;

/// Fixed batch size for paginated children listings.
pub const PAGE_SIZE: u32 = 100;

/// Client for the remote children-listing endpoint.
///
/// Holds the credential and protocol version threaded in from `Settings`
/// at construction time.
pub struct NotionClient {
    http: Client,
    base_url: String,
    key: String,
    version: String,
}

impl NotionClient {
    /// Build a client from settings; fails if no credential is configured.
    pub fn from_settings(settings: &Settings) -> ApplicationResult<Self> {
        let key = settings.require_key()?.to_string();
        Ok(Self {
            http: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            key,
            version: settings.version.clone(),
        })
    }

    fn children_url(&self, block_id: &str, cursor: Option<&str>) -> String {
        let mut url = format!(
            "{}/blocks/{}/children?page_size={}",
            self.base_url, block_id, PAGE_SIZE
        );
        if let Some(cursor) = cursor {
            url.push_str("&start_cursor=");
            url.push_str(cursor);
        }
        url
    }
}

impl BlockSource for NotionClient {
    fn children_page(&self, block_id: &str, cursor: Option<&str>) -> SourceResult<ChildrenPage> {
        let url = self.children_url(block_id, cursor);
        debug!(%url, "listing block children");

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.key))
            .header("Notion-Version", self.version.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .map_err(|e| SourceError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().map_err(|e| SourceError::Transport {
            url: url.clone(),
            source: e,
        })?;
        serde_json::from_str(&body).map_err(|e| SourceError::Decode { url, source: e })
    }
}
