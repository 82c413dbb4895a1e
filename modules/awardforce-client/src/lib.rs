pub mod error;
pub mod types;

pub use error::{AwardForceError, Result};
pub use types::{ChapterRecord, ChapterRef, EntryRecord, LocalizedName, Page};

use std::time::Duration;

use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://api.us.cr4ce.com";

const ACCEPT_HEADER: &str = "application/vnd.Creative Force.v2.3+json";
const API_LANGUAGE: &str = "en_GB";

/// Hard stop for `next_page_url` chains that never terminate.
const MAX_PAGES: usize = 500;

pub struct AwardForceClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AwardForceClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// GET `path` and follow `next_page_url` until depleted, combining the
    /// `data` batches in order. `query` is sent only on the first request;
    /// subsequent page URLs already carry the filter set.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut url = format!("{}{}", self.base_url, path);
        let mut query = Some(query);
        let mut items = Vec::new();

        for _ in 0..MAX_PAGES {
            let mut request = self
                .client
                .get(&url)
                .header("x-api-key", &self.api_key)
                .header("Accept", ACCEPT_HEADER)
                .header("x-api-language", API_LANGUAGE);
            if let Some(params) = query.take() {
                request = request.query(params);
            }

            let resp = request.send().await?;
            let status = resp.status();
            if !status.is_success() {
                let message = resp.text().await.unwrap_or_default();
                return Err(AwardForceError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = resp.text().await?;
            let page: Page<T> = serde_json::from_str(&body)?;
            items.extend(page.data);

            // The API signals the last page with a missing, null, or empty
            // next_page_url.
            match page.next_page_url.filter(|next| !next.is_empty()) {
                Some(next) => url = next,
                None => {
                    tracing::debug!(path, count = items.len(), "Collection fetch complete");
                    return Ok(items);
                }
            }
        }

        Err(AwardForceError::PageLimit(MAX_PAGES))
    }

    /// Active chapters, 100 per page.
    pub async fn active_chapters(&self) -> Result<Vec<ChapterRecord>> {
        self.fetch_all("/chapter", &[("status", "active"), ("per_page", "100")])
            .await
    }

    /// All entries in a category, 100 per page.
    pub async fn entries_in_category(&self, category_slug: &str) -> Result<Vec<EntryRecord>> {
        self.fetch_all("/entry", &[("category", category_slug), ("per_page", "100")])
            .await
    }
}
