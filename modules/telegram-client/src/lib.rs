pub mod error;

pub use error::{Result, TelegramError};

use std::path::Path;
use std::time::Duration;

use reqwest::multipart;

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(bot_token: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, bot_token)
    }

    pub fn with_base_url(base_url: &str, bot_token: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token,
        }
    }

    /// Upload a file to a chat via the bot `sendDocument` method.
    pub async fn send_document(
        &self,
        chat_id: &str,
        document: &Path,
        caption: &str,
    ) -> Result<()> {
        let file_name = document
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let bytes = tokio::fs::read(document).await?;

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(XLSX_MIME)?;
        let form = multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .text("caption", caption.to_string())
            .part("document", part);

        let url = format!("{}/bot{}/sendDocument", self.base_url, self.bot_token);
        let resp = self.client.post(&url).multipart(form).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TelegramError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(chat_id, "Document upload accepted");
        Ok(())
    }
}
