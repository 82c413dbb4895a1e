use std::path::PathBuf;

/// Application configuration loaded once at startup from environment
/// variables, optionally seeded from a local `.env` file. Immutable; passed
/// by reference into every component.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Award Force API key. The single hard precondition of a run.
    pub api_key: Option<String>,

    /// Telegram delivery credentials. Either missing skips delivery.
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,

    pub api_base_url: String,
    pub telegram_base_url: String,

    /// Directory the workbook is written into.
    pub output_dir: PathBuf,

    /// Append-only log file next to console output.
    pub log_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_key: env_non_empty("CF_API_KEY"),
            bot_token: env_non_empty("BOT_TOKEN"),
            chat_id: env_non_empty("TELEGRAM_CHAT_ID"),
            api_base_url: std::env::var("CF_API_BASE_URL")
                .unwrap_or_else(|_| awardforce_client::DEFAULT_BASE_URL.to_string()),
            telegram_base_url: std::env::var("TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|_| telegram_client::DEFAULT_BASE_URL.to_string()),
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            log_file: std::env::var("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs.txt")),
        }
    }

    /// Log which secrets are present without echoing their values.
    pub fn log_redacted(&self) {
        fn preview(val: &Option<String>) -> String {
            match val {
                Some(v) => {
                    let n = v.len().min(4);
                    format!("{}...({} chars)", &v[..n], v.len())
                }
                None => "<not set>".to_string(),
            }
        }

        tracing::info!("Config loaded:");
        tracing::info!("  CF_API_KEY: {}", preview(&self.api_key));
        tracing::info!("  BOT_TOKEN: {}", preview(&self.bot_token));
        tracing::info!("  TELEGRAM_CHAT_ID: {}", preview(&self.chat_id));
        tracing::info!("  OUTPUT_DIR: {}", self.output_dir.display());
    }
}

/// Missing and empty are the same thing for secrets.
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
