use std::path::{Path, PathBuf};

use anyhow::Result;
use awardforce_client::AwardForceClient;
use telegram_client::TelegramClient;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::{aggregate, chapters, report, workbook};

/// Execute one full report run. Failures are logged and absorbed here so the
/// invoking scheduler always sees a clean exit.
pub async fn execute(config: &AppConfig) {
    let Some(api_key) = config.api_key.as_deref() else {
        error!("CF_API_KEY is missing. Aborting.");
        return;
    };

    info!("=== RUN START ===");

    match generate(config, api_key).await {
        Ok(artifact) => deliver(config, &artifact).await,
        Err(err) => error!("Run failed: {err:#}"),
    }

    info!("=== RUN END ===");
}

/// The load → aggregate → compose → emit pipeline. Any remote failure
/// propagates out of here and ends the run without an artifact.
async fn generate(config: &AppConfig, api_key: &str) -> Result<PathBuf> {
    let client = AwardForceClient::with_base_url(&config.api_base_url, api_key.to_string());

    let chapters = chapters::load_chapters(&client).await?;
    let counts = aggregate::aggregate(&client, &chapters).await?;
    let rows = report::compose(&chapters, &counts);

    let date = workbook::today_in_report_zone();
    let artifact = workbook::write_workbook(&rows, &config.output_dir, date)?;
    info!(path = %artifact.display(), "Workbook saved");

    Ok(artifact)
}

/// Best-effort delivery. Missing credentials and transport failures are both
/// logged and swallowed; the artifact stays on disk either way.
async fn deliver(config: &AppConfig, artifact: &Path) {
    let (Some(bot_token), Some(chat_id)) = (config.bot_token.as_deref(), config.chat_id.as_deref())
    else {
        error!("BOT_TOKEN or TELEGRAM_CHAT_ID missing, not sending to Telegram.");
        return;
    };

    let caption = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let client = TelegramClient::with_base_url(&config.telegram_base_url, bot_token.to_string());
    match client.send_document(chat_id, artifact, &caption).await {
        Ok(()) => info!(chat_id, file = %caption, "Sent workbook to Telegram"),
        Err(err) => error!("Telegram upload failed: {err}"),
    }
}
