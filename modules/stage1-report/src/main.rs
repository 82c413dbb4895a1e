use anyhow::Result;

use stage1_report::config::AppConfig;
use stage1_report::{run, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _guard = telemetry::init(&config.log_file)?;

    config.log_redacted();
    run::execute(&config).await;

    Ok(())
}
