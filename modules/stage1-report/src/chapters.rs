use std::collections::HashMap;

use anyhow::Result;
use awardforce_client::AwardForceClient;
use tracing::info;

use crate::region::{classify, Region};

/// A chapter as the report sees it, keyed by slug in the chapter map.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub name: String,
    pub region: Region,
}

/// Fetch active chapters and resolve each to {name, region}. Remote slugs
/// are expected unique; a duplicate overwrites (last write wins).
pub async fn load_chapters(client: &AwardForceClient) -> Result<HashMap<String, Chapter>> {
    let records = client.active_chapters().await?;

    let mut chapters = HashMap::new();
    for record in records {
        let name = record.name.en_gb;
        let region = classify(&name);
        chapters.insert(record.slug, Chapter { name, region });
    }

    info!(count = chapters.len(), "Loaded chapters");
    Ok(chapters)
}
