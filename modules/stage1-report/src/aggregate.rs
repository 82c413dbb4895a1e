use std::collections::HashMap;

use anyhow::Result;
use awardforce_client::{AwardForceClient, EntryRecord};
use tracing::info;

use crate::chapters::Chapter;

/// Category slug for 13–17 Years.
pub const CATEGORY_13_17: &str = "ZLgyzemp";
/// Category slug for Above 18 Years.
pub const CATEGORY_ABOVE_18: &str = "Kgwrlowa";

const STATUS_SUBMITTED: &str = "submitted";

/// Which pair of counters a category pass feeds.
#[derive(Debug, Clone, Copy)]
pub enum AgeBracket {
    Teen,
    Adult,
}

/// Per-chapter tallies, split by age bracket and submission status.
/// Any status other than the literal "submitted" counts as in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChapterCounts {
    pub teen_submitted: u32,
    pub teen_in_progress: u32,
    pub adult_submitted: u32,
    pub adult_in_progress: u32,
}

impl ChapterCounts {
    pub fn total(&self) -> u32 {
        self.teen_submitted + self.teen_in_progress + self.adult_submitted + self.adult_in_progress
    }
}

/// Fetch entries for both fixed categories and tally them per chapter.
/// Every known chapter gets a counts entry, even if all-zero.
pub async fn aggregate(
    client: &AwardForceClient,
    chapters: &HashMap<String, Chapter>,
) -> Result<HashMap<String, ChapterCounts>> {
    let mut counts: HashMap<String, ChapterCounts> = chapters
        .keys()
        .map(|slug| (slug.clone(), ChapterCounts::default()))
        .collect();

    for (category, bracket) in [
        (CATEGORY_13_17, AgeBracket::Teen),
        (CATEGORY_ABOVE_18, AgeBracket::Adult),
    ] {
        info!(category, "Pulling entries");
        let entries = client.entries_in_category(category).await?;
        apply_entries(&mut counts, bracket, &entries);
    }

    Ok(counts)
}

/// Tally one category's entries into the counts map. Entries referencing an
/// unknown chapter slug are dropped. Updates are commutative, so the final
/// state does not depend on entry order.
pub fn apply_entries(
    counts: &mut HashMap<String, ChapterCounts>,
    bracket: AgeBracket,
    entries: &[EntryRecord],
) {
    for entry in entries {
        let Some(tally) = counts.get_mut(&entry.chapter.slug) else {
            continue;
        };
        let submitted = entry.status == STATUS_SUBMITTED;
        match bracket {
            AgeBracket::Teen if submitted => tally.teen_submitted += 1,
            AgeBracket::Teen => tally.teen_in_progress += 1,
            AgeBracket::Adult if submitted => tally.adult_submitted += 1,
            AgeBracket::Adult => tally.adult_in_progress += 1,
        }
    }
}
