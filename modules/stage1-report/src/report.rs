use std::collections::HashMap;

use crate::aggregate::ChapterCounts;
use crate::chapters::Chapter;
use crate::region::Region;

/// One row of the Stage 1 sheet. `sequence` is the 1-based rank in the
/// (region, name) sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub sequence: usize,
    pub region: Region,
    pub chapter_name: String,
    pub counts: ChapterCounts,
    pub total: u32,
}

/// Join chapters with their counts into the sorted row sequence. Sorted by
/// (region label, lowercased name) ascending, slug as the final tie break so
/// recomposition is deterministic.
pub fn compose(
    chapters: &HashMap<String, Chapter>,
    counts: &HashMap<String, ChapterCounts>,
) -> Vec<ReportRow> {
    let mut ordered: Vec<(&String, &Chapter)> = chapters.iter().collect();
    ordered.sort_by_key(|(slug, chapter)| {
        (
            chapter.region.as_str(),
            chapter.name.to_lowercase(),
            (*slug).clone(),
        )
    });

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, (slug, chapter))| {
            let chapter_counts = counts.get(slug).copied().unwrap_or_default();
            ReportRow {
                sequence: i + 1,
                region: chapter.region,
                chapter_name: chapter.name.clone(),
                counts: chapter_counts,
                total: chapter_counts.total(),
            }
        })
        .collect()
}
