use serde::Deserialize;

/// One page of an Award Force collection response. `next_page_url` is a
/// self-contained absolute URL carrying the original filter set.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_page_url: Option<String>,
}

/// Localized display names. The API keys them by locale tag.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    #[serde(rename = "en_GB")]
    pub en_gb: String,
}

/// A chapter record from `/chapter`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterRecord {
    pub slug: String,
    pub name: LocalizedName,
}

/// Slug reference to a chapter, as embedded in entry records.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterRef {
    pub slug: String,
}

/// An entry record from `/entry`.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecord {
    pub chapter: ChapterRef,
    pub status: String,
}
