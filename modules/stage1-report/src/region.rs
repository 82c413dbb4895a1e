/// Report grouping for chapters. Every chapter resolves to exactly one
/// region; EMEA is the fallback for countries not listed anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Amr,
    Prc,
    Apj,
    Emea,
    Other,
}

impl Region {
    /// Label used in the report. Rows sort by this label, so the region
    /// order in the sheet is AMR, APJ, EMEA, Other, PRC.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Amr => "AMR",
            Region::Prc => "PRC",
            Region::Apj => "APJ",
            Region::Emea => "EMEA",
            Region::Other => "Other",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const REGION_COUNTRIES: &[(Region, &[&str])] = &[
    (
        Region::Amr,
        &[
            "argentina",
            "brazil",
            "canada",
            "costa rica",
            "mexico",
            "united states of america",
        ],
    ),
    (Region::Prc, &["china"]),
    (
        Region::Apj,
        &[
            "bangladesh",
            "india",
            "indonesia",
            "japan",
            "malaysia",
            "singapore",
            "south korea",
            "taiwan",
            "thailand",
            "vietnam",
            "australia",
            "new zealand",
        ],
    ),
];

/// Map a chapter display name to its region. Case-insensitive exact match
/// against the country lists; "global festival" is its own bucket.
pub fn classify(display_name: &str) -> Region {
    let name = display_name.to_lowercase();
    if name == "global festival" {
        return Region::Other;
    }
    for (region, countries) in REGION_COUNTRIES {
        if countries.contains(&name.as_str()) {
            return *region;
        }
    }
    Region::Emea
}
