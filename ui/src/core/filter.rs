//! Free-text search and category filtering over projected rows.

use super::record::ProjectedRecord;

/// Category picker value. `"all"` disables category filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL_VALUE: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_VALUE,
            CategoryFilter::Only(c) => c,
        }
    }

    fn admits(&self, record: &ProjectedRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => record.category() == c,
        }
    }
}

/// Visible subset of a collection. An empty result is its own state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    Matches(Vec<&'a ProjectedRecord>),
    NoResults,
}

impl<'a> FilterOutcome<'a> {
    pub fn len(&self) -> usize {
        match self {
            FilterOutcome::Matches(m) => m.len(),
            FilterOutcome::NoResults => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::NoResults)
    }

    pub fn records(&self) -> &[&'a ProjectedRecord] {
        match self {
            FilterOutcome::Matches(m) => m,
            FilterOutcome::NoResults => &[],
        }
    }
}

/// Records in the selected category whose title or description contains `query`
/// (case-insensitive substring). Input order is kept.
pub fn filter<'a>(
    records: &'a [ProjectedRecord],
    query: &str,
    category: &CategoryFilter,
) -> FilterOutcome<'a> {
    let needle = query.to_lowercase();
    let matches: Vec<&ProjectedRecord> = records
        .iter()
        .filter(|r| category.admits(r))
        .filter(|r| {
            needle.is_empty()
                || r.title().to_lowercase().contains(&needle)
                || r.description().to_lowercase().contains(&needle)
        })
        .collect();

    if matches.is_empty() {
        FilterOutcome::NoResults
    } else {
        FilterOutcome::Matches(matches)
    }
}

/// Distinct non-empty categories in first-seen order.
pub fn categories(records: &[ProjectedRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in records.iter().map(ProjectedRecord::category) {
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}
