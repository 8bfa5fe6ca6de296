use std::ops::Range;

use regex::Regex;

use super::model::{AlbumRecord, Catalog};

/// Records shown per page in the browse table.
pub const PAGE_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Free-text and year-range predicates for browsing. Blank text and an
/// absent year range both mean "no constraint" for that field.
#[derive(Debug, Clone, Default)]
pub struct BrowseFilters {
    pub artist: String,
    pub label: String,
    pub tracklist: String,
    /// Inclusive bounds. A record with unknown year never matches a bounded
    /// range.
    pub year_range: Option<(i32, i32)>,
}

impl BrowseFilters {
    /// AND of all active predicates. Text matching is case-sensitive
    /// substring containment.
    pub fn matches(&self, record: &AlbumRecord) -> bool {
        if !contains_or_blank(&self.artist, &record.artist) {
            return false;
        }
        if !contains_or_blank(&self.label, &record.label) {
            return false;
        }
        if !contains_or_blank(&self.tracklist, &record.tracklist) {
            return false;
        }
        if let Some((lo, hi)) = self.year_range {
            match record.year {
                Some(y) => {
                    if y < lo || y > hi {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Case-sensitive substring containment; a blank needle matches everything.
fn contains_or_blank(needle: &str, haystack: &str) -> bool {
    needle.is_empty() || haystack.contains(needle)
}

// ---------------------------------------------------------------------------
// Standing exclusions
// ---------------------------------------------------------------------------

/// Always-applied exclusions: compilation artists and blacklisted labels.
/// Kept as data rather than logic so the terms can be tuned without touching
/// the filter itself.
#[derive(Debug, Clone)]
pub struct Denylist {
    /// A record is excluded when its artist contains any of these terms.
    pub artist_terms: Vec<String>,
    /// A record is excluded when its label matches this pattern.
    pub label_pattern: Regex,
}

impl Default for Denylist {
    fn default() -> Self {
        Denylist {
            artist_terms: vec!["Various".to_string()],
            label_pattern: Regex::new("Dee Jay Mix Club|Nielegal")
                .expect("denylist pattern is valid"),
        }
    }
}

impl Denylist {
    /// True when the record survives both standing exclusions.
    pub fn allows(&self, record: &AlbumRecord) -> bool {
        if self
            .artist_terms
            .iter()
            .any(|term| record.artist.contains(term.as_str()))
        {
            return false;
        }
        !self.label_pattern.is_match(&record.label)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return the order-preserving subsequence of records passing all active
/// predicates plus the standing exclusions. The input is not mutated.
pub fn filter_catalog(
    catalog: &Catalog,
    filters: &BrowseFilters,
    denylist: &Denylist,
) -> Catalog {
    Catalog::new(
        catalog
            .records
            .iter()
            .filter(|r| denylist.allows(r) && filters.matches(r))
            .cloned()
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page count for a result set, never less than one.
pub fn total_pages(record_count: usize) -> usize {
    record_count.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp a 1-based page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, record_count: usize) -> usize {
    page.clamp(1, total_pages(record_count))
}

/// Half-open index range of the records shown on a (1-based) page.
pub fn page_bounds(page: usize, record_count: usize) -> Range<usize> {
    let page = clamp_page(page, record_count);
    let start = (page - 1) * PAGE_SIZE;
    start..record_count.min(start + PAGE_SIZE)
}
