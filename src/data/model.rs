use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// AlbumRecord – one row of the catalog
// ---------------------------------------------------------------------------

/// A single album (one row of the source CSV).
///
/// `year` and `track_count` are optional because the source data contains
/// malformed or missing values; the loader repairs those to `None` instead of
/// rejecting the row.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumRecord {
    pub artist: String,
    pub album_title: String,
    pub year: Option<i32>,
    pub label: String,
    pub track_count: Option<u32>,
    /// Track names joined with `" | "` separators, searched by substring.
    pub tracklist: String,
    /// URL or path to cover art, if any.
    pub thumb: Option<String>,
}

impl AlbumRecord {
    /// Decade bucket (`floor(year / 10) * 10`), defined only for known years.
    pub fn decade(&self) -> Option<i32> {
        self.year.map(|y| y.div_euclid(10) * 10)
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full album catalog. Loaded once per process and treated as immutable
/// afterwards; filtering produces new `Catalog` values instead of mutating.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<AlbumRecord>,
}

impl Catalog {
    pub fn new(records: Vec<AlbumRecord>) -> Self {
        Catalog { records }
    }

    /// Number of albums.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest known release year, for slider bounds.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().filter_map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Sorted unique known release years, for the single-year selector.
    pub fn known_years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.records.iter().filter_map(|r| r.year).collect();
        years.into_iter().collect()
    }
}
