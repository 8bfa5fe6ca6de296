use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::data::discover::{
    sample_discovery, DiscoveryRequest, DISCOVERY_SEED, DISCOVERY_SIZE,
};
use crate::data::filter::{filter_catalog, BrowseFilters, Denylist};
use crate::data::loader::load_catalog;
use crate::data::model::{AlbumRecord, Catalog};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which view the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Browse,
    Stats,
    Charts,
    Discover,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog; empty until a file is opened successfully.
    pub catalog: Catalog,

    /// Where the catalog came from. Reopening the same path reuses the
    /// in-memory catalog instead of re-reading the file.
    pub source: Option<PathBuf>,

    /// Standing exclusions applied to every browse and discovery view.
    pub denylist: Denylist,

    pub tab: Tab,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    // ---- Browse tab ----
    pub filters: BrowseFilters,
    /// 1-based page of the results table.
    pub page: usize,

    // ---- Stats tab ----
    /// Year range for the filtered decade chart.
    pub stats_year_range: Option<(i32, i32)>,

    // ---- Charts tab ----
    pub selected_year: Option<i32>,

    // ---- Discover tab ----
    pub discover_range: Option<(i32, i32)>,
    pub discover_label: String,
    pub discover_start: NaiveDate,
    /// Current selection: `None` before the first run, `Some(empty)` when
    /// nothing matched the criteria.
    pub discovery: Option<Vec<AlbumRecord>>,
    /// Memoized sampler output per request; never invalidated because the
    /// catalog is static for the process lifetime.
    discovery_cache: HashMap<DiscoveryRequest, Vec<AlbumRecord>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            source: None,
            denylist: Denylist::default(),
            tab: Tab::Browse,
            status_message: None,
            filters: BrowseFilters::default(),
            page: 1,
            stats_year_range: None,
            selected_year: None,
            discover_range: None,
            discover_label: String::new(),
            discover_start: chrono::Local::now().date_naive(),
            discovery: None,
            discovery_cache: HashMap::new(),
        }
    }
}

impl AppState {
    /// Load a catalog file, memoized by source identity. A failed load
    /// leaves the app running with an empty catalog and a readable message.
    pub fn load_from(&mut self, path: &Path) {
        if self.source.as_deref() == Some(path) && !self.catalog.is_empty() {
            return;
        }
        match load_catalog(path) {
            Ok(catalog) => {
                self.set_catalog(catalog, path.to_path_buf());
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.catalog = Catalog::default();
                self.source = None;
            }
        }
    }

    /// Ingest a newly loaded catalog and reset the per-tab controls.
    pub fn set_catalog(&mut self, catalog: Catalog, source: PathBuf) {
        let bounds = catalog.year_bounds();
        self.filters = BrowseFilters {
            year_range: bounds,
            ..BrowseFilters::default()
        };
        self.page = 1;
        self.stats_year_range = bounds;
        self.selected_year = catalog.known_years().first().copied();
        self.discover_range = bounds;
        self.discovery = None;
        self.discovery_cache.clear();

        self.catalog = catalog;
        self.source = Some(source);
        self.status_message = None;
    }

    /// Records passing the browse filters plus the standing exclusions.
    pub fn filtered(&self) -> Catalog {
        filter_catalog(&self.catalog, &self.filters, &self.denylist)
    }

    /// Run the discovery sampler for the current inputs, reusing the cached
    /// selection when the same request was generated before.
    pub fn generate_discovery(&mut self) {
        let Some((start_year, end_year)) = self.discover_range else {
            self.discovery = Some(Vec::new());
            return;
        };
        let request = DiscoveryRequest {
            start_year,
            end_year,
            label: self.discover_label.trim().to_string(),
        };
        let selection = self
            .discovery_cache
            .entry(request)
            .or_insert_with_key(|req| {
                sample_discovery(
                    &self.catalog,
                    req,
                    &self.denylist,
                    DISCOVERY_SIZE,
                    DISCOVERY_SEED,
                )
            })
            .clone();
        self.discovery = Some(selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AlbumRecord;

    fn catalog() -> Catalog {
        let records = (0..50)
            .map(|i| AlbumRecord {
                artist: format!("Artist {i}"),
                album_title: format!("Album {i}"),
                year: Some(1991 + i % 20),
                label: "Gigant Records".to_string(),
                track_count: Some(10),
                tracklist: String::new(),
                thumb: None,
            })
            .collect();
        Catalog::new(records)
    }

    #[test]
    fn set_catalog_initialises_ranges_from_year_bounds() {
        let mut state = AppState::default();
        state.set_catalog(catalog(), PathBuf::from("albums.csv"));
        assert_eq!(state.filters.year_range, Some((1991, 2010)));
        assert_eq!(state.discover_range, Some((1991, 2010)));
        assert_eq!(state.selected_year, Some(1991));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn generate_discovery_memoizes_per_request() {
        let mut state = AppState::default();
        state.set_catalog(catalog(), PathBuf::from("albums.csv"));

        state.generate_discovery();
        let first = state.discovery.clone().unwrap();
        assert_eq!(first.len(), 30);

        // identical request: cached, identical contents and order
        state.generate_discovery();
        assert_eq!(state.discovery.clone().unwrap(), first);

        // different request produces its own entry
        state.discover_label = "Nielegal".to_string();
        state.generate_discovery();
        assert_eq!(state.discovery.clone().unwrap(), Vec::new());
    }
}
