use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::filter::{filter_catalog, BrowseFilters, Denylist};
use super::model::{AlbumRecord, Catalog};

/// Albums drawn per discovery run ("30 albums for 30 days").
pub const DISCOVERY_SIZE: usize = 30;

/// Fixed seed so identical requests reproduce the same selection, which is
/// what makes the result cacheable.
pub const DISCOVERY_SEED: u64 = 42;

/// Days shown on the discovery calendar.
pub const CALENDAR_DAYS: usize = 30;

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Inputs of one discovery run; doubles as the memo-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveryRequest {
    pub start_year: i32,
    pub end_year: i32,
    /// Label substring; blank means no label constraint.
    pub label: String,
}

/// Draw up to `sample_size` albums matching the request, without
/// replacement, from a seeded generator. Selection order is sample order,
/// not chronological. An empty matching subset yields an empty selection,
/// never an error.
pub fn sample_discovery(
    catalog: &Catalog,
    request: &DiscoveryRequest,
    denylist: &Denylist,
    sample_size: usize,
    seed: u64,
) -> Vec<AlbumRecord> {
    let filters = BrowseFilters {
        label: request.label.clone(),
        year_range: Some((request.start_year, request.end_year)),
        ..BrowseFilters::default()
    };
    let subset = filter_catalog(catalog, &filters, denylist).records;

    let amount = sample_size.min(subset.len());
    if amount == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, subset.len(), amount)
        .into_iter()
        .map(|i| subset[i].clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Calendar layout
// ---------------------------------------------------------------------------

/// One grid position: a date, and an album while the selection lasts.
#[derive(Debug, Clone)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub album: Option<AlbumRecord>,
}

/// Lay `num_days` consecutive dates (from `start`, inclusive) out in rows of
/// at most seven, pairing the i-th date of the whole window with the i-th
/// selection entry. Purely positional, no filtering or randomization here.
pub fn calendar_weeks(
    selection: &[AlbumRecord],
    start: NaiveDate,
    num_days: usize,
) -> Vec<Vec<CalendarCell>> {
    let cells: Vec<CalendarCell> = (0..num_days)
        .map(|i| CalendarCell {
            date: start + Days::new(i as u64),
            album: selection.get(i).cloned(),
        })
        .collect();
    cells.chunks(7).map(|week| week.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(artist: &str, label: &str, year: i32) -> AlbumRecord {
        AlbumRecord {
            artist: artist.to_string(),
            album_title: format!("{artist} {year}"),
            year: Some(year),
            label: label.to_string(),
            track_count: Some(12),
            tracklist: String::new(),
            thumb: None,
        }
    }

    fn big_catalog() -> Catalog {
        let records = (0..100)
            .map(|i| record(&format!("Artist {i}"), "Gigant Records", 1991 + i % 30))
            .collect();
        Catalog::new(records)
    }

    fn request(start_year: i32, end_year: i32, label: &str) -> DiscoveryRequest {
        DiscoveryRequest {
            start_year,
            end_year,
            label: label.to_string(),
        }
    }

    #[test]
    fn identical_inputs_reproduce_the_selection() {
        let catalog = big_catalog();
        let req = request(1991, 2020, "");
        let a = sample_discovery(&catalog, &req, &Denylist::default(), 30, 42);
        let b = sample_discovery(&catalog, &req, &Denylist::default(), 30, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
    }

    #[test]
    fn selection_is_bounded_and_drawn_from_the_subset() {
        let catalog = big_catalog();
        let req = request(1995, 1996, "");
        let selection =
            sample_discovery(&catalog, &req, &Denylist::default(), 30, 42);
        let matching: Vec<&AlbumRecord> = catalog
            .records
            .iter()
            .filter(|r| matches!(r.year, Some(y) if (1995..=1996).contains(&y)))
            .collect();
        assert!(selection.len() <= 30.min(matching.len()));
        assert!(selection.iter().all(|s| matching.iter().any(|m| *m == s)));
        // without replacement: no duplicates
        for (i, a) in selection.iter().enumerate() {
            assert!(!selection[i + 1..].contains(a));
        }
    }

    #[test]
    fn label_filter_and_exclusions_apply() {
        let catalog = Catalog::new(vec![
            record("Kaliber 44", "Gigant Records", 1999),
            record("Various", "Gigant Records", 1999),
            record("Molesta", "Nielegal", 1999),
            record("Paktofonika", "S.P. Records", 2000),
        ]);
        let req = request(1991, 2024, "Gigant");
        let selection =
            sample_discovery(&catalog, &req, &Denylist::default(), 30, 42);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].artist, "Kaliber 44");
    }

    #[test]
    fn no_matches_yield_an_empty_selection() {
        let catalog = big_catalog();
        let req = request(1950, 1960, "");
        let selection =
            sample_discovery(&catalog, &req, &Denylist::default(), 30, 42);
        assert!(selection.is_empty());
    }

    #[test]
    fn thirty_days_make_five_rows() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let selection = big_catalog().records;
        let weeks = calendar_weeks(&selection[..30], start, 30);

        assert_eq!(weeks.len(), 5);
        assert_eq!(
            weeks.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![7, 7, 7, 7, 2]
        );

        // concatenated dates are the original consecutive sequence
        let dates: Vec<NaiveDate> =
            weeks.iter().flatten().map(|c| c.date).collect();
        for (i, date) in dates.iter().enumerate() {
            assert_eq!(*date, start + Days::new(i as u64));
        }
    }

    #[test]
    fn pairing_is_positional_across_the_whole_window() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let selection = &big_catalog().records[..10];
        let weeks = calendar_weeks(selection, start, 30);

        let cells: Vec<&CalendarCell> = weeks.iter().flatten().collect();
        for (i, cell) in cells.iter().enumerate() {
            match i < selection.len() {
                true => assert_eq!(cell.album.as_ref(), Some(&selection[i])),
                false => assert!(cell.album.is_none()),
            }
        }
    }

    #[test]
    fn empty_selection_fills_the_calendar_with_bare_dates() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let weeks = calendar_weeks(&[], start, 30);
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().flatten().all(|c| c.album.is_none()));
    }
}
