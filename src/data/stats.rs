use std::collections::{BTreeMap, HashMap};

use super::filter::Denylist;
use super::model::Catalog;

// ---------------------------------------------------------------------------
// Grouped counts and means for the stats and charts tabs. All functions are
// pure and tolerate an empty catalog (empty result, no special cases).
// ---------------------------------------------------------------------------

/// Album count per decade, ascending. Records with unknown year are excluded.
pub fn count_by_decade(catalog: &Catalog) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in &catalog.records {
        if let Some(decade) = record.decade() {
            *counts.entry(decade).or_default() += 1;
        }
    }
    counts.into_iter().collect()
}

/// The `n` most frequent artists, count descending. Ties keep the order in
/// which the artists first appear in the catalog (stable sort).
pub fn top_artists(catalog: &Catalog, n: usize) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in &catalog.records {
        match index.get(&record.artist) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(record.artist.clone(), order.len());
                order.push((record.artist.clone(), 1));
            }
        }
    }
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(n);
    order
}

/// Mean track count per release year, ascending by year. Unknown track
/// counts are ignored; a year where every count is unknown yields `None`,
/// never zero.
pub fn avg_track_count_by_year(catalog: &Catalog) -> Vec<(i32, Option<f64>)> {
    let mut groups: BTreeMap<i32, (u64, usize)> = BTreeMap::new();
    for record in &catalog.records {
        let Some(year) = record.year else { continue };
        let entry = groups.entry(year).or_default();
        if let Some(tracks) = record.track_count {
            entry.0 += u64::from(tracks);
            entry.1 += 1;
        }
    }
    groups
        .into_iter()
        .map(|(year, (sum, known))| {
            let mean = (known > 0).then(|| sum as f64 / known as f64);
            (year, mean)
        })
        .collect()
}

/// Album count per (decade, artist), for the stacked decade chart.
pub fn count_by_decade_and_artist(catalog: &Catalog) -> Vec<(i32, String, usize)> {
    let mut counts: BTreeMap<(i32, String), usize> = BTreeMap::new();
    for record in &catalog.records {
        if let Some(decade) = record.decade() {
            *counts.entry((decade, record.artist.clone())).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|((decade, artist), count)| (decade, artist, count))
        .collect()
}

/// Album count per (year, label). Blacklisted labels are excluded here as
/// well, since this view can run over the unfiltered catalog.
pub fn count_by_year_and_label(
    catalog: &Catalog,
    denylist: &Denylist,
) -> Vec<(i32, String, usize)> {
    let mut counts: BTreeMap<(i32, String), usize> = BTreeMap::new();
    for record in &catalog.records {
        let Some(year) = record.year else { continue };
        if denylist.label_pattern.is_match(&record.label) {
            continue;
        }
        *counts.entry((year, record.label.clone())).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((year, label), count)| (year, label, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AlbumRecord;

    fn record(
        artist: &str,
        label: &str,
        year: Option<i32>,
        track_count: Option<u32>,
    ) -> AlbumRecord {
        AlbumRecord {
            artist: artist.to_string(),
            album_title: "Album".to_string(),
            year,
            label: label.to_string(),
            track_count,
            tracklist: String::new(),
            thumb: None,
        }
    }

    #[test]
    fn decade_counts_are_ascending_and_skip_unknown_years() {
        let catalog = Catalog::new(vec![
            record("A", "L", Some(2003), None),
            record("B", "L", Some(1995), None),
            record("C", "L", Some(1991), None),
            record("D", "L", None, None),
        ]);
        assert_eq!(count_by_decade(&catalog), vec![(1990, 2), (2000, 1)]);
    }

    #[test]
    fn top_artists_sorts_by_count_with_stable_ties() {
        let catalog = Catalog::new(vec![
            record("Molesta", "L", Some(1996), None),
            record("Kaliber 44", "L", Some(1996), None),
            record("Kaliber 44", "L", Some(1998), None),
            record("Paktofonika", "L", Some(2000), None),
        ]);
        // Molesta and Paktofonika tie at 1; Molesta appeared first.
        assert_eq!(
            top_artists(&catalog, 3),
            vec![
                ("Kaliber 44".to_string(), 2),
                ("Molesta".to_string(), 1),
                ("Paktofonika".to_string(), 1),
            ]
        );
        assert_eq!(top_artists(&catalog, 1).len(), 1);
    }

    #[test]
    fn mean_track_count_ignores_unknown_and_stays_unknown_when_all_are() {
        let catalog = Catalog::new(vec![
            record("A", "L", Some(1999), Some(10)),
            record("B", "L", Some(1999), Some(20)),
            record("C", "L", Some(1999), None),
            record("D", "L", Some(2001), None),
        ]);
        assert_eq!(
            avg_track_count_by_year(&catalog),
            vec![(1999, Some(15.0)), (2001, None)]
        );
    }

    #[test]
    fn decade_artist_counts_group_both_keys() {
        let catalog = Catalog::new(vec![
            record("Kaliber 44", "L", Some(1996), None),
            record("Kaliber 44", "L", Some(1998), None),
            record("Paktofonika", "L", Some(2000), None),
        ]);
        assert_eq!(
            count_by_decade_and_artist(&catalog),
            vec![
                (1990, "Kaliber 44".to_string(), 2),
                (2000, "Paktofonika".to_string(), 1),
            ]
        );
    }

    #[test]
    fn year_label_counts_exclude_blacklisted_labels() {
        let catalog = Catalog::new(vec![
            record("A", "Gigant Records", Some(2000), None),
            record("B", "Nielegal", Some(2000), None),
            record("C", "Dee Jay Mix Club", Some(2001), None),
        ]);
        assert_eq!(
            count_by_year_and_label(&catalog, &Denylist::default()),
            vec![(2000, "Gigant Records".to_string(), 1)]
        );
    }

    #[test]
    fn empty_catalog_yields_empty_aggregates() {
        let catalog = Catalog::default();
        assert!(count_by_decade(&catalog).is_empty());
        assert!(top_artists(&catalog, 10).is_empty());
        assert!(avg_track_count_by_year(&catalog).is_empty());
        assert!(count_by_decade_and_artist(&catalog).is_empty());
        assert!(count_by_year_and_label(&catalog, &Denylist::default()).is_empty());
    }
}
