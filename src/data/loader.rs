use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{AlbumRecord, Catalog};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the album catalog from a CSV file.
///
/// Expected layout: header row with exactly these columns:
/// `artist`, `album_title`, `year`, `label`, `track_count`, `tracklist`,
/// `thumb`. A malformed `year` value becomes unknown rather than failing the
/// load; a missing file or broken CSV structure is a real error and the
/// caller falls back to an empty catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let catalog =
        read_catalog(file).with_context(|| format!("reading {}", path.display()))?;
    log::info!("Loaded {} albums from {}", catalog.len(), path.display());
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One raw CSV row. `year` is read as text so malformed values can be
/// repaired instead of aborting the load.
#[derive(Debug, Deserialize)]
struct RawRecord {
    artist: String,
    album_title: String,
    year: Option<String>,
    label: String,
    track_count: Option<u32>,
    tracklist: String,
    thumb: Option<String>,
}

/// Parse catalog CSV from any reader (tests feed in-memory bytes).
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row, result) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row}"))?;
        records.push(AlbumRecord {
            artist: raw.artist,
            album_title: raw.album_title,
            year: raw.year.as_deref().and_then(normalize_year),
            label: raw.label,
            track_count: raw.track_count,
            tracklist: raw.tracklist,
            thumb: raw.thumb.filter(|t| !t.is_empty()),
        });
    }

    Ok(Catalog::new(records))
}

/// Repair a raw year value: strip thousands separators, accept a pure digit
/// string, turn anything else into unknown.
fn normalize_year(raw: &str) -> Option<i32> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
artist,album_title,year,label,track_count,tracklist,thumb
Kaliber 44,Ksi\u{0119}ga Tajemnicza. Prolog,1996,S.P. Records,14,Magia | Plus i minus,http://img/k44.jpg
Paktofonika,Kinematografia,\"2,000\",Gigant Records,19,Priorytety | Jestem bogiem,
Molesta,Skandal,199?,B.E.A.T. Records,,Wiedzia\u{0142}em \u{017c}e tak b\u{0119}dzie,
";

    #[test]
    fn parses_rows_and_repairs_years() {
        let catalog = read_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        assert_eq!(catalog.records[0].year, Some(1996));
        assert_eq!(catalog.records[0].track_count, Some(14));
        assert_eq!(
            catalog.records[0].thumb.as_deref(),
            Some("http://img/k44.jpg")
        );

        // thousands separator stripped
        assert_eq!(catalog.records[1].year, Some(2000));
        assert_eq!(catalog.records[1].thumb, None);

        // non-numeric year repaired to unknown, row kept
        assert_eq!(catalog.records[2].year, None);
        assert_eq!(catalog.records[2].track_count, None);
    }

    #[test]
    fn normalize_year_cases() {
        assert_eq!(normalize_year("1996"), Some(1996));
        assert_eq!(normalize_year("1,996"), Some(1996));
        assert_eq!(normalize_year(" 2005 "), Some(2005));
        assert_eq!(normalize_year("199?"), None);
        assert_eq!(normalize_year("unknown"), None);
        assert_eq!(normalize_year(""), None);
        assert_eq!(normalize_year("-1996"), None);
    }

    #[test]
    fn missing_columns_are_an_error() {
        let result = read_catalog(&b"artist,year\nKaliber 44,1996\n"[..]);
        assert!(result.is_err());
    }

    #[test]
    fn header_only_input_yields_empty_catalog() {
        let catalog = read_catalog(
            &b"artist,album_title,year,label,track_count,tracklist,thumb\n"[..],
        )
        .unwrap();
        assert!(catalog.is_empty());
    }
}
