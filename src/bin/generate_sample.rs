//! Writes a deterministic demo catalog (`albums.csv`) for trying the app
//! without real data. A few rows carry malformed years or missing track
//! counts on purpose, to exercise the loader's repair path.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const ARTISTS: &[&str] = &[
    "Kaliber 44",
    "Paktofonika",
    "Molesta",
    "Slums Attack",
    "WWO",
    "Pezet",
    "O.S.T.R.",
    "Grammatik",
    "Various",
    "Fisz",
    "Łona",
    "Eldo",
];

const LABELS: &[&str] = &[
    "S.P. Records",
    "Gigant Records",
    "Asfalt Records",
    "Prosto",
    "B.E.A.T. Records",
    "Nielegal",
    "Dee Jay Mix Club",
    "RRX",
];

const TITLE_WORDS: &[&str] = &[
    "Księga", "Ulica", "Miasto", "Noc", "Dzień", "Słowa", "Beton", "Światła",
    "Echo", "Prolog", "Epilog", "Mikrofon",
];

const TRACK_WORDS: &[&str] = &[
    "Intro", "Outro", "Skit", "Magia", "Czas", "Droga", "Dom", "Prawda",
    "Sen", "Gra", "Flow", "Bit",
];

/// One output row. Everything is written as text so that blank values and
/// the occasional malformed year land in the file exactly as real exports
/// produce them.
#[derive(Serialize)]
struct Row {
    artist: String,
    album_title: String,
    year: String,
    label: String,
    track_count: String,
    tracklist: String,
    thumb: String,
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let output_path = "albums.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut rows = 0;
    for (artist_idx, artist) in ARTISTS.iter().enumerate() {
        let albums = 2 + rng.random_range(0..5);
        for album_no in 0..albums {
            let year = 1991 + rng.random_range(0..34);
            let year_text = match rng.random_range(0..20) {
                0 => format!("{},{:03}", year / 1000, year % 1000),
                1 => "unknown".to_string(),
                _ => year.to_string(),
            };

            let track_count = rng.random_range(8..22);
            let track_count_text = if rng.random_range(0..10) == 0 {
                String::new()
            } else {
                track_count.to_string()
            };

            let tracklist: Vec<&str> = (0..track_count)
                .map(|_| TRACK_WORDS[rng.random_range(0..TRACK_WORDS.len())])
                .collect();

            let thumb = if rng.random_range(0..4) == 0 {
                String::new()
            } else {
                format!("https://covers.example/{artist_idx}/{album_no}.jpg")
            };

            writer.serialize(Row {
                artist: artist.to_string(),
                album_title: format!(
                    "{} {}",
                    TITLE_WORDS[rng.random_range(0..TITLE_WORDS.len())],
                    TITLE_WORDS[rng.random_range(0..TITLE_WORDS.len())]
                ),
                year: year_text,
                label: LABELS[rng.random_range(0..LABELS.len())].to_string(),
                track_count: track_count_text,
                tracklist: tracklist.join(" | "),
                thumb,
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    println!("Wrote {rows} albums to {output_path}");
    Ok(())
}
