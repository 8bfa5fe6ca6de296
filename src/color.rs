use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colors: category name → Color32
// ---------------------------------------------------------------------------

/// Maps categorical series names (artists, labels) to distinct colours for
/// the stacked charts.
#[derive(Debug, Clone)]
pub struct SeriesColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SeriesColors {
    /// Build a colour map for a set of series names. Names are deduplicated
    /// and assigned hues in sorted order, so the same set always gets the
    /// same colours.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let unique: std::collections::BTreeSet<&str> = names.into_iter().collect();
        let palette = generate_palette(unique.len());
        let mapping: BTreeMap<String, Color32> = unique
            .into_iter()
            .zip(palette)
            .map(|(name, color)| (name.to_string(), color))
            .collect();

        SeriesColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a series name.
    pub fn color_for(&self, name: &str) -> Color32 {
        self.mapping
            .get(name)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_colors() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        for (i, a) in palette.iter().enumerate() {
            assert!(!palette[i + 1..].contains(a), "duplicate colour {a:?}");
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn series_colors_are_stable_across_input_order() {
        let a = SeriesColors::new(["Gigant", "S.P. Records", "Asfalt"]);
        let b = SeriesColors::new(["Asfalt", "Gigant", "S.P. Records"]);
        assert_eq!(a.color_for("Gigant"), b.color_for("Gigant"));
        assert_eq!(a.color_for("unknown"), Color32::GRAY);
    }
}
