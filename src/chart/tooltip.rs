use eframe::egui::{Pos2, Vec2};

use crate::data::model::Band;

/// Tooltip offset from the cursor, in screen points.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// What the band tooltip should look like this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Tooltip {
    Hidden,
    Shown {
        title: String,
        range: String,
        /// Top-left corner in screen coordinates.
        position: Pos2,
    },
}

/// Band under the cursor's wavelength. Bands cover the full chart height, so
/// only the wavelength matters; where bands overlap the last one drawn wins.
pub fn hovered_band(bands: &[Band], wavelength: f64) -> Option<&Band> {
    bands.iter().rev().find(|b| b.contains(wavelength))
}

/// Tooltip for the given cursor position and hovered band.
pub fn band_tooltip(cursor: Option<Pos2>, band: Option<&Band>) -> Tooltip {
    match (cursor, band) {
        (Some(cursor), Some(band)) => Tooltip::Shown {
            title: band.name.clone(),
            range: format!("{} - {} µm", band.wavelength_start, band.wavelength_end),
            position: cursor + TOOLTIP_OFFSET,
        },
        _ => Tooltip::Hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(name: &str, start: f64, end: f64) -> Band {
        Band {
            name: name.into(),
            wavelength_start: start,
            wavelength_end: end,
        }
    }

    #[test]
    fn test_tooltip_text_and_offset() {
        let red = band("B4 - Red", 0.64, 0.67);
        let tip = band_tooltip(Some(Pos2::new(100.0, 40.0)), Some(&red));
        assert_eq!(
            tip,
            Tooltip::Shown {
                title: "B4 - Red".into(),
                range: "0.64 - 0.67 µm".into(),
                position: Pos2::new(110.0, 50.0),
            }
        );
    }

    #[test]
    fn test_hidden_without_band_or_cursor() {
        let red = band("B4 - Red", 0.64, 0.67);
        assert_eq!(band_tooltip(Some(Pos2::ZERO), None), Tooltip::Hidden);
        assert_eq!(band_tooltip(None, Some(&red)), Tooltip::Hidden);
    }

    #[test]
    fn test_overlap_prefers_last() {
        let bands = vec![band("Pan", 0.50, 0.68), band("Red", 0.64, 0.67)];
        assert_eq!(hovered_band(&bands, 0.65).unwrap().name, "Red");
        assert_eq!(hovered_band(&bands, 0.55).unwrap().name, "Pan");
        assert!(hovered_band(&bands, 1.0).is_none());
    }
}
