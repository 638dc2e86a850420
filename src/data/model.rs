use std::collections::BTreeMap;
use std::fmt;

use eframe::egui::Color32;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// SpectralSample – one measurement point
// ---------------------------------------------------------------------------

/// One (wavelength, reflectance) pair, built by pairing two parsed columns
/// index by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralSample {
    /// Wavelength in µm.
    pub wavelength: f64,
    pub reflectance: f64,
}

// ---------------------------------------------------------------------------
// SpectralSeries – one submitted file pair
// ---------------------------------------------------------------------------

/// A named curve: the samples of one successful submission plus the colour
/// it is drawn with. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct SpectralSeries {
    pub name: String,
    pub color: Color32,
    /// In file order; not sorted, not deduplicated.
    pub samples: Vec<SpectralSample>,
}

impl SpectralSeries {
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

// ---------------------------------------------------------------------------
// Band – a reference wavelength interval
// ---------------------------------------------------------------------------

/// A sensor band as stored in the band file:
///
/// ```json
/// { "band": "B4 - Red", "wavelength_start": 0.64, "wavelength_end": 0.67 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Band {
    #[serde(rename = "band")]
    pub name: String,
    pub wavelength_start: f64,
    pub wavelength_end: f64,
}

impl Band {
    /// Whether `wavelength` falls inside the band, whichever way round its
    /// bounds were written.
    pub fn contains(&self, wavelength: f64) -> bool {
        let lo = self.wavelength_start.min(self.wavelength_end);
        let hi = self.wavelength_start.max(self.wavelength_end);
        (lo..=hi).contains(&wavelength)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {} µm)",
            self.name, self.wavelength_start, self.wavelength_end
        )
    }
}

// ---------------------------------------------------------------------------
// BandCatalog – the whole band file
// ---------------------------------------------------------------------------

/// Band file contents: dataset key (e.g. `"landsat9"`) → its bands.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct BandCatalog {
    datasets: BTreeMap<String, Vec<Band>>,
}

impl BandCatalog {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Bands of `dataset`; an unknown key yields an empty set.
    pub fn bands_for(&self, dataset: &str) -> Vec<Band> {
        self.datasets.get(dataset).cloned().unwrap_or_default()
    }

    /// Dataset keys in sorted order.
    pub fn dataset_names(&self) -> Vec<String> {
        self.datasets.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "landsat9": [
            { "band": "B2 - Blue", "wavelength_start": 0.45, "wavelength_end": 0.51 },
            { "band": "B3 - Green", "wavelength_start": 0.53, "wavelength_end": 0.59 }
        ],
        "sentinel2": [
            { "band": "B12 - SWIR 2", "wavelength_start": 2.1, "wavelength_end": 2.28 }
        ]
    }"#;

    #[test]
    fn test_catalog_parses_band_field() {
        let catalog = BandCatalog::from_json(CATALOG).unwrap();
        let bands = catalog.bands_for("landsat9");
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].name, "B2 - Blue");
        assert_eq!(bands[1].wavelength_end, 0.59);
        assert_eq!(catalog.dataset_names(), vec!["landsat9", "sentinel2"]);
    }

    #[test]
    fn test_unknown_dataset_is_empty() {
        let catalog = BandCatalog::from_json(CATALOG).unwrap();
        assert!(catalog.bands_for("modis").is_empty());
    }

    #[test]
    fn test_band_contains_handles_reversed_bounds() {
        let band = Band {
            name: "reversed".into(),
            wavelength_start: 0.9,
            wavelength_end: 0.8,
        };
        assert!(band.contains(0.85));
        assert!(band.contains(0.8));
        assert!(!band.contains(0.95));
    }

    #[test]
    fn test_series_sample_count() {
        let series = SpectralSeries {
            name: "Quartz".into(),
            color: Color32::RED,
            samples: vec![
                SpectralSample { wavelength: 1.1, reflectance: 0.7 },
                SpectralSample { wavelength: 1.0, reflectance: 0.3 },
            ],
        };
        assert_eq!(series.sample_count(), 2);
    }
}
