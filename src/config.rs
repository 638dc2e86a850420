use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::Color32;
use serde::Deserialize;

use crate::chart::scale::AxisDomain;
use crate::color::{self, CATEGORY10};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RUSTY_SPECTRA_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "rusty-spectra.json";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// JSON band file, keyed by dataset.
    pub band_file: PathBuf,
    /// Dataset whose bands are shown at startup.
    pub default_dataset: String,
    /// Fixed wavelength axis, µm.
    pub wavelength_domain: [f64; 2],
    /// Reflectance axis before the first series arrives.
    pub reflectance_domain: [f64; 2],
    /// Series colours, `#rrggbb`.
    pub palette: Vec<String>,
    pub band_color: String,
    pub band_opacity: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            band_file: PathBuf::from("assets/bands.json"),
            default_dataset: "landsat9".to_string(),
            wavelength_domain: [0.0, 2.5],
            reflectance_domain: [0.0, 1.0],
            palette: CATEGORY10.iter().map(|s| s.to_string()).collect(),
            band_color: "#0000ff".to_string(),
            band_opacity: 0.2,
        }
    }
}

impl ViewerConfig {
    /// Load from `$RUSTY_SPECTRA_CONFIG`, then `./rusty-spectra.json`, else
    /// defaults. A broken file is logged and ignored.
    pub fn load() -> Self {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let path = match explicit {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => PathBuf::from(DEFAULT_CONFIG_FILE),
            None => return Self::default(),
        };

        match Self::from_file(&path) {
            Ok(cfg) => {
                log::info!("Loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("Using default config: {e:#}");
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn wavelength_domain(&self) -> AxisDomain {
        self.wavelength_domain.into()
    }

    pub fn reflectance_domain(&self) -> AxisDomain {
        self.reflectance_domain.into()
    }

    pub fn series_palette(&self) -> Vec<Color32> {
        color::parse_palette(&self.palette)
    }

    /// Translucent fill for band rectangles.
    pub fn band_fill(&self) -> Color32 {
        let base = color::parse_hex(&self.band_color).unwrap_or(Color32::BLUE);
        let alpha = (self.band_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha)
    }
}
