use std::collections::BTreeMap;
use std::str::FromStr;

use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Category palette
// ---------------------------------------------------------------------------

/// Ten-colour categorical palette used for series when no config overrides it.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Parse a `#rrggbb` (or `rrggbb`) colour.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb: Srgb<u8> = Srgb::from_str(hex.trim()).ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Parse a list of hex colours, skipping (and logging) the bad ones. Falls
/// back to [`CATEGORY10`] if nothing usable is left.
pub fn parse_palette(hexes: &[String]) -> Vec<Color32> {
    let colors: Vec<Color32> = hexes
        .iter()
        .filter_map(|h| {
            let c = parse_hex(h);
            if c.is_none() {
                log::warn!("Ignoring invalid palette colour {h:?}");
            }
            c
        })
        .collect();

    if colors.is_empty() {
        CATEGORY10.iter().filter_map(|h| parse_hex(h)).collect()
    } else {
        colors
    }
}

// ---------------------------------------------------------------------------
// Color assignment: series name → Color32
// ---------------------------------------------------------------------------

/// Hands out palette colours to series names in order of first sight.
/// The same name always gets the same colour; the palette wraps once every
/// colour has been used.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette: Vec<Color32>,
    assigned: BTreeMap<String, usize>,
}

impl ColorAssigner {
    pub fn new(palette: Vec<Color32>) -> Self {
        let palette = if palette.is_empty() {
            vec![Color32::GRAY]
        } else {
            palette
        };
        Self {
            palette,
            assigned: BTreeMap::new(),
        }
    }

    /// Colour for `name`, assigning the next palette slot on first sight.
    pub fn color_for(&mut self, name: &str) -> Color32 {
        let next = self.assigned.len();
        let index = *self.assigned.entry(name.to_string()).or_insert(next);
        self.palette[index % self.palette.len()]
    }
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(CATEGORY10.iter().filter_map(|h| parse_hex(h)).collect())
    }
}
