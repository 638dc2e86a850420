//! Chart model: the two scales, the series drawn so far, and the colour
//! assignment, all owned by one [`ChartContext`] that the UI state threads
//! through every operation touching an axis.

pub mod scale;
pub mod tooltip;

use crate::color::ColorAssigner;
use crate::data::model::{SpectralSample, SpectralSeries};
use crate::error::Result;
use scale::{compute_dynamic_domain, AxisDomain, ChartScales};

// ---------------------------------------------------------------------------
// DrawnSeries
// ---------------------------------------------------------------------------

/// A series as it sits on the chart. Geometry is not rescaled when the
/// dynamic axis changes later: `drawn_domain` remembers the reflectance
/// domain the curve was first drawn against.
#[derive(Debug, Clone)]
pub struct DrawnSeries {
    pub series: SpectralSeries,
    pub drawn_domain: AxisDomain,
}

// ---------------------------------------------------------------------------
// ChartContext
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ChartContext {
    scales: ChartScales,
    drawn: Vec<DrawnSeries>,
    colors: ColorAssigner,
}

impl ChartContext {
    pub fn new(scales: ChartScales, colors: ColorAssigner) -> Self {
        Self {
            scales,
            drawn: Vec::new(),
            colors,
        }
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    /// Drawn series in insertion order.
    pub fn series(&self) -> &[DrawnSeries] {
        &self.drawn
    }

    /// Add a series: rescale the dynamic axis to `[0, max reflectance]` of
    /// this series alone, then draw it against the new domain.
    ///
    /// Nothing changes if the domain cannot be computed.
    pub fn add_series(&mut self, name: String, samples: Vec<SpectralSample>) -> Result<()> {
        let domain = compute_dynamic_domain(samples.iter().map(|s| s.reflectance))?;
        self.scales.set_reflectance_domain(domain);

        let color = self.colors.color_for(&name);
        self.drawn.push(DrawnSeries {
            series: SpectralSeries {
                name,
                color,
                samples,
            },
            drawn_domain: domain,
        });
        Ok(())
    }

    /// Remove every series and its label. The axes and colour assignments
    /// stay as they are.
    pub fn clear(&mut self) -> usize {
        let removed = self.drawn.len();
        self.drawn.clear();
        removed
    }

    /// `[x, y]` plot coordinates of a drawn series' curve against the current
    /// scales. Samples that land on no finite position (infinite values) are
    /// left out of the geometry.
    pub fn plot_points(&self, drawn: &DrawnSeries) -> Vec<[f64; 2]> {
        let reflectance = self.scales.reflectance();
        drawn
            .series
            .samples
            .iter()
            .map(|s| {
                [
                    s.wavelength,
                    reflectance.reproject(s.reflectance, drawn.drawn_domain),
                ]
            })
            .filter(|[x, y]| x.is_finite() && y.is_finite())
            .collect()
    }

    /// Anchor for the `index`-th legend label, in plot coordinates: near the
    /// right edge, stacked downward from the top in insertion order. A full
    /// column continues in a new column to its left.
    pub fn label_anchor(&self, index: usize) -> [f64; 2] {
        const LEFT: f64 = 0.8;
        const COLUMN_WIDTH: f64 = 0.2;
        const COLUMNS: usize = 4;
        const TOP: f64 = 0.96;
        const STEP: f64 = 0.045;
        const PER_COLUMN: usize = 21;

        let column = (index / PER_COLUMN) % COLUMNS;
        let row = index % PER_COLUMN;
        [
            self.scales.wavelength().invert(LEFT - COLUMN_WIDTH * column as f64),
            self.scales.reflectance().invert(TOP - STEP * row as f64),
        ]
    }
}
