use crate::error::{Result, SpectraError};

// ---------------------------------------------------------------------------
// AxisDomain
// ---------------------------------------------------------------------------

/// Data range backing one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub low: f64,
    pub high: f64,
}

impl AxisDomain {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// `(min, max)` with a non-zero width, for handing to the plot widget
    /// which cannot show reversed or empty bounds.
    pub fn display_bounds(&self) -> (f64, f64) {
        let lo = self.low.min(self.high);
        let hi = self.low.max(self.high);
        if (hi - lo).abs() < f64::EPSILON {
            (lo - 0.5, hi + 0.5)
        } else {
            (lo, hi)
        }
    }
}

impl From<[f64; 2]> for AxisDomain {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

/// New dynamic-axis domain for a freshly added series: `[0, max]` over the
/// finite values. Infinite values never widen the axis.
pub fn compute_dynamic_domain(reflectances: impl IntoIterator<Item = f64>) -> Result<AxisDomain> {
    let max = reflectances
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))));
    max.map(|high| AxisDomain::new(0.0, high))
        .ok_or(SpectraError::EmptyInput)
}

// ---------------------------------------------------------------------------
// LinearScale
// ---------------------------------------------------------------------------

/// Linear map from a data domain onto an output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: AxisDomain,
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: AxisDomain, range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// A zero-width domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return (self.range[0] + self.range[1]) / 2.0;
        }
        let t = (value - self.domain.low) / span;
        self.range[0] + t * (self.range[1] - self.range[0])
    }

    pub fn invert(&self, output: f64) -> f64 {
        let out_span = self.range[1] - self.range[0];
        if out_span == 0.0 {
            return (self.domain.low + self.domain.high) / 2.0;
        }
        let t = (output - self.range[0]) / out_span;
        self.domain.low + t * self.domain.span()
    }

    /// Where `value` must be plotted today so that it lands on the same
    /// output position it got when the scale still had domain `drawn_with`.
    pub fn reproject(&self, value: f64, drawn_with: AxisDomain) -> f64 {
        let then = LinearScale::new(drawn_with, self.range);
        self.invert(then.map(value))
    }
}

// ---------------------------------------------------------------------------
// ChartScales – fixed wavelength axis + dynamic reflectance axis
// ---------------------------------------------------------------------------

/// Both chart scales, mapping into unit chart space (0 = left / bottom,
/// 1 = right / top).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    wavelength: LinearScale,
    reflectance: LinearScale,
}

impl ChartScales {
    pub fn new(wavelength_domain: AxisDomain, reflectance_domain: AxisDomain) -> Self {
        Self {
            wavelength: LinearScale::new(wavelength_domain, [0.0, 1.0]),
            reflectance: LinearScale::new(reflectance_domain, [0.0, 1.0]),
        }
    }

    /// The fixed axis. Its domain is never changed after construction.
    pub fn wavelength(&self) -> &LinearScale {
        &self.wavelength
    }

    /// The dynamic axis.
    pub fn reflectance(&self) -> &LinearScale {
        &self.reflectance
    }

    /// Replace the dynamic domain wholesale.
    pub fn set_reflectance_domain(&mut self, domain: AxisDomain) {
        self.reflectance.domain = domain;
    }
}
