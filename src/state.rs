use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui::Color32;
use rand::Rng;

use crate::chart::scale::ChartScales;
use crate::chart::ChartContext;
use crate::color::ColorAssigner;
use crate::config::ViewerConfig;
use crate::data::loader::{self, BandLoad};
use crate::data::model::Band;
use crate::data::parse::build_series;
use crate::error::SpectraError;

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// A modal notice the user has to acknowledge.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<&SpectraError> for Alert {
    fn from(err: &SpectraError) -> Self {
        Alert {
            title: err.title().to_string(),
            message: err.user_message(),
        }
    }
}

/// Display name for a new series: the trimmed input, or `"Mineral <0-99>"`
/// when the input is blank.
pub fn resolve_series_name(input: &str, rng: &mut impl Rng) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        format!("Mineral {}", rng.gen_range(0..100))
    } else {
        trimmed.to_string()
    }
}

/// A file pair being read in the background.
struct PendingSubmission {
    name: String,
    rx: Receiver<Result<[String; 2], SpectraError>>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,

    /// Scales, drawn series and colours.
    pub chart: ChartContext,

    /// Files from the picker: `[0]` wavelengths, `[1]` reflectance.
    pub selected_files: Vec<PathBuf>,

    /// Series name text box.
    pub series_name: String,

    /// Active band overlay.
    pub bands: Vec<Band>,
    pub band_fill: Color32,

    /// Dataset currently selected.
    pub dataset: String,

    /// Dataset keys offered by the band file.
    pub available_datasets: Vec<String>,

    /// Notice waiting to be acknowledged.
    pub alert: Option<Alert>,

    pending_submissions: Vec<PendingSubmission>,
    pending_bands: Vec<Receiver<anyhow::Result<BandLoad>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        let chart = ChartContext::new(
            ChartScales::new(config.wavelength_domain(), config.reflectance_domain()),
            ColorAssigner::new(config.series_palette()),
        );
        Self {
            chart,
            selected_files: Vec::new(),
            series_name: String::new(),
            bands: Vec::new(),
            band_fill: config.band_fill(),
            dataset: config.default_dataset.clone(),
            available_datasets: vec![config.default_dataset.clone()],
            alert: None,
            pending_submissions: Vec::new(),
            pending_bands: Vec::new(),
            config,
        }
    }

    /// Whether any background read is still outstanding.
    pub fn is_busy(&self) -> bool {
        !self.pending_submissions.is_empty() || !self.pending_bands.is_empty()
    }

    // -- series -------------------------------------------------------------

    /// Swap which selected file is read as wavelengths.
    pub fn swap_selected_files(&mut self) {
        if self.selected_files.len() == 2 {
            self.selected_files.swap(0, 1);
        }
    }

    /// Start reading the selected pair. Anything but exactly two files is
    /// rejected before touching the disk.
    pub fn submit(&mut self) {
        let name = resolve_series_name(&self.series_name, &mut rand::thread_rng());
        match <[PathBuf; 2]>::try_from(self.selected_files.clone()) {
            Ok(paths) => {
                log::info!(
                    "Reading {} and {} as {name:?}",
                    paths[0].display(),
                    paths[1].display()
                );
                let rx = loader::spawn_pair_read(paths);
                self.pending_submissions.push(PendingSubmission { name, rx });
            }
            Err(files) => self.report(SpectraError::WrongFileCount { got: files.len() }),
        }
    }

    /// Parse a pair of file contents and draw it. On failure the chart is
    /// left exactly as it was.
    pub fn add_series_from_text(
        &mut self,
        name: String,
        wavelength_text: &str,
        reflectance_text: &str,
    ) -> Result<(), SpectraError> {
        let samples = build_series(wavelength_text, reflectance_text)?;
        self.chart.add_series(name, samples)?;
        if let Some(drawn) = self.chart.series().last() {
            log::info!(
                "Added {:?} with {} samples, reflectance axis now [{}, {}]",
                drawn.series.name,
                drawn.series.sample_count(),
                drawn.drawn_domain.low,
                drawn.drawn_domain.high
            );
        }
        Ok(())
    }

    /// Remove all series; bands stay.
    pub fn clear_chart(&mut self) {
        let removed = self.chart.clear();
        log::info!("Cleared {removed} series");
        self.alert = Some(Alert {
            title: "Chart Cleared".to_string(),
            message: "The chart has been cleared.".to_string(),
        });
    }

    // -- bands --------------------------------------------------------------

    /// Select a dataset and reload its bands from the band file.
    pub fn select_dataset(&mut self, dataset: String) {
        self.dataset = dataset;
        self.request_bands();
    }

    /// Re-read the band file for the current dataset.
    pub fn request_bands(&mut self) {
        let rx = loader::spawn_band_load(self.config.band_file.clone(), self.dataset.clone());
        self.pending_bands.push(rx);
    }

    /// Replace (never merge) the band overlay. A load for a dataset that is
    /// no longer selected only refreshes the dataset list.
    pub fn apply_band_load(&mut self, load: BandLoad) {
        if !load.available.is_empty() {
            self.available_datasets = load.available;
        }
        if load.dataset != self.dataset {
            log::debug!("Ignoring stale band load for {:?}", load.dataset);
            return;
        }
        log::info!("Showing {} band(s) for {:?}", load.bands.len(), load.dataset);
        for band in &load.bands {
            log::debug!("  {band}");
        }
        self.bands = load.bands;
    }

    // -- background completions --------------------------------------------

    /// Collect finished background reads. Called once per frame; each
    /// completion is handled to the end before the next.
    pub fn poll(&mut self) {
        let mut finished = Vec::new();
        self.pending_submissions.retain(|p| match p.rx.try_recv() {
            Ok(result) => {
                finished.push((p.name.clone(), result));
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                finished.push((p.name.clone(), Err(SpectraError::WorkerDisconnected)));
                false
            }
        });
        for (name, result) in finished {
            let outcome = result.and_then(|[wl, refl]| self.add_series_from_text(name, &wl, &refl));
            if let Err(e) = outcome {
                self.report(e);
            }
        }

        let mut loads = Vec::new();
        self.pending_bands.retain(|rx| match rx.try_recv() {
            Ok(result) => {
                loads.push(result);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => false,
        });
        for result in loads {
            match result {
                Ok(load) => self.apply_band_load(load),
                // Console only; the previous bands stay up.
                Err(e) => log::error!("Failed to load band data: {e:#}"),
            }
        }
    }

    fn report(&mut self, err: SpectraError) {
        log::warn!("{err}");
        self.alert = Some(Alert::from(&err));
    }
}
