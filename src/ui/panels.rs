use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – series input and band dataset
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Spectral signature");
    ui.separator();

    if ui.button("Choose files…").clicked() {
        pick_files(state);
    }

    match state.selected_files.as_slice() {
        [] => {
            ui.label(RichText::new("No files selected.").weak());
        }
        [wavelengths, reflectance] => {
            ui.label(format!("Wavelengths: {}", file_label(wavelengths)));
            ui.label(format!("Reflectance: {}", file_label(reflectance)));
            if ui.small_button("⇅ Swap").clicked() {
                state.swap_selected_files();
            }
        }
        files => {
            ui.label(
                RichText::new(format!("{} files selected (need 2)", files.len()))
                    .color(ui.visuals().warn_fg_color),
            );
        }
    }

    ui.add_space(6.0);
    ui.label("Series name");
    ui.add(egui::TextEdit::singleline(&mut state.series_name).hint_text("Mineral …"));

    ui.add_space(6.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Plot").clicked() {
            state.submit();
        }
        if ui.button("Clear").clicked() {
            state.clear_chart();
        }
    });

    ui.add_space(12.0);
    ui.heading("Bands");
    ui.separator();

    let current = state.dataset.clone();
    let mut chosen = None;
    egui::ComboBox::from_id_salt("dataset")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for name in &state.available_datasets {
                if ui.selectable_label(current == *name, name).clicked() {
                    chosen = Some(name.clone());
                }
            }
        });
    if let Some(name) = chosen.filter(|n| *n != current) {
        state.select_dataset(name);
    }

    ui.label(format!("{} band(s) shown", state.bands.len()));
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Choose spectral files…").clicked() {
                pick_files(state);
                ui.close_menu();
            }
            if ui.button("Clear chart").clicked() {
                state.clear_chart();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} series", state.chart.series().len()));

        if state.is_busy() {
            ui.separator();
            ui.spinner();
        }
    });
}

// ---------------------------------------------------------------------------
// Alert dialog
// ---------------------------------------------------------------------------

/// Modal-style notice; stays until acknowledged.
pub fn alert_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(alert) = &state.alert else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(alert.title.as_str())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(alert.message.as_str());
            ui.add_space(8.0);
            ui.vertical_centered(|ui: &mut Ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.alert = None;
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn pick_files(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Select the wavelength file and the reflectance file")
        .add_filter("Text files", &["txt", "asc", "dat", "csv"])
        .add_filter("All files", &["*"])
        .pick_files();

    if let Some(paths) = files {
        log::info!("Selected {} file(s)", paths.len());
        state.selected_files = paths;
    }
}
