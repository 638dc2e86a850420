use eframe::egui::{self, Align2, Color32, Frame, Id, Order, RichText, Stroke, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Polygon, Text};

use crate::chart::tooltip::{band_tooltip, hovered_band, Tooltip};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectral plot (central panel)
// ---------------------------------------------------------------------------

/// Render bands, curves and labels against the chart's own scales. The plot
/// is not pannable or zoomable: its bounds always equal the two axis domains.
pub fn spectral_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.chart;
    let (x_min, x_max) = chart.scales().wavelength().domain.display_bounds();
    let (y_min, y_max) = chart.scales().reflectance().domain.display_bounds();

    let response = Plot::new("spectral_plot")
        .x_axis_label("Wavelength (µm)")
        .y_axis_label("Reflectance")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));

            // Bands first so curves sit on top.
            for band in &state.bands {
                let rect = vec![
                    [band.wavelength_start, y_min],
                    [band.wavelength_end, y_min],
                    [band.wavelength_end, y_max],
                    [band.wavelength_start, y_max],
                ];
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(rect))
                        .fill_color(state.band_fill)
                        .stroke(Stroke::NONE),
                );
            }

            for (idx, drawn) in chart.series().iter().enumerate() {
                let points: PlotPoints = chart.plot_points(drawn).into_iter().collect();
                plot_ui.line(
                    Line::new(points)
                        .name(&drawn.series.name)
                        .color(drawn.series.color)
                        .width(2.0),
                );

                let [lx, ly] = chart.label_anchor(idx);
                plot_ui.text(
                    Text::new(
                        [lx, ly].into(),
                        RichText::new(&drawn.series.name).size(14.0),
                    )
                    .color(drawn.series.color)
                    .anchor(Align2::LEFT_CENTER),
                );
            }

            let wavelength = plot_ui.pointer_coordinate().map(|p| p.x);
            let hovered = wavelength.and_then(|w| hovered_band(&state.bands, w));
            hovered.cloned()
        });

    let cursor = response
        .response
        .hover_pos()
        .filter(|_| response.response.hovered());
    let tooltip = band_tooltip(cursor, response.inner.as_ref());
    show_tooltip(ui.ctx(), &tooltip);

    if chart.series().is_empty() && state.bands.is_empty() {
        ui.put(
            response.response.rect,
            egui::Label::new(RichText::new("Select two files and press Plot").weak()),
        );
    }
}

fn show_tooltip(ctx: &egui::Context, tooltip: &Tooltip) {
    let Tooltip::Shown {
        title,
        range,
        position,
    } = tooltip
    else {
        return;
    };

    egui::Area::new(Id::new("band_tooltip"))
        .order(Order::Tooltip)
        .fixed_pos(*position)
        .interactable(false)
        .show(ctx, |ui: &mut Ui| {
            Frame::popup(ui.style())
                .fill(Color32::WHITE)
                .stroke(Stroke::new(1.0, Color32::BLACK))
                .show(ui, |ui: &mut Ui| {
                    ui.label(RichText::new(title).strong().color(Color32::BLACK));
                    ui.label(RichText::new(range).color(Color32::BLACK));
                });
        });
}
