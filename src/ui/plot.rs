use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};

use crate::app::ViewerState;
use crate::color::series_palette;
use crate::data::model::{PlotSeries, ViewOptions};

// ---------------------------------------------------------------------------
// ARF plot (central panel)
// ---------------------------------------------------------------------------

/// Render the overlaid effective-area curves in the central panel.
///
/// egui_plot has no log axes, so log scaling is realized by plotting
/// log10-transformed values and saying so in the axis label.
pub fn arf_plot(ui: &mut Ui, state: &mut ViewerState) {
    let width = state.view.line_width.unwrap_or(1.5) as f32;
    let colors = series_palette(state.variants.len());

    let plot = Plot::new("arf_plot")
        .legend(Legend::default())
        .x_axis_label(axis_label(state.view.x_label(), state.view.xlog))
        .y_axis_label(axis_label(state.view.y_label(), state.view.ylog))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    plot.show(ui, |plot_ui| {
        if !state.bounds_applied {
            if let Some(bounds) = initial_bounds(state) {
                plot_ui.set_plot_bounds(bounds);
            }
        }

        for (series, (r, g, b)) in state.variants.iter().zip(colors) {
            let line = Line::new(screen_points(series, &state.view))
                .name(&series.label)
                .color(Color32::from_rgb(r, g, b))
                .width(width);
            plot_ui.line(line);
        }

        // Reference last so it sits on top of the variants.
        let reference = Line::new(screen_points(&state.reference, &state.view))
            .name(&state.reference.label)
            .color(Color32::WHITE)
            .width(width + 0.5);
        plot_ui.line(reference);
    });

    state.bounds_applied = true;
}

fn axis_label(label: &str, log: bool) -> String {
    if log {
        format!("log10 {label}")
    } else {
        label.to_string()
    }
}

/// Series points in screen coordinates; non-finite results (log of a
/// non-positive value, say) are skipped.
fn screen_points(series: &PlotSeries, view: &ViewOptions) -> PlotPoints<'static> {
    series
        .x
        .iter()
        .zip(&series.y)
        .filter_map(|(&x, &y)| {
            let sx = if view.xlog { x.log10() } else { x };
            let sy = if view.ylog { y.log10() } else { y };
            (sx.is_finite() && sy.is_finite()).then_some([sx, sy])
        })
        .collect()
}

/// Initial plot bounds when explicit axis limits were given: the data's
/// screen-space extent with each given limit substituted in.
fn initial_bounds(state: &ViewerState) -> Option<PlotBounds> {
    let view = &state.view;
    if !view.has_limits() {
        return None;
    }

    let mut x0 = f64::INFINITY;
    let mut x1 = f64::NEG_INFINITY;
    let mut y0 = f64::INFINITY;
    let mut y1 = f64::NEG_INFINITY;
    for series in state.variants.iter().chain(std::iter::once(&state.reference)) {
        for p in screen_points(series, view).points() {
            x0 = x0.min(p.x);
            x1 = x1.max(p.x);
            y0 = y0.min(p.y);
            y1 = y1.max(p.y);
        }
    }
    if x0 > x1 || y0 > y1 {
        return None;
    }

    let tx = |v: f64| if view.xlog { v.log10() } else { v };
    let ty = |v: f64| if view.ylog { v.log10() } else { v };
    if let Some(v) = view.xmin {
        x0 = tx(v);
    }
    if let Some(v) = view.xmax {
        x1 = tx(v);
    }
    if let Some(v) = view.ymin {
        y0 = ty(v);
    }
    if let Some(v) = view.ymax {
        y1 = ty(v);
    }

    Some(PlotBounds::from_min_max([x0, y0], [x1, y1]))
}
