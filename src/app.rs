use anyhow::{anyhow, Result};
use eframe::egui;

use crate::data::model::{PlotSeries, ViewOptions};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation (interactive viewer)
// ---------------------------------------------------------------------------

/// Everything the viewer needs, independent of rendering.
pub struct ViewerState {
    pub variants: Vec<PlotSeries>,
    pub reference: PlotSeries,
    pub view: ViewOptions,
    /// Set once the initial plot bounds have been pushed to egui_plot;
    /// afterwards the user's pan/zoom wins.
    pub bounds_applied: bool,
}

pub struct ArfPlotApp {
    pub state: ViewerState,
    style_applied: bool,
}

impl ArfPlotApp {
    pub fn new(variants: Vec<PlotSeries>, reference: PlotSeries, view: ViewOptions) -> Self {
        Self {
            state: ViewerState {
                variants,
                reference,
                view,
                bounds_applied: false,
            },
            style_applied: false,
        }
    }
}

impl eframe::App for ArfPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            if let Some(fs) = self.state.view.font_size {
                ctx.style_mut(|style| {
                    for font_id in style.text_styles.values_mut() {
                        font_id.size = fs as f32;
                    }
                });
            }
            self.style_applied = true;
        }

        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.state.view.title);
            });
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::arf_plot(ui, &mut self.state);
        });
    }
}

/// Open the interactive viewer window. Blocks until it is closed.
pub fn show(variants: Vec<PlotSeries>, reference: PlotSeries, view: ViewOptions) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "arfplot",
        options,
        Box::new(move |_cc| Ok(Box::new(ArfPlotApp::new(variants, reference, view)))),
    )
    .map_err(|e| anyhow!("starting viewer: {e}"))
}
