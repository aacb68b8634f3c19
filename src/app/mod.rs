//! egui/eframe front end for [`LiveGraph`].
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`painter`]  | [`EguiSurface`]: the engine's draw calls on an egui painter |
//! | [`run`]      | [`run_live_graph()`] entry point opening a native window |
//!
//! [`LiveGraphApp`] itself is a thin shell: zoom buttons, the pan slider and
//! the channel checkboxes forward to the engine, the plot area is drawn through
//! [`EguiSurface`], and pointer movement over it feeds the hover readout.

mod painter;
mod run;

pub use painter::EguiSurface;
pub use run::run_live_graph;

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;

use crate::config::GraphConfig;
use crate::error::GraphResult;
use crate::graph::LiveGraph;
use crate::sink::GraphCommand;

const HOVER_PLACEHOLDER: &str = "Hover over plot for values";

pub struct LiveGraphApp {
    pub graph: LiveGraph,
    rx: Option<Receiver<GraphCommand>>,
    /// Slider position, mirrored into the view on change.
    pan: f64,
    hover_text: String,
    hovering: bool,
    repaint_interval: Duration,
}

impl LiveGraphApp {
    pub fn new(cfg: &GraphConfig) -> GraphResult<Self> {
        Ok(Self {
            graph: LiveGraph::new(cfg)?,
            rx: None,
            pan: 0.0,
            hover_text: HOVER_PLACEHOLDER.to_string(),
            hovering: false,
            repaint_interval: Duration::from_millis(cfg.repaint_interval_ms),
        })
    }

    /// Create an app that applies commands from `rx` at the start of every frame.
    pub fn with_receiver(rx: Receiver<GraphCommand>, cfg: &GraphConfig) -> GraphResult<Self> {
        let mut app = Self::new(cfg)?;
        app.rx = Some(rx);
        Ok(app)
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Zoom -").clicked() {
                self.graph.zoom_out();
            }
            if ui.button("Zoom +").clicked() {
                self.graph.zoom_in();
            }
            ui.label(self.graph.window_label());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("Later");
                let slider = egui::Slider::new(&mut self.pan, 0.0..=1.0).show_value(false);
                if ui.add(slider).changed() {
                    self.graph.set_pan(self.pan);
                }
                ui.label("Earlier");
            });
        });
    }

    fn channel_toggles_ui(&mut self, ui: &mut egui::Ui) {
        let channels: Vec<_> = self
            .graph
            .channels()
            .iter()
            .map(|c| (c.id, c.name.clone()))
            .collect();
        ui.horizontal_wrapped(|ui| {
            for (id, name) in channels {
                let mut visible = self.graph.is_visible(id);
                if ui.checkbox(&mut visible, name).changed() {
                    self.graph.set_visible(id, visible);
                }
            }
        });
    }

    fn plot_ui(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let mut surface = EguiSurface::new(painter, response.rect);
        self.graph.draw(&mut surface);

        if let Some(pos) = response.hover_pos() {
            let [x, y] = surface.to_local(pos);
            self.hover_text = self.graph.hover_text(x, y).unwrap_or_default();
            self.hovering = true;
        } else if self.hovering {
            self.hover_text.clear();
            self.hovering = false;
        }
    }
}

impl eframe::App for LiveGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rx) = &self.rx {
            self.graph.drain(rx);
        }

        egui::TopBottomPanel::top("livegraph_controls").show(ctx, |ui| {
            self.controls_ui(ui);
            self.channel_toggles_ui(ui);
        });

        egui::TopBottomPanel::bottom("livegraph_hover").show(ctx, |ui| {
            ui.label(&self.hover_text);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_ui(ui);
        });

        if self.graph.needs_redraw() {
            // Changed after the plot was painted this frame.
            ctx.request_repaint();
        } else {
            // New samples arrive without input events; keep polling the receiver.
            ctx.request_repaint_after(self.repaint_interval);
        }
    }
}
