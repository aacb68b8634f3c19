//! Top-level entry point for running the live graph in a native window.

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::config::GraphConfig;
use crate::sink::GraphCommand;

use super::LiveGraphApp;

/// Launch the graph window, fed by the receiver half of
/// [`graph_channel()`](crate::graph_channel).
///
/// Blocks until the window is closed. An invalid `cfg` is reported before any
/// window is opened.
pub fn run_live_graph(
    rx: Receiver<GraphCommand>,
    mut cfg: GraphConfig,
) -> eframe::Result<()> {
    let app = LiveGraphApp::with_receiver(rx, &cfg)
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(950.0, 500.0));
    }

    log::info!("opening graph window {title:?}");
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
