//! `LiveGraph`: the engine facade used by the window and by embedding code.

use std::collections::HashMap;
use std::sync::mpsc::Receiver;

use crate::config::GraphConfig;
use crate::data::channels::{ChannelId, ChannelSet};
use crate::data::store::SampleStore;
use crate::error::GraphResult;
use crate::hover::{HoverReadout, HoverResolver};
use crate::projector::PlotGeometry;
use crate::render::Renderer;
use crate::sink::GraphCommand;
use crate::surface::DrawSurface;
use crate::view::ViewWindow;

/// Owns the sample history, channel list, zoom/pan state and the geometry of
/// the last drawn frame.
///
/// Every method runs to completion on the caller's thread; feed it from other
/// threads through a [`GraphSink`](crate::GraphSink) and [`drain`](Self::drain).
#[derive(Debug, Clone)]
pub struct LiveGraph {
    store: SampleStore,
    channels: ChannelSet,
    view: ViewWindow,
    renderer: Renderer,
    geometry: Option<PlotGeometry>,
    dirty: bool,
}

impl LiveGraph {
    pub fn new(cfg: &GraphConfig) -> GraphResult<Self> {
        cfg.validate()?;
        Ok(Self {
            store: SampleStore::new(cfg.max_points)?,
            channels: ChannelSet::new(),
            view: ViewWindow::new(cfg.default_window_secs, cfg.min_window_secs),
            renderer: Renderer::from_config(cfg),
            geometry: None,
            dirty: true,
        })
    }

    /// Start a new run: clear all history and adopt `channels` in display order.
    ///
    /// Visibility choices are kept for ids seen in earlier runs.
    pub fn configure<S: AsRef<str>>(&mut self, channels: &[(ChannelId, S)]) {
        self.channels.configure(channels);
        self.store.reset(&self.channels.ids());
        self.geometry = None;
        self.dirty = true;
        log::debug!("configured {} channels", self.channels.len());
    }

    /// Record one sampling tick. Returns the number of samples stored.
    pub fn ingest(&mut self, elapsed_secs: f64, values: &HashMap<ChannelId, f64>) -> usize {
        let mut stored = 0;
        for ch in self.channels.iter() {
            let Some(&v) = values.get(&ch.id) else {
                continue;
            };
            if self.store.append(ch.id, elapsed_secs, v) {
                stored += 1;
            }
        }
        if stored > 0 {
            self.dirty = true;
        }
        stored
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
        self.dirty = true;
    }

    pub fn zoom_out(&mut self) {
        let extent = self.store.global_extent();
        self.view.zoom_out(extent.as_ref());
        self.dirty = true;
    }

    pub fn set_pan(&mut self, fraction: f64) {
        self.view.set_pan(fraction);
        log::debug!("pan {:.3}", self.view.pan_fraction());
        self.dirty = true;
    }

    pub fn set_visible(&mut self, id: ChannelId, visible: bool) {
        log::debug!("channel {id} visible={visible}");
        self.channels.set_visible(id, visible);
        self.dirty = true;
    }

    pub fn is_visible(&self, id: ChannelId) -> bool {
        self.channels.is_visible(id)
    }

    /// Apply one command received from a [`GraphSink`](crate::GraphSink).
    pub fn apply(&mut self, cmd: GraphCommand) {
        match cmd {
            GraphCommand::Configure { channels } => self.configure(&channels),
            GraphCommand::Ingest {
                elapsed_secs,
                values,
            } => {
                self.ingest(elapsed_secs, &values);
            }
            GraphCommand::ZoomIn => self.zoom_in(),
            GraphCommand::ZoomOut => self.zoom_out(),
            GraphCommand::Pan(fraction) => self.set_pan(fraction),
            GraphCommand::SetVisible { id, visible } => self.set_visible(id, visible),
        }
    }

    /// Apply every pending command without blocking. Returns how many were applied.
    pub fn drain(&mut self, rx: &Receiver<GraphCommand>) -> usize {
        let mut n = 0;
        while let Ok(cmd) = rx.try_recv() {
            self.apply(cmd);
            n += 1;
        }
        n
    }

    /// Draw a frame and remember its geometry for hover lookups.
    pub fn draw<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> Option<PlotGeometry> {
        self.geometry = self
            .renderer
            .draw(&self.store, &self.channels, &self.view, surface);
        self.dirty = false;
        self.geometry
    }

    /// Readout for the pointer at `(px, py)` based on the last drawn frame.
    pub fn hover(&self, px: f32, py: f32) -> Option<HoverReadout> {
        HoverResolver::resolve(self.geometry.as_ref(), &self.store, &self.channels, px, py)
    }

    pub fn hover_text(&self, px: f32, py: f32) -> Option<String> {
        self.hover(px, py).map(|r| r.to_string())
    }

    /// State changed since the last [`draw`](Self::draw).
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn geometry(&self) -> Option<&PlotGeometry> {
        self.geometry.as_ref()
    }

    pub fn window_label(&self) -> String {
        self.view.label()
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    pub fn channels(&self) -> &ChannelSet {
        &self.channels
    }

    pub fn view(&self) -> &ViewWindow {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::graph_channel;
    use crate::surface::RecordingSurface;

    #[test]
    fn invalid_config_fails_at_construction() {
        let cfg = GraphConfig {
            max_points: 0,
            ..Default::default()
        };
        assert!(LiveGraph::new(&cfg).is_err());
    }

    #[test]
    fn ingest_skips_missing_and_nan() {
        let mut graph = LiveGraph::new(&GraphConfig::default()).unwrap();
        graph.configure(&[(1, "A"), (2, "B"), (3, "C")]);
        let values = HashMap::from([(1, 20.0), (2, f64::NAN), (9, 1.0)]);
        assert_eq!(graph.ingest(0.0, &values), 1);
        assert_eq!(graph.store().len(1), 1);
        assert_eq!(graph.store().len(2), 0);
        assert_eq!(graph.store().len(3), 0);
    }

    #[test]
    fn failed_draw_invalidates_cached_geometry() {
        let mut graph = LiveGraph::new(&GraphConfig::default()).unwrap();
        graph.configure(&[(1, "A")]);
        graph.ingest(0.0, &HashMap::from([(1, 20.0)]));
        graph.ingest(1.0, &HashMap::from([(1, 21.0)]));
        let mut surface = RecordingSurface::new(950.0, 500.0);
        assert!(graph.draw(&mut surface).is_some());
        assert!(graph.hover(500.0, 200.0).is_some());

        surface.resize(100.0, 500.0);
        assert!(graph.draw(&mut surface).is_none());
        assert!(graph.geometry().is_none());
        assert!(graph.hover(500.0, 200.0).is_none());
    }

    #[test]
    fn configure_drops_geometry_and_history() {
        let mut graph = LiveGraph::new(&GraphConfig::default()).unwrap();
        graph.configure(&[(1, "A")]);
        graph.ingest(0.0, &HashMap::from([(1, 20.0)]));
        graph.ingest(1.0, &HashMap::from([(1, 21.0)]));
        graph.draw(&mut RecordingSurface::new(950.0, 500.0));
        graph.configure(&[(1, "A")]);
        assert!(graph.geometry().is_none());
        assert!(graph.store().is_empty());
    }

    #[test]
    fn mutations_mark_dirty_and_draw_clears() {
        let mut graph = LiveGraph::new(&GraphConfig::default()).unwrap();
        let mut surface = RecordingSurface::new(950.0, 500.0);
        assert!(graph.needs_redraw());
        graph.configure(&[(1, "A")]);
        graph.draw(&mut surface);
        assert!(!graph.needs_redraw());

        // Nothing stored, nothing to redraw.
        graph.ingest(0.0, &HashMap::from([(1, f64::NAN)]));
        assert!(!graph.needs_redraw());
        graph.ingest(0.0, &HashMap::from([(1, 20.0)]));
        assert!(graph.needs_redraw());
        graph.draw(&mut surface);

        graph.zoom_in();
        assert!(graph.needs_redraw());
        graph.draw(&mut surface);
        graph.set_visible(1, false);
        assert!(graph.needs_redraw());
        graph.draw(&mut surface);
        graph.set_pan(0.5);
        assert!(graph.needs_redraw());
        graph.draw(&mut surface);
        assert!(!graph.needs_redraw());
    }

    #[test]
    fn commands_from_sink_are_applied_in_order() {
        let (sink, rx) = graph_channel();
        let mut graph = LiveGraph::new(&GraphConfig::default()).unwrap();
        std::thread::spawn(move || {
            sink.configure([(1, "A")]).unwrap();
            for t in 0..5 {
                sink.ingest(t as f64, HashMap::from([(1, t as f64)])).unwrap();
            }
            sink.zoom_in().unwrap();
            sink.set_visible(1, false).unwrap();
        })
        .join()
        .unwrap();
        assert_eq!(graph.drain(&rx), 8);
        assert_eq!(graph.store().len(1), 5);
        assert_eq!(graph.view().window_secs(), Some(150.0));
        assert!(!graph.is_visible(1));
    }
}
