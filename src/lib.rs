//! livegraph crate root: re-exports and module wiring.
//!
//! A live multi-channel time-series graph for data loggers:
//! - `data`: bounded per-channel history and the channel list
//! - `view`: zoom/pan state of the time axis
//! - `projector`: data ↔ pixel mapping of the last drawn frame
//! - `render`: grid, axes, polylines and legend on a `DrawSurface`
//! - `hover`: nearest-sample readout under the pointer
//! - `graph`: `LiveGraph`, the facade tying the above together
//! - `sink`: command channel for feeding the graph from another thread
//! - `app`: egui/eframe window

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod hover;
pub mod projector;
pub mod render;
pub mod sink;
pub mod surface;
pub mod view;

// Public re-exports for a compact external API
pub use app::{run_live_graph, EguiSurface, LiveGraphApp};
pub use config::{GraphConfig, PlotLayout, MAX_POINTS};
pub use data::channels::{Channel, ChannelId, ChannelSet};
pub use data::store::{Extent, Sample, SampleSeries, SampleStore};
pub use error::{GraphError, GraphResult};
pub use graph::LiveGraph;
pub use hover::{ChannelReading, HoverReadout, HoverResolver};
pub use projector::{PlotGeometry, PlotRect};
pub use render::Renderer;
pub use sink::{graph_channel, GraphCommand, GraphSink};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, TextAnchor};
pub use view::ViewWindow;
