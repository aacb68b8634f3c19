//! Configuration for the live graph: history bound, zoom limits, plot layout
//! and the channel colour palette.
//!
//! [`GraphConfig`] is plain data with sensible defaults. It can be persisted as
//! YAML (`~/.livegraph/config.yaml` by default) so a lab station keeps its
//! preferred window size and layout between runs.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Maximum number of samples retained per channel.
pub const MAX_POINTS: usize = 2000;
/// Window used when zooming in from the "full range" view, in seconds.
pub const DEFAULT_WINDOW_SECS: f64 = 300.0;
/// Zooming in never goes below this window, in seconds.
pub const MIN_WINDOW_SECS: f64 = 5.0;
/// Number of grid divisions along each axis.
pub const GRID_DIVISIONS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// PlotLayout
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed pixel layout around the plot rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLayout {
    /// Width of the legend gutter on the left edge.
    pub legend_width: f32,
    /// Extra space between the legend gutter and the plot for y labels.
    pub y_label_width: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// The plot is not drawn unless it is wider than this.
    pub min_plot_width: f32,
    /// Left edge and first row of the legend.
    pub legend_origin: [f32; 2],
    /// Vertical distance between legend rows.
    pub legend_row_height: f32,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            legend_width: 130.0,
            y_label_width: 30.0,
            margin_right: 40.0,
            margin_top: 20.0,
            margin_bottom: 30.0,
            min_plot_width: 10.0,
            legend_origin: [10.0, 25.0],
            legend_row_height: 18.0,
        }
    }
}

impl PlotLayout {
    /// Left pixel edge of the plot rectangle.
    pub fn plot_left(&self) -> f32 {
        self.legend_width + self.y_label_width
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GraphConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a [`LiveGraph`](crate::LiveGraph) and its window.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    // ── Data ─────────────────────────────────────────────────────────────────
    /// Maximum number of points retained per channel.
    pub max_points: usize,

    // ── Zoom ─────────────────────────────────────────────────────────────────
    /// Window seeded by the first zoom-in from the full-range view.
    pub default_window_secs: f64,
    /// Lower bound for the visible window.
    pub min_window_secs: f64,

    // ── Drawing ──────────────────────────────────────────────────────────────
    pub grid_divisions: usize,
    pub layout: PlotLayout,
    /// Channel colours as RGB triples, assigned by position in the channel list.
    pub palette: Vec<[u8; 3]>,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Repaint cadence while idle so new samples show up without input events.
    pub repaint_interval_ms: u64,
    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS,
            default_window_secs: DEFAULT_WINDOW_SECS,
            min_window_secs: MIN_WINDOW_SECS,
            grid_divisions: GRID_DIVISIONS,
            layout: PlotLayout::default(),
            palette: default_palette(),
            title: "Live Temperature Graph".to_string(),
            repaint_interval_ms: 100,
            native_options: None,
        }
    }
}

fn default_palette() -> Vec<[u8; 3]> {
    vec![
        [0, 0, 255],     // blue
        [255, 0, 0],     // red
        [0, 128, 0],     // green
        [128, 0, 128],   // purple
        [255, 165, 0],   // orange
        [165, 42, 42],   // brown
        [255, 0, 255],   // magenta
        [0, 255, 255],   // cyan
    ]
}

/// Entry `index` of `palette`, wrapping around; grey for an empty palette.
pub(crate) fn palette_color(palette: &[[u8; 3]], index: usize) -> Color32 {
    match palette.len() {
        0 => Color32::GRAY,
        n => {
            let [r, g, b] = palette[index % n];
            Color32::from_rgb(r, g, b)
        }
    }
}

impl GraphConfig {
    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> GraphResult<()> {
        if self.max_points == 0 {
            return Err(GraphError::ZeroCapacity);
        }
        if !(self.min_window_secs.is_finite() && self.min_window_secs > 0.0) {
            return Err(GraphError::InvalidConfig(format!(
                "min_window_secs must be positive, got {}",
                self.min_window_secs
            )));
        }
        if !(self.default_window_secs.is_finite()
            && self.default_window_secs >= self.min_window_secs)
        {
            return Err(GraphError::InvalidConfig(format!(
                "default_window_secs ({}) must be >= min_window_secs ({})",
                self.default_window_secs, self.min_window_secs
            )));
        }
        if self.grid_divisions == 0 {
            return Err(GraphError::InvalidConfig(
                "grid_divisions must be at least 1".to_string(),
            ));
        }
        if self.palette.is_empty() {
            return Err(GraphError::InvalidConfig("palette is empty".to_string()));
        }
        Ok(())
    }

    /// Colour for the channel at `index` in display order, cycling through the palette.
    pub fn color(&self, index: usize) -> Color32 {
        palette_color(&self.palette, index)
    }

    /// `~/.livegraph/config.yaml`
    pub fn default_path() -> GraphResult<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| GraphError::NoHomeDir)?;
        Ok(PathBuf::from(home).join(".livegraph").join("config.yaml"))
    }

    pub fn load_from(path: &Path) -> GraphResult<Self> {
        let s = fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: GraphConfig = serde_yaml::from_str(&s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> GraphResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| GraphError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let s = serde_yaml::to_string(self)?;
        let mut f = fs::File::create(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        f.write_all(s.as_bytes()).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Load from the default path, falling back to defaults if the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("using default graph config: {e}");
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring {path:?}: {e}");
                Self::default()
            }
        }
    }
}
