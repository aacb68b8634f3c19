//! Frame rendering: grid, axes, channel polylines and legend.

use egui::Color32;

use crate::config::{palette_color, GraphConfig, PlotLayout};
use crate::data::channels::ChannelSet;
use crate::data::store::SampleStore;
use crate::projector::{PlotGeometry, PlotRect};
use crate::surface::{DrawSurface, TextAnchor};
use crate::view::ViewWindow;

const GRID_COLOR: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
const AXIS_COLOR: Color32 = Color32::BLACK;
const TEXT_COLOR: Color32 = Color32::BLACK;
const TRACE_WIDTH: f32 = 2.0;
const AXIS_WIDTH: f32 = 2.0;
const TICK_LENGTH: f32 = 4.0;

/// Draws the current history into a [`DrawSurface`].
#[derive(Debug, Clone)]
pub struct Renderer {
    grid_divisions: usize,
    layout: PlotLayout,
    palette: Vec<[u8; 3]>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}

impl Renderer {
    pub fn from_config(cfg: &GraphConfig) -> Self {
        Self {
            grid_divisions: cfg.grid_divisions.max(1),
            layout: cfg.layout.clone(),
            palette: cfg.palette.clone(),
        }
    }

    /// Colour of the channel at `color_index` in display order.
    pub fn color(&self, color_index: usize) -> Color32 {
        palette_color(&self.palette, color_index)
    }

    /// Compute the frame geometry without drawing. `None` when there is not
    /// enough history or the surface is too small to hold a plot.
    pub fn layout(
        &self,
        store: &SampleStore,
        view: &ViewWindow,
        size: [f32; 2],
    ) -> Option<PlotGeometry> {
        let extent = store.global_extent()?;
        let (t_min, t_max) = view.resolve_visible_range(&extent);

        // The value axis always spans all retained samples, not just the visible window.
        let v_min = extent.v_min;
        let mut v_max = extent.v_max;
        if v_max <= v_min {
            v_max = v_min + 1.0;
        }

        let [w, h] = size;
        let rect = PlotRect {
            left: self.layout.plot_left(),
            right: w - self.layout.margin_right,
            top: self.layout.margin_top,
            bottom: h - self.layout.margin_bottom,
        };
        if rect.right <= rect.left + self.layout.min_plot_width {
            return None;
        }

        let geometry = PlotGeometry {
            rect,
            t_min,
            t_max,
            v_min,
            v_max,
        };
        geometry.is_valid().then_some(geometry)
    }

    /// Draw one frame and return the geometry it was drawn with.
    ///
    /// When nothing can be plotted the surface is cleared and `None` is
    /// returned, so callers must drop any previously cached geometry.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        store: &SampleStore,
        channels: &ChannelSet,
        view: &ViewWindow,
        surface: &mut S,
    ) -> Option<PlotGeometry> {
        surface.clear();
        let Some(geometry) = self.layout(store, view, surface.size()) else {
            log::trace!(
                "nothing to draw ({} points, surface {:?})",
                store.total_points(),
                surface.size()
            );
            return None;
        };

        self.draw_grid(&geometry, surface);
        self.draw_axes(&geometry, surface);
        self.draw_channels(&geometry, store, channels, surface);
        self.draw_caption(&geometry, surface);
        self.draw_legend(channels, surface);

        Some(geometry)
    }

    fn draw_grid<S: DrawSurface + ?Sized>(&self, g: &PlotGeometry, surface: &mut S) {
        let n = self.grid_divisions;
        let r = g.rect;
        let time_span = g.t_max - g.t_min;
        let value_span = g.v_max - g.v_min;

        for i in 0..=n {
            let frac = i as f32 / n as f32;
            let gx = r.left + frac * r.width();
            surface.line([gx, r.top], [gx, r.bottom], 1.0, GRID_COLOR);
            let t_here = g.t_min + time_span * i as f64 / n as f64;
            surface.text(
                [gx, r.bottom + 3.0],
                TextAnchor::Top,
                &format!("{:.2}", t_here / 60.0),
                TEXT_COLOR,
            );
        }

        for j in 0..=n {
            let frac = j as f32 / n as f32;
            let gy = r.top + frac * r.height();
            surface.line([r.left, gy], [r.right, gy], 1.0, GRID_COLOR);
            surface.line([r.left - TICK_LENGTH, gy], [r.left, gy], 1.0, AXIS_COLOR);
            let v_here = g.v_max - value_span * j as f64 / n as f64;
            surface.text(
                [r.left - TICK_LENGTH - 2.0, gy],
                TextAnchor::Right,
                &format!("{v_here:.2}"),
                TEXT_COLOR,
            );
        }
    }

    fn draw_axes<S: DrawSurface + ?Sized>(&self, g: &PlotGeometry, surface: &mut S) {
        let r = g.rect;
        surface.line([r.left, r.bottom], [r.right, r.bottom], AXIS_WIDTH, AXIS_COLOR);
        surface.line([r.left, r.top], [r.left, r.bottom], AXIS_WIDTH, AXIS_COLOR);
    }

    fn draw_channels<S: DrawSurface + ?Sized>(
        &self,
        g: &PlotGeometry,
        store: &SampleStore,
        channels: &ChannelSet,
        surface: &mut S,
    ) {
        for ch in channels.visible() {
            let Some(series) = store.series(ch.id) else {
                continue;
            };
            if series.len() < 2 {
                continue;
            }
            let points: Vec<[f32; 2]> = series
                .iter()
                .filter(|s| g.contains_time(s.t))
                .map(|s| g.project(s.t, s.v))
                .collect();
            // A lone in-range point is not drawn as a dot.
            if points.len() < 2 {
                continue;
            }
            surface.polyline(points, TRACE_WIDTH, self.color(ch.color_index));
        }
    }

    fn draw_caption<S: DrawSurface + ?Sized>(&self, g: &PlotGeometry, surface: &mut S) {
        let [_, h] = surface.size();
        let window_min = (g.t_max - g.t_min) / 60.0;
        surface.text(
            [(g.rect.left + g.rect.right) / 2.0, h - 8.0],
            TextAnchor::Center,
            &format!("Time (min) – window ≈ {window_min:.2} min"),
            TEXT_COLOR,
        );
    }

    fn draw_legend<S: DrawSurface + ?Sized>(&self, channels: &ChannelSet, surface: &mut S) {
        let [x, mut y] = self.layout.legend_origin;
        for ch in channels.visible() {
            let color = self.color(ch.color_index);
            surface.fill_rect([x, y - 5.0], [x + 20.0, y + 5.0], color);
            surface.text([x + 25.0, y], TextAnchor::Left, &ch.name, TEXT_COLOR);
            y += self.layout.legend_row_height;
        }
    }
}
