//! Zoom/pan state of the time axis.
//!
//! The view stores only the requested window length and the pan position;
//! the visible time range is derived from the current data extent on every
//! render so the newest samples scroll in without extra bookkeeping.

use crate::config::{DEFAULT_WINDOW_SECS, MIN_WINDOW_SECS};
use crate::data::store::Extent;

/// Requested visible window plus the pan position within the scrollable range.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewWindow {
    /// `None` shows the full history.
    window_secs: Option<f64>,
    /// 0 = earliest window start, 1 = latest.
    pan_fraction: f64,
    default_window_secs: f64,
    min_window_secs: f64,
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SECS, MIN_WINDOW_SECS)
    }
}

impl ViewWindow {
    /// A full-range view that seeds `default_window_secs` on the first zoom-in
    /// and never zooms below `min_window_secs`.
    pub fn new(default_window_secs: f64, min_window_secs: f64) -> Self {
        Self {
            window_secs: None,
            pan_fraction: 0.0,
            default_window_secs,
            min_window_secs,
        }
    }

    pub fn window_secs(&self) -> Option<f64> {
        self.window_secs
    }

    pub fn pan_fraction(&self) -> f64 {
        self.pan_fraction
    }

    pub fn is_full(&self) -> bool {
        self.window_secs.is_none()
    }

    /// Set the window directly; values below the minimum are raised to it.
    pub fn set_window_secs(&mut self, window: Option<f64>) {
        self.window_secs = window
            .filter(|w| w.is_finite())
            .map(|w| w.max(self.min_window_secs));
    }

    /// Halve the window, seeding it from the default when showing full range.
    pub fn zoom_in(&mut self) {
        let current = self.window_secs.unwrap_or(self.default_window_secs);
        let next = (current / 2.0).max(self.min_window_secs);
        log::debug!("zoom in: {:?} -> {next}", self.window_secs);
        self.window_secs = Some(next);
    }

    /// Double the window; once it covers the whole history switch to full range.
    ///
    /// Does nothing without at least two retained samples spanning a positive time.
    pub fn zoom_out(&mut self, extent: Option<&Extent>) {
        let Some(extent) = extent else {
            return;
        };
        let total_span = extent.time_span();
        if total_span.is_nan() || total_span <= 0.0 {
            return;
        }
        let next = self.window_secs.unwrap_or(total_span) * 2.0;
        self.window_secs = if next >= total_span { None } else { Some(next) };
        log::debug!("zoom out: window now {:?}", self.window_secs);
    }

    /// Set the pan position; clamped to `[0, 1]`, NaN is ignored.
    pub fn set_pan(&mut self, fraction: f64) {
        if fraction.is_nan() {
            return;
        }
        self.pan_fraction = fraction.clamp(0.0, 1.0);
    }

    /// Visible `(t_min, t_max)` for the given data extent. Always `t_max > t_min`.
    pub fn resolve_visible_range(&self, extent: &Extent) -> (f64, f64) {
        let (t_min, mut t_max) = match self.window_secs {
            None => (extent.t_min, extent.t_max),
            Some(window) => {
                let span = extent.time_span().max(1e-6);
                let window = window.min(span);
                let earliest = extent.t_min;
                let latest = extent.t_max - window;
                let t_min = if latest <= earliest {
                    earliest
                } else {
                    earliest + self.pan_fraction * (latest - earliest)
                };
                (t_min, t_min + window)
            }
        };
        // At large magnitudes one second is below the float resolution of t_min.
        if t_max <= t_min {
            t_max = t_min + 1.0_f64.max(t_min.abs() * f64::EPSILON * 2.0);
        }
        (t_min, t_max)
    }

    /// Text for the label next to the zoom buttons.
    pub fn label(&self) -> String {
        match self.window_secs {
            None => "Window: full".to_string(),
            Some(w) => format!("Window: {:.2} min", w / 60.0),
        }
    }
}
