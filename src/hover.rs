//! Pointer readout: nearest retained sample of each visible channel.

use std::fmt;

use crate::data::channels::ChannelSet;
use crate::data::store::SampleStore;
use crate::projector::PlotGeometry;

/// Value of one channel at the hovered time.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelReading {
    pub name: String,
    /// Time of the matched sample, seconds.
    pub t: f64,
    pub value: f64,
}

/// Result of a hover lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverReadout {
    /// Time of the first contributing channel's matched sample, in minutes.
    /// This is a real sample time, not the pointer position.
    pub time_minutes: f64,
    pub readings: Vec<ChannelReading>,
}

impl fmt::Display for HoverReadout {
    /// `t=1.23 min | TC1=20.00°C | TC2=21.50°C`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2} min", self.time_minutes)?;
        for r in &self.readings {
            write!(f, " | {}={:.2}°C", r.name, r.value)?;
        }
        Ok(())
    }
}

pub struct HoverResolver;

impl HoverResolver {
    /// Resolve the pointer at `(px, py)` against the geometry of the last frame.
    ///
    /// Returns `None` without a geometry, outside the plot rectangle, or when no
    /// visible channel has a sample inside the drawn time range.
    pub fn resolve(
        geometry: Option<&PlotGeometry>,
        store: &SampleStore,
        channels: &ChannelSet,
        px: f32,
        py: f32,
    ) -> Option<HoverReadout> {
        let g = geometry?;
        if !g.is_valid() || !g.contains(px, py) {
            return None;
        }
        let t_cursor = g.x_to_time(px);

        let readings: Vec<ChannelReading> = channels
            .visible()
            .filter_map(|ch| {
                let series = store.series(ch.id)?;
                let mut best: Option<(f64, f64, f64)> = None;
                for s in series.iter().filter(|s| g.contains_time(s.t)) {
                    let dt = (s.t - t_cursor).abs();
                    // Strictly smaller keeps the earliest sample on ties.
                    if best.map_or(true, |(best_dt, _, _)| dt < best_dt) {
                        best = Some((dt, s.t, s.v));
                    }
                }
                best.map(|(_, t, value)| ChannelReading {
                    name: ch.name.clone(),
                    t,
                    value,
                })
            })
            .collect();

        let first = readings.first()?;
        Some(HoverReadout {
            time_minutes: first.t / 60.0,
            readings,
        })
    }
}
