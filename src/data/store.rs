//! Bounded per-channel sample history.

use std::collections::HashMap;

use crate::data::channels::ChannelId;
use crate::data::ring::RingBuffer;
use crate::error::GraphResult;

/// A single observation: seconds since run start and the measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub v: f64,
}

/// Min/max of time and value over every retained sample of every channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub t_min: f64,
    pub t_max: f64,
    pub v_min: f64,
    pub v_max: f64,
}

impl Extent {
    pub fn time_span(&self) -> f64 {
        self.t_max - self.t_min
    }
}

/// Samples of one channel, oldest first, bounded by the store capacity.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    samples: RingBuffer<Sample>,
}

impl SampleSeries {
    fn new(capacity: usize) -> Self {
        Self {
            samples: RingBuffer::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.t)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.v)
    }

}

/// Rolling history for the active channels.
///
/// A series is created on the first accepted sample of a channel. Samples
/// with a non-finite time or value are dropped, as are samples for channels
/// outside the active set.
#[derive(Debug, Clone)]
pub struct SampleStore {
    capacity: usize,
    active: Vec<ChannelId>,
    series: HashMap<ChannelId, SampleSeries>,
}

impl SampleStore {
    /// Create an empty store keeping at most `capacity` samples per channel.
    pub fn new(capacity: usize) -> GraphResult<Self> {
        // Validate once here so creating series later cannot fail.
        RingBuffer::<Sample>::new(capacity)?;
        Ok(Self {
            capacity,
            active: Vec::new(),
            series: HashMap::new(),
        })
    }

    /// Drop all history and make `channels` the active set.
    pub fn reset(&mut self, channels: &[ChannelId]) {
        self.series.clear();
        self.active = channels.to_vec();
    }

    pub fn is_active(&self, id: ChannelId) -> bool {
        self.active.contains(&id)
    }

    /// Record `(t, v)` for `id`. Returns `false` if the sample was rejected.
    pub fn append(&mut self, id: ChannelId, t: f64, v: f64) -> bool {
        if !t.is_finite() || !v.is_finite() {
            log::trace!("rejecting non-finite sample for channel {id}: t={t}, v={v}");
            return false;
        }
        if !self.is_active(id) {
            log::trace!("ignoring sample for inactive channel {id}");
            return false;
        }
        let capacity = self.capacity;
        self.series
            .entry(id)
            .or_insert_with(|| SampleSeries::new(capacity))
            .samples
            .push(Sample { t, v });
        true
    }

    pub fn series(&self, id: ChannelId) -> Option<&SampleSeries> {
        self.series.get(&id)
    }

    /// Number of retained samples for `id` (0 if none).
    pub fn len(&self, id: ChannelId) -> usize {
        self.series.get(&id).map_or(0, SampleSeries::len)
    }

    pub fn total_points(&self) -> usize {
        self.series.values().map(SampleSeries::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_points() == 0
    }

    /// Shared time/value extent across all channels, or `None` while fewer
    /// than two samples are retained in total.
    pub fn global_extent(&self) -> Option<Extent> {
        if self.total_points() < 2 {
            return None;
        }
        let mut ext = Extent {
            t_min: f64::INFINITY,
            t_max: f64::NEG_INFINITY,
            v_min: f64::INFINITY,
            v_max: f64::NEG_INFINITY,
        };
        for s in self.series.values().flat_map(|series| series.iter()) {
            ext.t_min = ext.t_min.min(s.t);
            ext.t_max = ext.t_max.max(s.t);
            ext.v_min = ext.v_min.min(s.v);
            ext.v_max = ext.v_max.max(s.v);
        }
        Some(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(channels: &[ChannelId], capacity: usize) -> SampleStore {
        let mut store = SampleStore::new(capacity).unwrap();
        store.reset(channels);
        store
    }

    #[test]
    fn rejects_nan_and_infinite() {
        let mut store = store_with(&[1], 10);
        assert!(!store.append(1, 0.0, f64::NAN));
        assert!(!store.append(1, f64::NAN, 1.0));
        assert!(!store.append(1, 0.0, f64::INFINITY));
        assert!(store.is_empty());
        assert!(store.series(1).is_none());
    }

    #[test]
    fn unknown_channel_is_a_no_op() {
        let mut store = store_with(&[1], 10);
        assert!(!store.append(9, 0.0, 1.0));
        assert_eq!(store.total_points(), 0);
    }

    #[test]
    fn extent_needs_two_points() {
        let mut store = store_with(&[1, 2], 10);
        store.append(1, 0.0, 5.0);
        assert!(store.global_extent().is_none());
        store.append(2, 3.0, -1.0);
        let ext = store.global_extent().unwrap();
        assert_eq!((ext.t_min, ext.t_max, ext.v_min, ext.v_max), (0.0, 3.0, -1.0, 5.0));
    }

    #[test]
    fn reset_clears_history() {
        let mut store = store_with(&[1], 10);
        store.append(1, 0.0, 1.0);
        store.append(1, 1.0, 1.0);
        store.reset(&[2]);
        assert_eq!(store.len(1), 0);
        assert!(!store.append(1, 2.0, 1.0));
        assert!(store.append(2, 2.0, 1.0));
    }

    #[test]
    fn series_share_the_store_capacity() {
        let mut store = store_with(&[1, 2], 2);
        for t in 0..5 {
            assert!(store.append(1, t as f64, 0.0));
        }
        store.append(2, 0.0, 0.0);
        assert_eq!(store.len(1), 2);
        assert_eq!(store.len(2), 1);
        let ts: Vec<f64> = store.series(1).unwrap().times().collect();
        assert_eq!(ts, vec![3.0, 4.0]);
    }
}
