/// Immutable, resolution-tagged snapshot of timestamped close prices.
/// Bars are strictly time-ordered with no duplicate timestamps; this is a
/// data-source invariant, not enforced here.
use chrono::{DateTime, Utc};

use crate::types::{Bar, Resolution};

#[derive(Debug, Clone)]
pub struct PriceSeries {
    pub symbol: String,
    pub resolution: Resolution,
    bars: Vec<Bar>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, resolution: Resolution, bars: Vec<Bar>) -> Self {
        Self {
            symbol: symbol.into(),
            resolution,
            bars,
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close prices in bar order, for feeding the EMA engine.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Index of the first bar with timestamp >= `ts`, if any.
    pub fn first_at_or_after(&self, ts: DateTime<Utc>) -> Option<usize> {
        self.bars.iter().position(|b| b.timestamp >= ts)
    }

    /// Index of the last bar with timestamp <= `ts`, if any.
    pub fn last_at_or_before(&self, ts: DateTime<Utc>) -> Option<usize> {
        self.bars.iter().rposition(|b| b.timestamp <= ts)
    }

    /// Bars whose timestamps lie in the closed interval [start, end].
    /// Both ends are inclusive, so a bar sitting exactly on a coarse-bar
    /// boundary belongs to both adjacent intervals.
    pub fn between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> impl Iterator<Item = &Bar> {
        self.bars
            .iter()
            .filter(move |b| b.timestamp >= start && b.timestamp <= end)
    }
}
