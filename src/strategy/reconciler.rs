/// Three-way reconciliation of crossover signals across two resolutions.
///
/// For every coarse-bar interval the reconciler computes a hybrid reading
/// (coarse EMA bases projected forward by each fine tick), a coarse reading
/// (the plain coarse-resolution crossover), and a fine reading (the true
/// chained fine-resolution crossovers), and bundles them into one row.
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::data::PriceSeries;
use crate::error::Result;
use crate::strategy::{check_cross, ema_series, ema_step};
use crate::types::{Bar, Signal};

/// Intrabar signal reading projected from fixed coarse EMA bases
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HybridReading {
    pub first_signal: Signal,
    pub buy_count: usize,
    pub sell_count: usize,
    pub min_buy_price: Option<f64>,
    pub max_sell_price: Option<f64>,
}

/// Signal a pure coarse-resolution strategy would have produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoarseReading {
    pub signal: Signal,
    pub close: f64,
}

/// Signals from the true chained fine-resolution EMA series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FineReading {
    pub buy_count: usize,
    pub sell_count: usize,
    pub min_buy_price: Option<f64>,
    pub max_sell_price: Option<f64>,
}

impl FineReading {
    fn empty() -> Self {
        Self {
            buy_count: 0,
            sell_count: 0,
            min_buy_price: None,
            max_sell_price: None,
        }
    }
}

/// One reconciled record per coarse-bar interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportRow {
    pub coarse_start: DateTime<Utc>,
    pub hybrid: HybridReading,
    pub coarse: CoarseReading,
    pub fine: FineReading,
}

/// Fast/slow EMA series pair, index-aligned with its source price series
#[derive(Debug, Clone, PartialEq)]
pub struct EmaPair {
    pub fast: Vec<f64>,
    pub slow: Vec<f64>,
}

/// Full output of a reconciliation pass: the rows plus the source EMA series
/// for each resolution, for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub rows: Vec<ReportRow>,
    pub coarse_ema: EmaPair,
    pub fine_ema: EmaPair,
}

/// Walk the coarse timeline from `start_index` and produce one row per coarse
/// interval `[coarse[h], coarse[h+1]]`. The last coarse bar has no successor
/// and never yields a row, so a series of length L reconciled from index s
/// gives exactly `L - 1 - s` rows.
///
/// Fails with `InsufficientData` if either series is shorter than
/// `slow_period`; no partial rows are emitted.
pub fn reconcile(
    coarse: &PriceSeries,
    fine: &PriceSeries,
    start_index: usize,
    fast_period: usize,
    slow_period: usize,
) -> Result<Reconciliation> {
    let coarse_ema = EmaPair {
        fast: ema_series(&coarse.closes(), fast_period)?,
        slow: ema_series(&coarse.closes(), slow_period)?,
    };
    let fine_ema = EmaPair {
        fast: ema_series(&fine.closes(), fast_period)?,
        slow: ema_series(&fine.closes(), slow_period)?,
    };

    let bars = coarse.bars();
    let mut rows = Vec::new();

    for h in start_index..bars.len().saturating_sub(1) {
        let interval_start = bars[h].timestamp;
        let interval_end = bars[h + 1].timestamp;

        let hybrid = hybrid_reading(
            coarse_ema.fast[h],
            coarse_ema.slow[h],
            fast_period,
            slow_period,
            fine.between(interval_start, interval_end),
        );
        let coarse_read = coarse_reading(coarse, &coarse_ema, h);
        let fine_read = fine_reading(fine, &fine_ema, interval_start, interval_end);

        rows.push(ReportRow {
            coarse_start: interval_start,
            hybrid,
            coarse: coarse_read,
            fine: fine_read,
        });
    }

    debug!(rows = rows.len(), symbol = %coarse.symbol, "Reconciliation complete");

    Ok(Reconciliation {
        rows,
        coarse_ema,
        fine_ema,
    })
}

/// Project the fixed coarse EMA bases forward through each fine tick of the
/// interval and accumulate the crossings.
///
/// Every tick is stepped from the same bases, never chained from the prior
/// tick: each fine bar is treated as a hypothetical next coarse observation
/// relative to the trend established at the interval start. An interval with
/// no fine bars yields a zero reading, not a failure.
pub fn hybrid_reading<'a>(
    base_fast: f64,
    base_slow: f64,
    fast_period: usize,
    slow_period: usize,
    segment: impl IntoIterator<Item = &'a Bar>,
) -> HybridReading {
    let mut reading = HybridReading {
        first_signal: Signal::None,
        buy_count: 0,
        sell_count: 0,
        min_buy_price: None,
        max_sell_price: None,
    };

    for bar in segment {
        let cur_fast = ema_step(base_fast, bar.close, fast_period);
        let cur_slow = ema_step(base_slow, bar.close, slow_period);

        match check_cross(base_fast, base_slow, cur_fast, cur_slow) {
            Signal::Buy => {
                reading.buy_count += 1;
                reading.min_buy_price = Some(match reading.min_buy_price {
                    Some(p) => p.min(bar.close),
                    None => bar.close,
                });
                if reading.first_signal.is_none() {
                    reading.first_signal = Signal::Buy;
                }
            }
            Signal::Sell => {
                reading.sell_count += 1;
                reading.max_sell_price = Some(match reading.max_sell_price {
                    Some(p) => p.max(bar.close),
                    None => bar.close,
                });
                if reading.first_signal.is_none() {
                    reading.first_signal = Signal::Sell;
                }
            }
            Signal::None => {}
        }
    }

    reading
}

/// One crossover check over adjacent coarse EMA values, plus the coarse close
/// at `h` for reference. Caller guarantees `h + 1` is in range.
pub fn coarse_reading(coarse: &PriceSeries, ema: &EmaPair, h: usize) -> CoarseReading {
    CoarseReading {
        signal: check_cross(ema.fast[h], ema.slow[h], ema.fast[h + 1], ema.slow[h + 1]),
        close: coarse.bars()[h].close,
    }
}

/// Classify every consecutive fine-bar pair inside [start, end] using the
/// true chained fine EMA series. A missing or single-point range (no fine bar
/// at or after `start`, or the range collapses) yields the empty reading.
pub fn fine_reading(
    fine: &PriceSeries,
    ema: &EmaPair,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> FineReading {
    let (first, last) = match (fine.first_at_or_after(start), fine.last_at_or_before(end)) {
        (Some(first), Some(last)) if last > first => (first, last),
        _ => return FineReading::empty(),
    };

    let mut reading = FineReading::empty();
    let bars = fine.bars();

    for i in first + 1..=last {
        match check_cross(ema.fast[i - 1], ema.slow[i - 1], ema.fast[i], ema.slow[i]) {
            Signal::Buy => {
                reading.buy_count += 1;
                reading.min_buy_price = Some(match reading.min_buy_price {
                    Some(p) => p.min(bars[i].close),
                    None => bars[i].close,
                });
            }
            Signal::Sell => {
                reading.sell_count += 1;
                reading.max_sell_price = Some(match reading.max_sell_price {
                    Some(p) => p.max(bars[i].close),
                    None => bars[i].close,
                });
            }
            Signal::None => {}
        }
    }

    reading
}
