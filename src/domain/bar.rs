//! Bar — one OHLCV sample, the engine's sole input unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single OHLCV bar.
///
/// Prices must be positive with `low <= min(open, close)` and
/// `max(open, close) <= high`; volume must be non-negative. The engine
/// treats bars as immutable: nothing downstream ever writes to a series.
/// Sources that cannot guarantee the invariants should run their series
/// through [`validate_series`] first; the engine itself does not
/// re-validate on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Absolute candle body, `|close - open|`.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Full bar range, `high - low`.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Shadow above the body, `high - max(open, close)`.
    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    /// Shadow below the body, `min(open, close) - low`.
    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Typical price, `(high + low + close) / 3`.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Finite positive prices, non-negative volume, and the OHLC ordering
    /// invariant. Cheap enough to run per bar on ingest.
    pub fn is_sane(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        prices.iter().all(|p| p.is_finite() && *p > 0.0)
            && self.volume.is_finite()
            && self.volume >= 0.0
            && self.low <= self.open.min(self.close)
            && self.high >= self.open.max(self.close)
    }
}

/// Contract violations in an input bar series.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("bar {index} violates OHLC sanity (ordering, sign, or non-finite field)")]
    InsaneBar { index: usize },

    #[error("bar {index} does not advance the previous bar's timestamp")]
    NonMonotonicTimestamp { index: usize },
}

/// Check the contract a data source must uphold before handing a series to
/// the engine: every bar sane, timestamps strictly increasing, oldest first.
pub fn validate_series(bars: &[Bar]) -> Result<(), SeriesError> {
    for (index, bar) in bars.iter().enumerate() {
        if !bar.is_sane() {
            return Err(SeriesError::InsaneBar { index });
        }
        if index > 0 && bar.timestamp <= bars[index - 1].timestamp {
            return Err(SeriesError::NonMonotonicTimestamp { index });
        }
    }
    Ok(())
}
