//! Average True Range (ATR).
//!
//! True range folds overnight gaps into the bar range:
//! `max(high - low, |high - prev_close|, |low - prev_close|)`.
//! The average here is a simple mean of the last `period` true ranges, so
//! it needs `period + 1` bars (each true range consumes the prior close).

use crate::domain::Bar;

/// True range of `bars[index]` against the prior close. Index 0 has no
/// prior close and falls back to the plain high-low range.
pub fn true_range(bars: &[Bar], index: usize) -> f64 {
    let bar = &bars[index];
    if index == 0 {
        return bar.high - bar.low;
    }
    let prev_close = bars[index - 1].close;
    (bar.high - bar.low)
        .max((bar.high - prev_close).abs())
        .max((bar.low - prev_close).abs())
}

/// Mean true range of the trailing `period` bars, `None` below
/// `period + 1` bars.
pub fn atr(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }
    let start = bars.len() - period;
    let sum: f64 = (start..bars.len()).map(|i| true_range(bars, i)).sum();
    Some(sum / period as f64)
}
