//! Exponential Moving Average (EMA).
//!
//! Seeded with the SMA of the first `period` prices, then walked over every
//! remaining price with `ema = (price - ema) * k + ema`, `k = 2 / (period + 1)`.
//! The walk always starts at the front of the slice: EMA is path-dependent,
//! and trimming history off the front changes the result. Callers wanting
//! "EMA as of bar t" pass the series up to and including t.

/// EMA over the full slice, `None` when shorter than `period`.
pub fn ema(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut value = prices[..period].iter().sum::<f64>() / period as f64;
    for &price in &prices[period..] {
        value = (price - value) * k + value;
    }
    Some(value)
}
