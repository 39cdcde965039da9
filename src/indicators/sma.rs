//! Simple Moving Average (SMA).
//!
//! Arithmetic mean of the last `period` prices. A pure window function:
//! history before the window cannot affect the value.

/// SMA of the trailing `period` prices, `None` when fewer exist.
pub fn sma(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }
    let window = &prices[prices.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}
