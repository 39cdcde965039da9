//! Moving Average Convergence Divergence (MACD), fixed 12/26/9.
//!
//! `value = EMA12 - EMA26` over the full price history. The signal line is
//! the 9-period EMA of the MACD history, where the history entry for prefix
//! length p is EMA12 - EMA26 recomputed from scratch over `prices[..p]`,
//! p = 26..=len. Recomputing per prefix is quadratic and intentional: the
//! EMAs are path-dependent, so an incremental shortcut produces different
//! numbers. With fewer than 9 history points the signal falls back to the
//! MACD value itself, which zeroes the histogram.

use serde::{Deserialize, Serialize};

use super::ema::ema;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// MACD line, signal line, and their difference at the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// MACD at the last bar, `None` below 26 prices.
pub fn macd(prices: &[f64]) -> Option<Macd> {
    let fast = ema(prices, MACD_FAST)?;
    let slow = ema(prices, MACD_SLOW)?;
    let value = fast - slow;

    let history: Vec<f64> = (MACD_SLOW..=prices.len())
        .filter_map(|end| {
            let prefix = &prices[..end];
            Some(ema(prefix, MACD_FAST)? - ema(prefix, MACD_SLOW)?)
        })
        .collect();

    let signal = ema(&history, MACD_SIGNAL).unwrap_or(value);
    Some(Macd {
        value,
        signal,
        histogram: value - signal,
    })
}
