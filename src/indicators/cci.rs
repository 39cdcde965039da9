//! Commodity Channel Index (CCI).
//!
//! Deviation of the latest typical price from the window's typical-price
//! mean, scaled by 0.015 times the mean absolute deviation. Reads 0 when
//! the deviation is zero (constant window).

use crate::domain::Bar;

/// CCI over the trailing `period` bars, `None` when fewer exist.
pub fn cci(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period {
        return None;
    }
    let tps: Vec<f64> = bars[bars.len() - period..]
        .iter()
        .map(Bar::typical_price)
        .collect();
    let mean = tps.iter().sum::<f64>() / period as f64;
    let mad = tps.iter().map(|tp| (tp - mean).abs()).sum::<f64>() / period as f64;
    if mad == 0.0 {
        return Some(0.0);
    }
    Some((tps[tps.len() - 1] - mean) / (0.015 * mad))
}
