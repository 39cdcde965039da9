//! Relative Strength Index (RSI), Wilder smoothing.
//!
//! The first average gain/loss is a simple mean over the first `period`
//! price deltas; each later delta folds in via
//! `avg = (avg * (period - 1) + delta) / period`. A zero average loss reads
//! as RSI 100, so a flat series pins to 100 rather than dividing by zero.
//! Needs `period + 1` prices (deltas consume one).

/// RSI in [0, 100], `None` below `period + 1` prices.
pub fn rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }
    let p = period as f64;

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for pair in prices[..=period].windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            avg_gain += delta;
        } else {
            avg_loss -= delta;
        }
    }
    avg_gain /= p;
    avg_loss /= p;

    for pair in prices[period..].windows(2) {
        let delta = pair[1] - pair[0];
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { -delta } else { 0.0 };
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }
    Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
}
