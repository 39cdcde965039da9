//! Technical indicator primitives.
//!
//! Every function evaluates "as of the last bar" of the slice it is given;
//! callers pick the evaluation point by slicing the series. Price-based
//! indicators (SMA, EMA, RSI, MACD, Bollinger) take a close-price slice,
//! the rest take full OHLCV bars. Insufficient history is always reported
//! as `None` — never NaN and never a stand-in value — and every formula
//! with a degenerate denominator documents its fallback.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod ema;
pub mod macd;
pub mod mfi;
pub mod obv;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod vwap;
pub mod williams_r;

pub use adx::adx;
pub use atr::{atr, true_range};
pub use bollinger::{bollinger_bands, percent_b, BollingerBands};
pub use cci::cci;
pub use ema::ema;
pub use macd::{macd, Macd};
pub use mfi::mfi;
pub use obv::obv;
pub use rsi::rsi;
pub use sma::sma;
pub use stochastic::{stochastic, Stochastic};
pub use vwap::vwap;
pub use williams_r::williams_r;

// ── Test helpers ─────────────────────────────────────────────────────────

/// Builds a bar series from closes alone: each bar opens at the prior
/// close, with high/low one unit beyond the body and constant volume.
#[cfg(test)]
pub(crate) fn make_bars(closes: &[f64]) -> Vec<crate::domain::Bar> {
    use chrono::TimeZone;

    let base = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            crate::domain::Bar {
                timestamp: base + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1_000.0,
            }
        })
        .collect()
}

/// Builds a bar series from explicit (open, high, low, close) tuples with
/// constant volume.
#[cfg(test)]
pub(crate) fn make_ohlc_bars(ohlc: &[(f64, f64, f64, f64)]) -> Vec<crate::domain::Bar> {
    use chrono::TimeZone;

    let base = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    ohlc.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| crate::domain::Bar {
            timestamp: base + chrono::Duration::days(i as i64),
            open,
            high,
            low,
            close,
            volume: 1_000.0,
        })
        .collect()
}

#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-10;

#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "expected {expected}, got {actual} (epsilon {epsilon})"
    );
}
