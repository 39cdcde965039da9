//! Directional movement (ADX family).
//!
//! Per bar, +DM keeps the upward high move and -DM the downward low move,
//! each only when positive and strictly larger than the other. The +DM,
//! -DM, and true-range series are smoothed with the standard EMA
//! (`k = 2 / (period + 1)`), not Wilder smoothing, and the returned figure
//! is the latest DX rather than an averaged ADX; a textbook ADX would
//! smooth DX over a second window. Degenerate windows read as 0: zero
//! smoothed true range forces both DIs to 0, and a zero DI sum skips the
//! final division.

use crate::domain::Bar;

use super::atr::true_range;
use super::ema::ema;

/// Latest DX in [0, 100], `None` below `period + 1` bars.
pub fn adx(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }
    let n = bars.len();
    let mut plus_dm = Vec::with_capacity(n - 1);
    let mut minus_dm = Vec::with_capacity(n - 1);
    let mut tr = Vec::with_capacity(n - 1);
    for i in 1..n {
        let up = bars[i].high - bars[i - 1].high;
        let down = bars[i - 1].low - bars[i].low;
        plus_dm.push(if up > down && up > 0.0 { up } else { 0.0 });
        minus_dm.push(if down > up && down > 0.0 { down } else { 0.0 });
        tr.push(true_range(bars, i));
    }

    let smooth_plus = ema(&plus_dm, period)?;
    let smooth_minus = ema(&minus_dm, period)?;
    let smooth_tr = ema(&tr, period)?;

    let (plus_di, minus_di) = if smooth_tr == 0.0 {
        (0.0, 0.0)
    } else {
        (
            smooth_plus / smooth_tr * 100.0,
            smooth_minus / smooth_tr * 100.0,
        )
    };
    let di_sum = plus_di + minus_di;
    if di_sum == 0.0 {
        return Some(0.0);
    }
    Some((plus_di - minus_di).abs() / di_sum * 100.0)
}
