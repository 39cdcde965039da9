//! On-Balance Volume (OBV).
//!
//! Running sum over the whole slice starting at 0: a bar's volume is added
//! on an up close, subtracted on a down close, ignored on a tie. Only the
//! final value is reported; the starting level is an arbitrary anchor, so
//! OBV is only meaningful relative to itself over a fixed window.

use crate::domain::Bar;

/// Final OBV value, `None` only on an empty slice.
pub fn obv(bars: &[Bar]) -> Option<f64> {
    if bars.is_empty() {
        return None;
    }
    let mut value = 0.0;
    for pair in bars.windows(2) {
        if pair[1].close > pair[0].close {
            value += pair[1].volume;
        } else if pair[1].close < pair[0].close {
            value -= pair[1].volume;
        }
    }
    Some(value)
}
