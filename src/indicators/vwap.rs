//! Volume-Weighted Average Price (VWAP).
//!
//! Cumulative typical-price dollars over cumulative volume, computed across
//! the whole supplied slice; callers pick the window (a session, a day) by
//! slicing. Absent on an empty slice or zero cumulative volume.

use crate::domain::Bar;

pub fn vwap(bars: &[Bar]) -> Option<f64> {
    let mut flow = 0.0;
    let mut volume = 0.0;
    for bar in bars {
        flow += bar.typical_price() * bar.volume;
        volume += bar.volume;
    }
    if volume == 0.0 {
        return None;
    }
    Some(flow / volume)
}
