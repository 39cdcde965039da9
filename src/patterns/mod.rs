//! Candlestick pattern detection over the trailing bars of a series.

pub mod candlestick;

pub use candlestick::detect;

use serde::{Deserialize, Serialize};

/// Formations the detector recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    Doji,
    Hammer,
    ShootingStar,
    BullishEngulfing,
    BearishEngulfing,
    MorningStar,
}

impl PatternKind {
    /// Display name used in signal reasons.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Doji => "Doji",
            PatternKind::Hammer => "Hammer",
            PatternKind::ShootingStar => "Shooting Star",
            PatternKind::BullishEngulfing => "Bullish Engulfing",
            PatternKind::BearishEngulfing => "Bearish Engulfing",
            PatternKind::MorningStar => "Morning Star",
        }
    }
}

/// Directional bias a formation carries into scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternDirection {
    Bullish,
    Bearish,
    Neutral,
}

/// One detected formation on the trailing bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub kind: PatternKind,
    pub direction: PatternDirection,
    /// Fixed per-formation strength in [0, 100].
    pub strength: f64,
    pub description: String,
}
