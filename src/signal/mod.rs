//! Signal synthesis: scoring, regime scores, and the trading-signal output.

pub mod regime;
pub mod score;
pub mod snapshot;
pub mod synthesize;

pub use synthesize::generate_signal;

use serde::{Deserialize, Serialize};

use crate::patterns::PatternMatch;
use snapshot::IndicatorSnapshot;

/// Directional call of a synthesized signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDirection {
    Buy,
    Sell,
    Hold,
}

/// The engine's sole output: one directional call with its full supporting
/// evidence. Constructed once per invocation and never mutated; two calls
/// over the same series produce equal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub direction: SignalDirection,
    /// Confidence in [35, 95]; exactly 50 when nothing scored.
    pub confidence: f64,
    /// Human-readable justifications, in scoring order.
    pub reasons: Vec<String>,
    pub target_price: f64,
    pub stop_loss: f64,
    /// `|target - price| / |price - stop|`; 0 when price equals the stop.
    pub risk_reward: f64,
    pub indicators: IndicatorSnapshot,
    pub patterns: Vec<PatternMatch>,
    /// Trend-strength score in [0, 100].
    pub trend_strength: f64,
    /// Volatility score in [0, 100].
    pub volatility: f64,
}
