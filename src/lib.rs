//! chartist — technical analysis and signal synthesis over OHLCV bars.
//!
//! A library of pure functions over immutable bar series: moving averages,
//! oscillators, bands, volatility and flow indicators, candlestick pattern
//! detection, and a synthesizer that folds all of it into one directional
//! trading signal with confidence, target, stop, and risk/reward.
//!
//! Everything is deterministic and total. Indicators report insufficient
//! history as `None` rather than NaN, the synthesizer answers any input up
//! to and including an empty series, and no call mutates or retains the
//! bars it is given. Feed it whatever timeframe you like; the engine never
//! looks at the clock, only at the order of the bars.
//!
//! ```
//! use chartist::domain::Bar;
//! use chartist::signal::generate_signal;
//! use chrono::{TimeZone, Utc};
//!
//! let bars: Vec<Bar> = (0..30)
//!     .map(|i| {
//!         let close = 100.0 + i as f64;
//!         Bar {
//!             timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
//!                 + chrono::Duration::days(i as i64),
//!             open: close - 0.5,
//!             high: close + 1.0,
//!             low: close - 1.0,
//!             close,
//!             volume: 1_000.0,
//!         }
//!     })
//!     .collect();
//!
//! let signal = generate_signal(&bars);
//! assert!((35.0..=95.0).contains(&signal.confidence));
//! ```

pub mod domain;
pub mod indicators;
pub mod patterns;
pub mod signal;
