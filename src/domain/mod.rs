//! Core market data types shared by every stage of the engine.

pub mod bar;

pub use bar::{validate_series, Bar, SeriesError};
