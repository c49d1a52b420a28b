//! Shared utilities: flag value types used across components.

pub mod duration;

pub use duration::{Duration, DurationParseError, ModelDuration};
