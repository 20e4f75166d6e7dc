//! Domain rules for the gurukul points tracker.
//!
//! Zero internal dependencies: grading thresholds, point-change rules, roster
//! search/filter semantics and the stats day boundary live here so the
//! repository and HTTP layers share a single definition.

pub mod error;
pub mod grading;
pub mod points;
pub mod reports;
pub mod roster;
pub mod stats;
pub mod types;
