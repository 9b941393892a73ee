//! Recognition leaderboard engine.
//!
//! Turns a snapshot of per-employee activity signals into a ranked, badge-enriched
//! leaderboard and answers category, period, and search queries over it.

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod telemetry;
