//! Waymark Core Library
//!
//! Best-first route search over planar graphs with edge distances and energy
//! costs, plus heuristic weight tuning.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod heuristic;
pub mod logging;
pub mod search;
pub mod tuning;
