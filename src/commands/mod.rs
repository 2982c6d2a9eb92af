//! CLI commands for waymark

pub mod config;
pub mod dispatch;
pub mod report;
pub mod run;
pub mod search;
pub mod tune;
