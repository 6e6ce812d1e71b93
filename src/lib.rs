//! Orbus ledger: guild achievement bulletins from a Dungeon Archive quest log.
//!
//! The log is a tab-separated file, one quest report per line. Reports are
//! parsed into a [`store::ReportStore`], grouped into per-character
//! timelines, ranked into leaderboards, and rendered as forum markup or JSON.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod leaderboard;
pub mod model;
pub mod parse;
pub mod render;
pub mod report;
pub mod store;
