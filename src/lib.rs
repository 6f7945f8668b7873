//! `cosmic-expansion` library crate.
//!
//! The binary (`cex`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI/notebook front-ends)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod expansion;
pub mod grid;
pub mod integrate;
pub mod legacy;
pub mod model;
pub mod report;
pub mod scaling;
