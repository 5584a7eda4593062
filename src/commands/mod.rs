//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - compare: Single-scenario totals and cost breakdowns
//! - heatmap: Difference grid over both slider sweeps
//! - config: Configuration display and validation

pub mod compare;
pub mod config;
pub mod heatmap;
