//! LapSim Report Library
//!
//! Exposes the report harness components for integration testing.

pub mod config;
pub mod report;
