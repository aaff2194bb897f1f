//! LapSim Core Library
//!
//! This crate provides the tire/driving style model and the discrete-time
//! lap simulator that estimates race time and final tire condition.

pub mod error;
pub mod model;
pub mod simulator;
pub mod units;

pub use error::{Result, SimulationError};
pub use model::{DrivingStyle, RaceParameters, TireCompound, Validation};
pub use simulator::{simulate, simulate_race, LapRecord, RaceOutcome, Simulator, StepSample};
