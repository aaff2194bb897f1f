//! Discrete-time lap simulator
//!
//! Advances a single car one simulated second at a time until the race
//! distance is covered. Each second:
//! - the driving style modifier applies if the style has a window and the
//!   car is within the first 30 seconds of the current lap
//! - effective speed is the (modified) base speed scaled by
//!   `(condition + 100) / 200`
//! - tire condition drops by the (modified) degradation rate
//! - crossing `lap * 1300` closes the lap and reopens the style window
//!
//! The simulation is pure: every run builds its own state and drops it on
//! return.

use crate::error::{Result, SimulationError};
use crate::model::{RaceParameters, StyleModifiers, TireProfile, STYLE_WINDOW_SECONDS};
use crate::units::{Distance, Seconds, Speed, TireCondition};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Mutable state of one run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Cumulative distance covered
    pub position: f64,
    /// Simulated seconds since the start
    pub time_elapsed: u32,
    /// Unclamped tire condition in percent
    pub tire_condition: f64,
    /// Lap currently being driven (1-indexed)
    pub current_lap: u32,
    /// Seconds elapsed within the current lap
    pub lap_time: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            position: 0.0,
            time_elapsed: 0,
            tire_condition: TireCondition::NEW.0,
            current_lap: 1,
            lap_time: 0,
        }
    }
}

/// One simulated second
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSample {
    /// Race time at the end of this second
    pub time_elapsed: Seconds,
    /// Lap this second was driven on
    pub lap: u32,
    /// Seconds into the lap when this second started
    pub second_in_lap: u32,
    /// Whether the driving style modifier applied
    pub style_active: bool,
    pub effective_speed: Speed,
    /// Position at the end of this second
    pub position: Distance,
    /// Tire condition at the end of this second
    pub tire_condition: TireCondition,
}

/// A completed lap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    pub lap: u32,
    pub lap_time: Seconds,
    /// Unclamped condition when crossing the line
    pub tire_condition: TireCondition,
}

/// Result of a simulated race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceOutcome {
    pub time_elapsed: Seconds,
    /// Final condition, floored at 0%
    pub tire_condition: TireCondition,
    pub lap_records: Vec<LapRecord>,
}

/// Step-by-step simulator for one race
///
/// Iterating yields one [`StepSample`] per simulated second. A stalled run
/// yields a single `Err` and then ends.
#[derive(Debug, Clone)]
pub struct Simulator {
    params: RaceParameters,
    profile: TireProfile,
    modifiers: StyleModifiers,
    lap_distance: f64,
    total_distance: f64,
    state: SimulationState,
    lap_records: Vec<LapRecord>,
    stalled: bool,
}

impl Simulator {
    pub fn new(params: RaceParameters) -> Self {
        Self {
            profile: params.tire.profile(),
            modifiers: params.style.modifiers(),
            lap_distance: params.lap_distance().0,
            total_distance: params.total_distance().0,
            params,
            state: SimulationState::default(),
            // Grows per completed lap; a long race stalls long before its lap count
            lap_records: Vec::new(),
            stalled: false,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Whether the race distance is covered (or the lap count reached)
    pub fn is_finished(&self) -> bool {
        self.state.position >= self.total_distance || self.state.current_lap > self.params.laps
    }

    /// Advance one simulated second
    ///
    /// Returns `Ok(None)` once the race is finished.
    pub fn step(&mut self) -> Result<Option<StepSample>> {
        if self.stalled || self.is_finished() {
            return Ok(None);
        }

        let state = &mut self.state;
        let base_speed = self.profile.base_speed.0;
        let second_in_lap = state.lap_time;
        let style_active = self.params.style.has_window() && second_in_lap < STYLE_WINDOW_SECONDS;

        let (effective_speed, wear) = if style_active {
            (
                (base_speed + self.modifiers.speed_modifier) * (state.tire_condition + 100.0) / 200.0,
                self.profile.degradation_rate + self.modifiers.wear_modifier,
            )
        } else {
            (
                base_speed * (state.tire_condition + 100.0) / 200.0,
                self.profile.degradation_rate,
            )
        };

        // Condition only decreases, so a car that cannot move now never will
        if effective_speed <= 0.0 {
            self.stalled = true;
            warn!(
                lap = state.current_lap,
                time_elapsed = state.time_elapsed,
                tire_condition = state.tire_condition,
                "Tires worn through, car can no longer advance"
            );
            return Err(SimulationError::Stalled {
                lap: state.current_lap,
                time_elapsed: state.time_elapsed,
                tire_condition: state.tire_condition,
            });
        }

        state.tire_condition -= wear;
        state.position += effective_speed;
        state.time_elapsed += 1;
        state.lap_time += 1;

        let sample = StepSample {
            time_elapsed: Seconds(state.time_elapsed),
            lap: state.current_lap,
            second_in_lap,
            style_active,
            effective_speed: Speed(effective_speed),
            position: Distance(state.position),
            tire_condition: TireCondition(state.tire_condition),
        };

        if state.position >= state.current_lap as f64 * self.lap_distance {
            trace!(
                lap = state.current_lap,
                lap_time = state.lap_time,
                tire_condition = state.tire_condition,
                "Lap completed"
            );
            self.lap_records.push(LapRecord {
                lap: state.current_lap,
                lap_time: Seconds(state.lap_time),
                tire_condition: TireCondition(state.tire_condition),
            });
            state.current_lap += 1;
            state.lap_time = 0;
        }

        Ok(Some(sample))
    }

    /// Run to the end and return the outcome
    pub fn run(mut self) -> Result<RaceOutcome> {
        while self.step()?.is_some() {}
        Ok(self.into_outcome())
    }

    /// Outcome for the state reached so far
    pub fn into_outcome(self) -> RaceOutcome {
        RaceOutcome {
            time_elapsed: Seconds(self.state.time_elapsed),
            tire_condition: TireCondition(self.state.tire_condition).clamped(),
            lap_records: self.lap_records,
        }
    }
}

impl Iterator for Simulator {
    type Item = Result<StepSample>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

/// Simulate a race from validated parameters
pub fn simulate_race(params: &RaceParameters) -> Result<RaceOutcome> {
    params.validate()?;
    debug!(
        laps = params.laps,
        tire = %params.tire,
        style = %params.style,
        "Simulating race"
    );

    let outcome = Simulator::new(*params).run()?;

    debug!(
        time_elapsed = outcome.time_elapsed.0,
        tire_condition = outcome.tire_condition.0,
        "Race simulated"
    );
    Ok(outcome)
}

/// Simulate a race from lookup names
///
/// Fails with `InvalidInput` for an unknown tire compound. An unknown
/// driving style is driven as NORMAL.
pub fn simulate(laps: u32, tire_type: &str, driving_style: &str) -> Result<RaceOutcome> {
    simulate_race(&RaceParameters::from_names(laps, tire_type, driving_style)?)
}
