//! Error types for the lap simulator

use thiserror::Error;

/// Errors that can occur while preparing or running a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Unknown tire compound, or a lap count rejected by strict validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Tire condition fell so far that the car can no longer advance
    #[error("Simulation stalled on lap {lap} after {time_elapsed}s (tire condition {tire_condition:.2}%)")]
    Stalled {
        lap: u32,
        time_elapsed: u32,
        tire_condition: f64,
    },
}

impl SimulationError {
    /// Creates an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = SimulationError::invalid_input("unknown tire compound 'WET'");
        assert_eq!(err.to_string(), "Invalid input: unknown tire compound 'WET'");
    }

    #[test]
    fn test_stalled_display() {
        let err = SimulationError::Stalled {
            lap: 11,
            time_elapsed: 892,
            tire_condition: -100.34,
        };
        assert_eq!(
            err.to_string(),
            "Simulation stalled on lap 11 after 892s (tire condition -100.34%)"
        );
    }
}
