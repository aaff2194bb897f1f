//! Race model: tire compounds, driving styles and race parameters
//!
//! The two lookup tables are closed enumerations with their constants
//! attached. Lookups by name are deliberately asymmetric:
//! - tire compound names are strict, an unknown name is `InvalidInput`
//! - driving style names are lenient, an unknown name behaves as `NORMAL`

use crate::error::{Result, SimulationError};
use crate::units::{Distance, Seconds, Speed};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Length of one lap in track units
pub const LAP_DISTANCE: f64 = 1300.0;

/// Seconds at the start of each lap during which a non-NORMAL style applies
pub const STYLE_WINDOW_SECONDS: u32 = 30;

/// Pit lane length in track units
pub const PITLANE_LENGTH: f64 = 100.0;

/// Pit lane speed limit in track units per second
pub const PITLANE_SPEED: f64 = 4.0;

// === Tire Compounds ===

/// Nominal speed and wear of a compound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TireProfile {
    /// Distance per second on new tires with no style modifier
    pub base_speed: Speed,
    /// Condition points lost per second under NORMAL driving
    pub degradation_rate: f64,
}

/// Tire compound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TireCompound {
    Soft,
    Medium,
    Hard,
}

impl TireCompound {
    pub const ALL: [TireCompound; 3] = [TireCompound::Soft, TireCompound::Medium, TireCompound::Hard];

    pub fn profile(self) -> TireProfile {
        match self {
            TireCompound::Soft => TireProfile {
                base_speed: Speed(30.5),
                degradation_rate: 0.18,
            },
            TireCompound::Medium => TireProfile {
                base_speed: Speed(29.0),
                degradation_rate: 0.09,
            },
            TireCompound::Hard => TireProfile {
                base_speed: Speed(28.0),
                degradation_rate: 0.06,
            },
        }
    }

    /// Uppercase lookup key (e.g. "SOFT")
    pub fn name(self) -> &'static str {
        match self {
            TireCompound::Soft => "SOFT",
            TireCompound::Medium => "MEDIUM",
            TireCompound::Hard => "HARD",
        }
    }

    /// Single letter shown on timing screens
    pub fn code(self) -> char {
        match self {
            TireCompound::Soft => 'S',
            TireCompound::Medium => 'M',
            TireCompound::Hard => 'H',
        }
    }
}

impl FromStr for TireCompound {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SOFT" => Ok(TireCompound::Soft),
            "MEDIUM" => Ok(TireCompound::Medium),
            "HARD" => Ok(TireCompound::Hard),
            other => Err(SimulationError::invalid_input(format!(
                "unknown tire compound '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for TireCompound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// === Driving Styles ===

/// Additive adjustments a driving style applies while its window is open
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleModifiers {
    pub speed_modifier: f64,
    pub wear_modifier: f64,
}

impl StyleModifiers {
    pub const NEUTRAL: StyleModifiers = StyleModifiers {
        speed_modifier: 0.0,
        wear_modifier: 0.0,
    };
}

/// Driving style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DrivingStyle {
    Push,
    Normal,
    Conserve,
}

impl DrivingStyle {
    pub const ALL: [DrivingStyle; 3] = [DrivingStyle::Push, DrivingStyle::Normal, DrivingStyle::Conserve];

    /// Resolve a style by name, falling back to `Normal` for unknown names
    pub fn from_name(name: &str) -> Self {
        match name {
            "PUSH" => DrivingStyle::Push,
            "NORMAL" => DrivingStyle::Normal,
            "CONSERVE" => DrivingStyle::Conserve,
            other => {
                tracing::debug!("Unknown driving style '{}', using NORMAL", other);
                DrivingStyle::Normal
            }
        }
    }

    pub fn modifiers(self) -> StyleModifiers {
        match self {
            DrivingStyle::Push => StyleModifiers {
                speed_modifier: 2.0,
                wear_modifier: 0.12,
            },
            DrivingStyle::Normal => StyleModifiers::NEUTRAL,
            DrivingStyle::Conserve => StyleModifiers {
                speed_modifier: -1.2,
                wear_modifier: -0.04,
            },
        }
    }

    /// Whether this style opens a modifier window at the start of each lap
    pub fn has_window(self) -> bool {
        matches!(self, DrivingStyle::Push | DrivingStyle::Conserve)
    }

    pub fn name(self) -> &'static str {
        match self {
            DrivingStyle::Push => "PUSH",
            DrivingStyle::Normal => "NORMAL",
            DrivingStyle::Conserve => "CONSERVE",
        }
    }
}

impl FromStr for DrivingStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for DrivingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// === Race Parameters ===

/// How the lap count is checked before a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Zero laps is a zero-length race
    #[default]
    Lenient,
    /// Zero laps is rejected
    Strict,
}

/// Constant inputs of a single run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceParameters {
    pub laps: u32,
    pub tire: TireCompound,
    pub style: DrivingStyle,
    #[serde(default)]
    pub validation: Validation,
}

impl RaceParameters {
    pub fn new(laps: u32, tire: TireCompound, style: DrivingStyle) -> Self {
        Self {
            laps,
            tire,
            style,
            validation: Validation::default(),
        }
    }

    /// Build parameters from lookup names (strict tire, lenient style)
    pub fn from_names(laps: u32, tire: &str, style: &str) -> Result<Self> {
        Ok(Self::new(laps, tire.parse()?, DrivingStyle::from_name(style)))
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn lap_distance(&self) -> Distance {
        Distance(LAP_DISTANCE)
    }

    pub fn total_distance(&self) -> Distance {
        Distance(self.laps as f64 * LAP_DISTANCE)
    }

    pub fn validate(&self) -> Result<()> {
        if self.validation == Validation::Strict && self.laps == 0 {
            return Err(SimulationError::invalid_input(
                "lap count must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Time lost by driving through the pit lane instead of past it on HARD tires
///
/// `round(PITLANE_LENGTH / PITLANE_SPEED - PITLANE_LENGTH / 28.0)`, i.e.
/// 25s in the pit lane against 3.57s on track.
pub const PITSTOP_TIME_PENALTY: Seconds = Seconds(21);
