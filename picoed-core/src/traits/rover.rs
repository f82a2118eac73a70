//! Rover drive traits
//!
//! The Ring:bit rover is a differential drive: one continuous-rotation
//! servo per wheel, each commanded with a signed speed percentage.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slowest accepted wheel speed (full reverse)
pub const SPEED_MIN: i16 = -100;

/// Fastest accepted wheel speed (full forward)
pub const SPEED_MAX: i16 = 100;

/// Errors that can occur with rover operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoverError {
    /// Wheel speed outside -100..=100
    InvalidSpeed,
    /// Distance unit code not recognized
    InvalidUnit,
    /// Optional peripheral used before it was set up
    NotInitialized,
    /// PWM, pin or LED strip write failed
    Output,
}

/// Distance unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    /// Centimetres (unit code 1)
    #[default]
    Centimeters,
    /// Inches (unit code 2)
    Inches,
}

impl Unit {
    /// Numeric code used by the board's block-programming API
    pub const fn code(self) -> u8 {
        match self {
            Unit::Centimeters => 1,
            Unit::Inches => 2,
        }
    }
}

impl TryFrom<u8> for Unit {
    type Error = RoverError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Unit::Centimeters),
            2 => Ok(Unit::Inches),
            _ => Err(RoverError::InvalidUnit),
        }
    }
}

/// Trait for a differential drive train
///
/// Speeds are percentages: positive drives the rover forward,
/// negative backward. Both wheels are validated before either is touched.
pub trait DriveTrain {
    /// Set both wheel speeds (-100..=100)
    fn set_speed(&mut self, left: i16, right: i16) -> Result<(), RoverError>;

    /// Stop both wheels
    fn stop(&mut self) -> Result<(), RoverError> {
        self.set_speed(0, 0)
    }
}

/// Check that a wheel speed lies in the accepted range
pub fn validate_speed(speed: i16) -> Result<i16, RoverError> {
    if (SPEED_MIN..=SPEED_MAX).contains(&speed) {
        Ok(speed)
    } else {
        Err(RoverError::InvalidSpeed)
    }
}
