//! Hardware abstraction traits
//!
//! These traits define the interface between the rover drivers
//! and the board-specific capture/ADC implementations.

pub mod rover;
pub mod sensor;

pub use rover::{validate_speed, DriveTrain, RoverError, Unit, SPEED_MAX, SPEED_MIN};
pub use sensor::{AdcReader, DistanceSensor, LineTracker, PulseCapture, SensorError, TrackingZone};
