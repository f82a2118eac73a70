//! Rover sensor traits
//!
//! Two sensors hang off the Ring:bit: an ultrasonic ranger that answers a
//! trigger pulse with an echo pulse, and an analog line-tracking probe.

use super::rover::Unit;

/// Errors that can occur with sensor reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionError,
    /// Trigger pin could not be driven
    TriggerFailed,
}

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read the raw ADC value
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Pulse-width capture on the echo line
///
/// Mirrors a PulseIn-style peripheral: once armed it records the width of
/// incoming pulses, and `poll` hands out the first one if it has arrived.
/// `poll` must not block; the caller decides how long to keep asking.
pub trait PulseCapture {
    /// Start capturing pulses (discarding anything recorded before)
    fn arm(&mut self);

    /// Width of the first captured pulse in microseconds, if any
    fn poll(&mut self) -> Option<u32>;

    /// Stop capturing and release the line
    fn disarm(&mut self);
}

/// Trait for distance sensors
pub trait DistanceSensor {
    /// Read the distance in tenths of the given unit
    ///
    /// A missed or implausible echo is not an error: implementations
    /// return the last good reading instead.
    fn read_distance_x10(&mut self, unit: Unit) -> Result<u32, SensorError>;
}

/// Line-tracking zone derived from the analog probe
///
/// The probe reports two reflectance sensors folded into one analog value;
/// `code()` gives the two-digit left/right pattern used by the board docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrackingZone {
    /// Both sensors over the line (code 11)
    Both,
    /// Only the left sensor over the line (code 10)
    LeftOnly,
    /// Only the right sensor over the line (code 01)
    RightOnly,
    /// Neither sensor over the line (code 00)
    Neither,
}

impl TrackingZone {
    /// Two-digit left/right code (11, 10, 1, 0)
    pub const fn code(self) -> u8 {
        match self {
            TrackingZone::Both => 11,
            TrackingZone::LeftOnly => 10,
            TrackingZone::RightOnly => 1,
            TrackingZone::Neither => 0,
        }
    }

    /// Whether the left sensor sees the line
    pub const fn left(self) -> bool {
        matches!(self, TrackingZone::Both | TrackingZone::LeftOnly)
    }

    /// Whether the right sensor sees the line
    pub const fn right(self) -> bool {
        matches!(self, TrackingZone::Both | TrackingZone::RightOnly)
    }
}

/// Trait for the line-tracking probe
pub trait LineTracker {
    /// Sample the probe and classify the reading
    fn tracking(&mut self) -> Result<TrackingZone, SensorError>;
}
