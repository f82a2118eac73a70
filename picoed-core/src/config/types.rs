//! Configuration type definitions
//!
//! These types hold the board constants for the matrix display and the
//! Ring:bit rover. With the `serde` feature the whole [`BoardConfig`] can be
//! stored in flash as postcard-serialized binary data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Brightness used when the caller does not pass one
pub const DEFAULT_BRIGHTNESS: u8 = 30;

/// Busy-wait ceiling while waiting for an ultrasonic echo
pub const DEFAULT_ECHO_POLL_LIMIT: u16 = 5000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Binary config could not be decoded
    Deserialize,
    /// Output buffer too small or value not encodable
    Serialize,
    /// A value is outside its valid range
    InvalidValue,
}

/// Matrix display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Brightness for text and column draws without an explicit value
    pub default_brightness: u8,
    /// Extra delay after each scroll step in microseconds (0 = paced by bus I/O)
    pub scroll_step_us: u32,
    /// Blank characters appended to scrolled text so it leaves the screen
    pub scroll_tail: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_brightness: DEFAULT_BRIGHTNESS,
            scroll_step_us: 0,
            scroll_tail: 3,
        }
    }
}

/// Ring:bit rover configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoverConfig {
    /// Servo pulse width at full reverse (µs)
    pub servo_min_pulse_us: u16,
    /// Servo pulse width at full forward (µs)
    pub servo_max_pulse_us: u16,
    /// Servo PWM period (µs), 20 ms for 50 Hz
    pub servo_period_us: u16,
    /// Width of the ultrasonic trigger pulse (µs)
    pub trigger_pulse_us: u32,
    /// Number of empty polls before an echo counts as missed
    pub echo_poll_limit: u16,
    /// Readings above this are discarded (cm)
    pub max_distance_cm: u16,
    /// Fixed offset added to every echo reading (cm)
    pub echo_offset_cm: u16,
    /// ADC values below this mean both probes see the line
    pub tracking_both_below: u16,
    /// ADC values below this (and above the previous) mean left only
    pub tracking_left_below: u16,
    /// ADC values below this (and above the previous) mean right only
    pub tracking_right_below: u16,
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            servo_min_pulse_us: 750,
            servo_max_pulse_us: 2250,
            servo_period_us: 20_000,
            trigger_pulse_us: 10,
            echo_poll_limit: DEFAULT_ECHO_POLL_LIMIT,
            max_distance_cm: 400,
            echo_offset_cm: 7,
            tracking_both_below: 780,
            tracking_left_below: 900,
            tracking_right_below: 1200,
        }
    }
}

impl RoverConfig {
    /// Check that the servo range and tracking thresholds are consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.servo_min_pulse_us >= self.servo_max_pulse_us
            || self.servo_max_pulse_us > self.servo_period_us
        {
            return Err(ConfigError::InvalidValue);
        }

        if self.tracking_both_below > self.tracking_left_below
            || self.tracking_left_below > self.tracking_right_below
        {
            return Err(ConfigError::InvalidValue);
        }

        Ok(())
    }

    /// Pulse width for a stopped servo (µs)
    pub fn servo_center_us(&self) -> u16 {
        self.servo_min_pulse_us + (self.servo_max_pulse_us - self.servo_min_pulse_us) / 2
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Matrix display settings
    pub display: DisplayConfig,
    /// Rover settings
    pub rover: RoverConfig,
}

impl BoardConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rover.validate()
    }
}

#[cfg(feature = "serde")]
impl BoardConfig {
    /// Decode a postcard-serialized config and validate it
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize into `buf`, returning the used prefix
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }
}
