//! Continuous-rotation servo driver
//!
//! A continuous servo is stopped at the centre pulse width and spins
//! faster the further the pulse moves towards either end of its range.
//!
//! # Usage
//!
//! ```ignore
//! let mut wheel = ContinuousServo::new(pwm, &RoverConfig::default());
//! wheel.set_throttle(500)?; // half speed forward
//! ```

use embedded_hal::pwm::SetDutyCycle;
use picoed_core::config::RoverConfig;

/// Full throttle in per-mille
pub const THROTTLE_MAX: i16 = 1000;

/// Continuous-rotation servo on one PWM channel
///
/// The PWM channel must already run at the servo frame rate (50 Hz for
/// the Ring:bit); only the duty cycle is changed here.
pub struct ContinuousServo<P> {
    pwm: P,
    /// Pulse width at full reverse (µs)
    min_pulse_us: u16,
    /// Pulse width at full forward (µs)
    max_pulse_us: u16,
    /// PWM period (µs)
    period_us: u16,
    /// Last applied throttle (per-mille)
    throttle: i16,
}

impl<P: SetDutyCycle> ContinuousServo<P> {
    /// Create a servo driver; the output is left untouched until the
    /// first `set_throttle`
    pub fn new(pwm: P, config: &RoverConfig) -> Self {
        Self {
            pwm,
            min_pulse_us: config.servo_min_pulse_us,
            max_pulse_us: config.servo_max_pulse_us,
            period_us: config.servo_period_us,
            throttle: 0,
        }
    }

    /// Set the throttle in per-mille (-1000 full reverse .. 1000 full forward)
    ///
    /// Values outside the range are clamped.
    pub fn set_throttle(&mut self, permille: i16) -> Result<(), P::Error> {
        let permille = permille.clamp(-THROTTLE_MAX, THROTTLE_MAX);
        let pulse = self.pulse_width_us(permille);
        self.pwm.set_duty_cycle_fraction(pulse, self.period_us)?;
        self.throttle = permille;
        Ok(())
    }

    /// Last applied throttle
    pub fn throttle(&self) -> i16 {
        self.throttle
    }

    /// Pulse width for a throttle value
    ///
    /// Linear between the configured limits, centre = stopped.
    pub fn pulse_width_us(&self, permille: i16) -> u16 {
        let permille = permille.clamp(-THROTTLE_MAX, THROTTLE_MAX) as i32;
        let min = self.min_pulse_us as i32;
        let range = self.max_pulse_us.saturating_sub(self.min_pulse_us) as i32;
        let full = 2 * THROTTLE_MAX as i32;

        (min + (permille + THROTTLE_MAX as i32) * range / full) as u16
    }

    /// Give the PWM channel back
    pub fn release(self) -> P {
        self.pwm
    }
}
