//! Ring:bit rover
//!
//! Differential drive on two continuous servos. The right servo is mounted
//! mirrored, so its throttle is inverted to make positive speeds drive both
//! wheels forward.

use embedded_hal::pwm::SetDutyCycle;
use picoed_core::config::RoverConfig;
use picoed_core::traits::{validate_speed, DriveTrain, RoverError};
use smart_leds::{SmartLedsWrite, RGB8};

use crate::led::{NoStrip, RainbowLeds};
use crate::motor::ContinuousServo;

/// Per-mille throttle for one percent of speed
const PERMILLE_PER_PERCENT: i16 = 10;

/// The Ring:bit drive train with its optional LED strip
pub struct Ringbit<L, R, S = NoStrip> {
    left: ContinuousServo<L>,
    right: ContinuousServo<R>,
    leds: Option<RainbowLeds<S>>,
    speed: (i16, i16),
}

impl<L, R, S> Ringbit<L, R, S>
where
    L: SetDutyCycle,
    R: SetDutyCycle,
    S: SmartLedsWrite<Color = RGB8>,
{
    /// Create a rover from the two wheel PWM channels
    ///
    /// The wheels are not driven until the first `set_speed`.
    pub fn new(left: L, right: R, config: &RoverConfig) -> Self {
        Self {
            left: ContinuousServo::new(left, config),
            right: ContinuousServo::new(right, config),
            leds: None,
            speed: (0, 0),
        }
    }

    /// Last applied (left, right) speed
    ///
    /// After an `Output` error this reflects the wheels that were actually
    /// set, which may be only the left one.
    pub fn speed(&self) -> (i16, i16) {
        self.speed
    }

    /// Attach the LED strip
    ///
    /// Replaces any strip attached before.
    pub fn init_rainbow_leds(&mut self, strip: S, brightness: u8) {
        #[cfg(feature = "defmt")]
        defmt::debug!("Rainbow LEDs at brightness {}", brightness);

        self.leds = Some(RainbowLeds::new(strip, brightness));
    }

    /// The LED strip, once attached
    pub fn rainbow_leds(&mut self) -> Result<&mut RainbowLeds<S>, RoverError> {
        self.leds.as_mut().ok_or(RoverError::NotInitialized)
    }

    /// Write colours to the LED strip
    pub fn write_rainbow_leds<I>(&mut self, colors: I) -> Result<(), RoverError>
    where
        I: IntoIterator<Item = RGB8>,
    {
        self.rainbow_leds()?
            .write(colors)
            .map_err(|_| RoverError::Output)
    }

    /// Give back the PWM channels and strip
    pub fn release(self) -> (L, R, Option<S>) {
        (
            self.left.release(),
            self.right.release(),
            self.leds.map(RainbowLeds::release),
        )
    }
}

impl<L, R, S> DriveTrain for Ringbit<L, R, S>
where
    L: SetDutyCycle,
    R: SetDutyCycle,
    S: SmartLedsWrite<Color = RGB8>,
{
    fn set_speed(&mut self, left: i16, right: i16) -> Result<(), RoverError> {
        let (left, right) = match (validate_speed(left), validate_speed(right)) {
            (Ok(l), Ok(r)) => (l, r),
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Rejected speed ({}, {})", left, right);
                return Err(RoverError::InvalidSpeed);
            }
        };

        self.left
            .set_throttle(left * PERMILLE_PER_PERCENT)
            .map_err(|_| RoverError::Output)?;
        self.speed.0 = left;
        self.right
            .set_throttle(-right * PERMILLE_PER_PERCENT)
            .map_err(|_| RoverError::Output)?;
        self.speed.1 = right;

        Ok(())
    }
}
