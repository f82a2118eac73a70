//! Ultrasonic ranger
//!
//! The Ring:bit ranger shares one line for trigger and echo: a short high
//! pulse starts a measurement, then the sensor answers with a pulse whose
//! width is the round-trip time of the sound.
//!
//! Distance (cm) = pulse_us * 34 / 2 / 1000 + 7, kept in tenths of a
//! centimetre to stay in integers.
//!
//! A missed echo or a reading beyond the sensor's range does not fail:
//! the last good reading is returned instead (0 before the first one).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use picoed_core::config::RoverConfig;
use picoed_core::traits::{DistanceSensor, PulseCapture, SensorError, Unit};

/// Convert an echo pulse width to tenths of a centimetre
///
/// `offset_x10` is the fixed sensor offset in tenths of a centimetre.
pub fn pulse_to_cm_x10(pulse_us: u32, offset_x10: u32) -> u32 {
    pulse_us.saturating_mul(17) / 100 + offset_x10
}

/// Convert tenths of a centimetre to tenths of an inch
pub fn cm_x10_to_inch_x10(cm_x10: u32) -> u32 {
    cm_x10 * 100 / 254
}

/// Ultrasonic ranger on a shared trigger/echo line
pub struct Ultrasonic<T, P, D> {
    trigger: T,
    echo: P,
    delay: D,
    /// Trigger pulse width (µs)
    trigger_pulse_us: u32,
    /// Polls before the echo counts as missed
    poll_limit: u16,
    /// Largest accepted reading (cm × 10)
    max_x10: u32,
    /// Sensor offset (cm × 10)
    offset_x10: u32,
    /// Last accepted reading (cm × 10)
    last_x10: u32,
}

impl<T, P, D> Ultrasonic<T, P, D>
where
    T: OutputPin,
    P: PulseCapture,
    D: DelayNs,
{
    pub fn new(trigger: T, echo: P, delay: D, config: &RoverConfig) -> Self {
        Self {
            trigger,
            echo,
            delay,
            trigger_pulse_us: config.trigger_pulse_us,
            poll_limit: config.echo_poll_limit,
            max_x10: config.max_distance_cm as u32 * 10,
            offset_x10: config.echo_offset_cm as u32 * 10,
            last_x10: 0,
        }
    }

    /// Last accepted reading in tenths of a centimetre
    pub fn last_reading_x10(&self) -> u32 {
        self.last_x10
    }

    /// Take one measurement in tenths of a centimetre
    pub fn measure_cm_x10(&mut self) -> Result<u32, SensorError> {
        self.trigger
            .set_high()
            .map_err(|_| SensorError::TriggerFailed)?;
        self.delay.delay_us(self.trigger_pulse_us);
        self.trigger
            .set_low()
            .map_err(|_| SensorError::TriggerFailed)?;

        let pulse = self.wait_echo();

        let Some(pulse_us) = pulse else {
            #[cfg(feature = "defmt")]
            defmt::warn!("No echo after {} polls", self.poll_limit);
            return Ok(self.last_x10);
        };

        let distance = pulse_to_cm_x10(pulse_us, self.offset_x10);
        if distance > self.max_x10 {
            #[cfg(feature = "defmt")]
            defmt::debug!("Echo out of range: {} mm", distance);
            return Ok(self.last_x10);
        }

        self.last_x10 = distance;
        Ok(distance)
    }

    /// Busy-poll the capture for the first pulse
    fn wait_echo(&mut self) -> Option<u32> {
        self.echo.arm();
        let mut pulse = None;
        for _ in 0..=self.poll_limit {
            pulse = self.echo.poll();
            if pulse.is_some() {
                break;
            }
        }
        self.echo.disarm();
        pulse
    }

    /// Give back the pins and delay
    pub fn release(self) -> (T, P, D) {
        (self.trigger, self.echo, self.delay)
    }
}

impl<T, P, D> DistanceSensor for Ultrasonic<T, P, D>
where
    T: OutputPin,
    P: PulseCapture,
    D: DelayNs,
{
    fn read_distance_x10(&mut self, unit: Unit) -> Result<u32, SensorError> {
        let cm_x10 = self.measure_cm_x10()?;
        Ok(match unit {
            Unit::Centimeters => cm_x10,
            Unit::Inches => cm_x10_to_inch_x10(cm_x10),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockPin {
        levels: Vec<bool>,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.levels.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.levels.push(true);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = PinFault;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), PinFault> {
            Err(PinFault)
        }

        fn set_high(&mut self) -> Result<(), PinFault> {
            Err(PinFault)
        }
    }

    /// One scripted echo per measurement: `Some((polls, width))` answers
    /// after `polls` empty polls, `None` never answers
    #[derive(Default)]
    struct ScriptedEcho {
        script: VecDeque<Option<(u32, u32)>>,
        current: Option<(u32, u32)>,
        polls: u32,
        armed: bool,
        total_polls: u32,
    }

    impl ScriptedEcho {
        fn new(script: &[Option<(u32, u32)>]) -> Self {
            Self {
                script: script.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl PulseCapture for ScriptedEcho {
        fn arm(&mut self) {
            self.current = self.script.pop_front().flatten();
            self.polls = 0;
            self.armed = true;
        }

        fn poll(&mut self) -> Option<u32> {
            assert!(self.armed);
            self.total_polls += 1;
            let (wait, width) = self.current?;
            if self.polls < wait {
                self.polls += 1;
                None
            } else {
                Some(width)
            }
        }

        fn disarm(&mut self) {
            self.armed = false;
        }
    }

    #[derive(Default)]
    struct NoDelay {
        total_ns: u64,
    }

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    fn ranger(script: &[Option<(u32, u32)>]) -> Ultrasonic<MockPin, ScriptedEcho, NoDelay> {
        Ultrasonic::new(
            MockPin::default(),
            ScriptedEcho::new(script),
            NoDelay::default(),
            &RoverConfig::default(),
        )
    }

    #[test]
    fn test_pulse_conversion() {
        // 1000 µs round trip = 17 cm + 7 cm offset
        assert_eq!(pulse_to_cm_x10(1000, 70), 240);
        assert_eq!(pulse_to_cm_x10(0, 70), 70);
        assert_eq!(cm_x10_to_inch_x10(254), 100);
    }

    #[test]
    fn test_trigger_pulse() {
        let mut r = ranger(&[Some((3, 1000))]);
        assert_eq!(r.read_distance_x10(Unit::Centimeters), Ok(240));

        let (pin, echo, delay) = r.release();
        assert_eq!(pin.levels, [true, false]);
        assert_eq!(delay.total_ns, 10_000);
        assert!(!echo.armed);
    }

    #[test]
    fn test_inches() {
        let mut r = ranger(&[Some((0, 1000))]);
        assert_eq!(r.read_distance_x10(Unit::Inches), Ok(94));
    }

    #[test]
    fn test_missed_echo_keeps_last() {
        let mut r = ranger(&[Some((0, 1000)), None]);
        assert_eq!(r.read_distance_x10(Unit::Centimeters), Ok(240));
        assert_eq!(r.read_distance_x10(Unit::Centimeters), Ok(240));

        let (_, echo, _) = r.release();
        // 1 poll for the first read, limit + 1 for the missed one
        assert_eq!(echo.total_polls, 1 + 5001);
    }

    #[test]
    fn test_missed_first_echo_is_zero() {
        let mut r = ranger(&[None]);
        assert_eq!(r.read_distance_x10(Unit::Centimeters), Ok(0));
    }

    #[test]
    fn test_echo_on_last_poll_accepted() {
        let mut r = ranger(&[Some((5000, 1000)), Some((5001, 1000))]);
        assert_eq!(r.measure_cm_x10(), Ok(240));

        r.last_x10 = 100;
        assert_eq!(r.measure_cm_x10(), Ok(100));
    }

    #[test]
    fn test_out_of_range_keeps_last() {
        // 30000 µs is 517 cm, beyond the 400 cm ceiling
        let mut r = ranger(&[Some((0, 2000)), Some((0, 30_000))]);
        assert_eq!(r.measure_cm_x10(), Ok(410));
        assert_eq!(r.measure_cm_x10(), Ok(410));
        assert_eq!(r.last_reading_x10(), 410);
    }

    #[test]
    fn test_trigger_failure() {
        let mut r = Ultrasonic::new(
            BrokenPin,
            ScriptedEcho::new(&[Some((0, 1000))]),
            NoDelay::default(),
            &RoverConfig::default(),
        );
        assert_eq!(r.measure_cm_x10(), Err(SensorError::TriggerFailed));
    }

    proptest! {
        #[test]
        fn reading_never_exceeds_ceiling(widths in proptest::collection::vec(0u32..60_000, 1..20)) {
            let script: Vec<_> = widths.iter().map(|w| Some((0, *w))).collect();
            let mut r = ranger(&script);
            for _ in &widths {
                let d = r.measure_cm_x10().unwrap();
                prop_assert!(d <= 4000);
                prop_assert_eq!(d, r.last_reading_x10());
            }
        }
    }
}
