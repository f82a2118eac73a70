//! Line-tracking probe
//!
//! Two reflectance sensors are folded into one analog output. Lower
//! readings mean more of the probe sees the dark line.

use picoed_core::config::RoverConfig;
use picoed_core::traits::{AdcReader, LineTracker, SensorError, TrackingZone};

/// Line-tracking probe on one ADC channel
pub struct TrackingSensor<A> {
    adc: A,
    both_below: u16,
    left_below: u16,
    right_below: u16,
}

impl<A: AdcReader> TrackingSensor<A> {
    pub fn new(adc: A, config: &RoverConfig) -> Self {
        Self {
            adc,
            both_below: config.tracking_both_below,
            left_below: config.tracking_left_below,
            right_below: config.tracking_right_below,
        }
    }

    /// Map a raw ADC value to a zone
    pub fn classify(&self, raw: u16) -> TrackingZone {
        if raw < self.both_below {
            TrackingZone::Both
        } else if raw < self.left_below {
            TrackingZone::LeftOnly
        } else if raw < self.right_below {
            TrackingZone::RightOnly
        } else {
            TrackingZone::Neither
        }
    }

    pub fn release(self) -> A {
        self.adc
    }
}

impl<A: AdcReader> LineTracker for TrackingSensor<A> {
    fn tracking(&mut self) -> Result<TrackingZone, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        let zone = self.classify(raw);

        #[cfg(feature = "defmt")]
        defmt::trace!("Tracking raw={} zone={}", raw, zone);

        Ok(zone)
    }
}
