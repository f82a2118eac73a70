//! Ring:bit rover driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in picoed-core for the rover that plugs into the Pico:ed:
//!
//! - Continuous-rotation servo wheels (PWM via embedded-hal)
//! - Differential drive with speed validation
//! - Ultrasonic ranging with last-good-reading fallback
//! - Analog line-tracking probe
//! - Optional rainbow LED strip (any smart-leds writer)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod led;
pub mod motor;
pub mod rover;
pub mod sensor;

pub use led::{NoStrip, RainbowLeds};
pub use motor::ContinuousServo;
pub use rover::Ringbit;
pub use sensor::{TrackingSensor, Ultrasonic};
