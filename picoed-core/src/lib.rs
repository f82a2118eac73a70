//! Board-agnostic core for the Pico:ed drivers
//!
//! This crate contains everything that does not depend on a specific
//! HAL or on the matrix display itself:
//!
//! - Hardware abstraction traits for the Ring:bit rover (drive train,
//!   echo capture, analog line sensor)
//! - Error and unit types shared by the driver crates
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;
