//! Motor driver implementations
//!
//! The Ring:bit drives each wheel with a continuous-rotation servo:
//! pulse width selects speed and direction instead of position.

pub mod servo;

pub use servo::ContinuousServo;
