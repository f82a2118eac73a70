//! Rover sensor implementations

pub mod tracking;
pub mod ultrasonic;

pub use tracking::TrackingSensor;
pub use ultrasonic::Ultrasonic;
