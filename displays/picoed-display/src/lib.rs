//! Driver for the Pico:ed 17x7 LED matrix
//!
//! This crate provides:
//! - `MatrixChip` trait for the LED driver chip underneath the matrix
//! - `FrameBuffer` double buffering over two of the chip's hardware frames
//! - A 5x7 ASCII font, static text rendering and column-by-column scrolling
//! - The textual digit-grid image format and a set of preset icons
//! - `Display`, the facade that ties the pieces together
//!
//! # Architecture
//!
//! ```text
//! caller ─► Display::show ─► ScrollEngine / image codec
//!                                   │
//!                                   ▼
//!                      17 column bytes or pixel triples
//!                                   │
//!                                   ▼
//!             FrameBuffer ─► address() ─► MatrixChip (frame swap)
//! ```
//!
//! Every draw is built into the hidden frame and only then shown, so the
//! matrix never displays a half-drawn picture.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod address;
pub mod backend;
pub mod display;
pub mod framebuffer;
pub mod glyph;
pub mod image;
pub mod preset;
pub mod scroll;
pub mod shared;

#[cfg(test)]
mod mock;

// Re-export key types
pub use address::{address, HEIGHT, WIDTH};
pub use backend::{DisplayError, MatrixChip};
pub use display::{Display, ShowValue};
pub use framebuffer::{Frame, FrameBuffer, FrameSlot};
pub use glyph::{glyph, Glyph, UnsupportedChar};
pub use image::{decode, encode, ImageError, PixelSet, PixelTriple};
pub use scroll::{Columns, ScrollEngine};
pub use shared::SharedDisplay;
