//! Logical to physical pixel addressing
//!
//! The chip drives a 16x9 charlieplex array split into two 8-row banks.
//! The Pico:ed folds its 17x7 matrix onto those banks: columns 0-8 use the
//! first bank with rows flipped, columns 9-16 are mirrored back onto the
//! second bank.

/// Matrix width in pixels
pub const WIDTH: usize = 17;

/// Matrix height in pixels
pub const HEIGHT: usize = 7;

/// Number of LEDs in one chip frame
pub const CHIP_PIXELS: usize = 144;

/// Translate an (x, y) coordinate to the chip's pixel index
///
/// `x` must be below [`WIDTH`] and `y` below [`HEIGHT`]; callers are
/// responsible for bounds checking.
pub fn address(x: u8, y: u8) -> u8 {
    debug_assert!((x as usize) < WIDTH && (y as usize) < HEIGHT);

    let (x, y) = if x > 8 { (17 - x, y + 8) } else { (x, 7 - y) };
    x * 16 + y
}

/// Bounds check for logical coordinates
pub fn in_bounds(x: u8, y: u8) -> bool {
    (x as usize) < WIDTH && (y as usize) < HEIGHT
}
