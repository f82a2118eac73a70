//! LED driver chip backend trait
//!
//! Defines the interface to the charlieplex driver chip behind the matrix.
//! The chip holds several full pixel frames in its own RAM: one of them is
//! selected for writes and one (possibly the same) is shown.

use crate::glyph::UnsupportedChar;
use crate::image::ImageError;

/// Display errors
///
/// `E` is the chip transport error. Transport failures are not retried;
/// callers should treat `Chip` as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// Communication error with the LED driver chip
    Chip(E),
    /// Character has no glyph (outside printable ASCII)
    UnsupportedChar(char),
    /// Pixel coordinates outside the 17x7 grid
    OutOfBounds,
    /// Text does not fit the requested rendering mode
    TextLength,
    /// Malformed image text
    Image(ImageError),
}

impl<E> From<UnsupportedChar> for DisplayError<E> {
    fn from(err: UnsupportedChar) -> Self {
        DisplayError::UnsupportedChar(err.0)
    }
}

impl<E> From<ImageError> for DisplayError<E> {
    fn from(err: ImageError) -> Self {
        DisplayError::Image(err)
    }
}

/// LED matrix driver chip
///
/// Implementations wrap the bus transport (typically I2C register writes).
/// All calls are blocking; a returned `Ok` means the chip has accepted the
/// write.
pub trait MatrixChip {
    /// Transport error type
    type Error;

    /// Set one LED in the selected frame
    ///
    /// - `index`: physical pixel index (see [`crate::address`])
    /// - `brightness`: PWM level 0-255
    fn set_pixel_intensity(&mut self, index: u8, brightness: u8) -> Result<(), Self::Error>;

    /// Select the frame that subsequent writes go to, without showing it
    fn select_build_frame(&mut self, frame: u8) -> Result<(), Self::Error>;

    /// Show a frame on the matrix
    fn show_frame(&mut self, frame: u8) -> Result<(), Self::Error>;

    /// Set every LED of the selected frame to `value`
    fn fill_frame(&mut self, value: u8) -> Result<(), Self::Error>;
}

impl<T: MatrixChip + ?Sized> MatrixChip for &mut T {
    type Error = T::Error;

    fn set_pixel_intensity(&mut self, index: u8, brightness: u8) -> Result<(), Self::Error> {
        T::set_pixel_intensity(self, index, brightness)
    }

    fn select_build_frame(&mut self, frame: u8) -> Result<(), Self::Error> {
        T::select_build_frame(self, frame)
    }

    fn show_frame(&mut self, frame: u8) -> Result<(), Self::Error> {
        T::show_frame(self, frame)
    }

    fn fill_frame(&mut self, value: u8) -> Result<(), Self::Error> {
        T::fill_frame(self, value)
    }
}
