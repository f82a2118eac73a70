//! Rainbow LED strip
//!
//! The Ring:bit carries an optional WS2812 strip. Signal generation is left
//! to whatever [`SmartLedsWrite`] implementation the board provides; this
//! wrapper only applies a global brightness.

use core::convert::Infallible;

use smart_leds::{brightness, SmartLedsWrite, RGB8};

/// A strip with a fixed global brightness
pub struct RainbowLeds<S> {
    strip: S,
    brightness: u8,
}

impl<S> RainbowLeds<S>
where
    S: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(strip: S, brightness: u8) -> Self {
        Self { strip, brightness }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Write colours, scaled by the strip brightness
    pub fn write<I>(&mut self, colors: I) -> Result<(), S::Error>
    where
        I: IntoIterator<Item = RGB8>,
    {
        self.strip
            .write(brightness(colors.into_iter(), self.brightness))
    }

    /// Turn `count` LEDs off
    pub fn clear(&mut self, count: usize) -> Result<(), S::Error> {
        self.write(core::iter::repeat(RGB8::default()).take(count))
    }

    pub fn release(self) -> S {
        self.strip
    }
}

/// Placeholder strip for rovers built without LEDs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStrip;

impl SmartLedsWrite for NoStrip {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, _iterator: T) -> Result<(), Infallible>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        Ok(())
    }
}
