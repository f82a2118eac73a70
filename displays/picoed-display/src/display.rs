//! Matrix display facade
//!
//! `Display` owns the framebuffer, the scroll engine and a delay source,
//! and dispatches [`ShowValue`]s to the right renderer.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use heapless::String;
use picoed_core::config::DisplayConfig;

use crate::backend::{DisplayError, MatrixChip};
use crate::framebuffer::FrameBuffer;
use crate::image::{decode, PixelTriple};
use crate::scroll::{Columns, ScrollEngine, STATIC_CHARS};

/// Longest formatted number (f32 debug output fits comfortably)
const NUMBER_LEN: usize = 24;

/// Anything the display can show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShowValue<'a> {
    /// Integer, shown as decimal text
    Integer(i32),
    /// Float, shown with at least one fractional digit (`2.0`, `1.5`)
    Float(f32),
    /// Text: 1-3 characters are drawn in place, anything else scrolls
    Text(&'a str),
    /// Raw column bytes, e.g. a [`preset`](crate::preset) icon
    Columns(&'a Columns),
    /// Pixels with their own 0-9 intensity
    Pixels(&'a [PixelTriple]),
}

impl From<i32> for ShowValue<'_> {
    fn from(value: i32) -> Self {
        ShowValue::Integer(value)
    }
}

impl From<f32> for ShowValue<'_> {
    fn from(value: f32) -> Self {
        ShowValue::Float(value)
    }
}

impl<'a> From<&'a str> for ShowValue<'a> {
    fn from(value: &'a str) -> Self {
        ShowValue::Text(value)
    }
}

impl<'a> From<&'a Columns> for ShowValue<'a> {
    fn from(value: &'a Columns) -> Self {
        ShowValue::Columns(value)
    }
}

impl<'a> From<&'a [PixelTriple]> for ShowValue<'a> {
    fn from(value: &'a [PixelTriple]) -> Self {
        ShowValue::Pixels(value)
    }
}

/// The Pico:ed matrix display
///
/// Single writer by construction: every drawing method takes `&mut self`.
/// Wrap it in a [`SharedDisplay`](crate::SharedDisplay) when several
/// contexts need to draw.
pub struct Display<C, D> {
    fb: FrameBuffer<C>,
    engine: ScrollEngine,
    delay: D,
    config: DisplayConfig,
}

impl<C, D> Display<C, D>
where
    C: MatrixChip,
    D: DelayNs,
{
    /// Create a display over an initialized chip
    pub fn new(chip: C, delay: D, config: DisplayConfig) -> Self {
        Self {
            fb: FrameBuffer::new(chip),
            engine: ScrollEngine::new(),
            delay,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Turn every pixel off
    pub fn clear(&mut self) -> Result<(), DisplayError<C::Error>> {
        self.fb.clear()
    }

    /// Show a value at the default brightness
    pub fn show<'a>(&mut self, value: impl Into<ShowValue<'a>>) -> Result<(), DisplayError<C::Error>> {
        self.show_with(value, self.config.default_brightness)
    }

    /// Show a value
    ///
    /// `brightness` applies to numbers, text and columns; pixel triples
    /// carry their own intensity.
    pub fn show_with<'a>(
        &mut self,
        value: impl Into<ShowValue<'a>>,
        brightness: u8,
    ) -> Result<(), DisplayError<C::Error>> {
        match value.into() {
            ShowValue::Integer(n) => {
                let mut text: String<NUMBER_LEN> = String::new();
                write!(text, "{}", n).map_err(|_| DisplayError::TextLength)?;
                self.show_text(&text, brightness)
            }
            ShowValue::Float(f) => {
                let mut text: String<NUMBER_LEN> = String::new();
                write!(text, "{:?}", f).map_err(|_| DisplayError::TextLength)?;
                self.show_text(&text, brightness)
            }
            ShowValue::Text(text) => self.show_text(text, brightness),
            ShowValue::Columns(columns) => self.fb.draw_columns(columns, brightness),
            ShowValue::Pixels(pixels) => self.draw_pixels(pixels),
        }
    }

    /// Show text at the default brightness
    pub fn scroll(&mut self, text: &str) -> Result<(), DisplayError<C::Error>> {
        self.scroll_with(text, self.config.default_brightness)
    }

    /// Show text at `brightness`
    pub fn scroll_with(&mut self, text: &str, brightness: u8) -> Result<(), DisplayError<C::Error>> {
        self.show_text(text, brightness)
    }

    /// Draw raw column bytes
    pub fn draw_columns(&mut self, columns: &Columns, brightness: u8) -> Result<(), DisplayError<C::Error>> {
        self.fb.draw_columns(columns, brightness)
    }

    /// Draw pixel triples into a fresh frame
    pub fn draw_pixels(&mut self, pixels: &[PixelTriple]) -> Result<(), DisplayError<C::Error>> {
        self.fb.begin()?;
        for p in pixels {
            self.fb.set_pixel(p.x(), p.y(), p.brightness())?;
        }
        self.fb.commit()
    }

    /// Decode image text and draw it
    pub fn show_image(&mut self, text: Option<&str>) -> Result<(), DisplayError<C::Error>> {
        let pixels = decode(text)?;
        self.draw_pixels(&pixels)
    }

    /// Set one pixel in the current frame
    pub fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<(), DisplayError<C::Error>> {
        self.fb.set_pixel(x, y, brightness)
    }

    /// Brightness of a pixel on the matrix
    pub fn pixel(&self, x: u8, y: u8) -> Option<u8> {
        self.fb.pixel(x, y)
    }

    /// Borrow the framebuffer
    pub fn frame_buffer(&self) -> &FrameBuffer<C> {
        &self.fb
    }

    /// Give back the chip and delay
    pub fn release(self) -> (C, D) {
        (self.fb.release(), self.delay)
    }

    /// Draw 1-3 characters in place, scroll anything longer
    ///
    /// Scrolled text gets `scroll_tail` trailing blanks so it leaves the
    /// matrix. Empty text clears the matrix without drawing.
    fn show_text(&mut self, text: &str, brightness: u8) -> Result<(), DisplayError<C::Error>> {
        let len = text.chars().count();
        if len == 0 {
            return self.fb.clear();
        }
        if len <= STATIC_CHARS {
            return self.engine.render_static(&mut self.fb, text, brightness);
        }

        let step_us = self.config.scroll_step_us;
        let delay = &mut self.delay;
        let chars = text
            .chars()
            .chain(core::iter::repeat(' ').take(self.config.scroll_tail as usize));

        self.engine.scroll_chars(&mut self.fb, chars, brightness, || {
            if step_us > 0 {
                delay.delay_us(step_us);
            }
        })?;
        Ok(())
    }
}
