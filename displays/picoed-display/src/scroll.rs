//! Text rendering and scrolling
//!
//! Characters are laid out on a 6-column pitch: five glyph columns plus one
//! blank spacing column. Up to three characters fit on the 17-column matrix
//! (the third loses its spacing column), so short strings are drawn once
//! and anything else scrolls left one column per step.

use crate::address::WIDTH;
use crate::backend::{DisplayError, MatrixChip};
use crate::framebuffer::FrameBuffer;
use crate::glyph::{glyph, spaced_column, UnsupportedChar};

/// Column pitch of one character (glyph plus spacing)
pub const CHAR_PITCH: usize = 6;

/// Most characters drawn without scrolling
pub const STATIC_CHARS: usize = 3;

/// One byte per matrix column, bit `y` lights row `y`
pub type Columns = [u8; WIDTH];

/// Build the column buffer for a 1-3 character string
///
/// Shorter strings are right-padded with spaces. Returns `None` for the
/// empty string or more than three characters.
pub fn static_columns(text: &str) -> Option<Result<Columns, UnsupportedChar>> {
    let mut chars = [' '; STATIC_CHARS];
    let mut len = 0;
    for ch in text.chars() {
        if len == STATIC_CHARS {
            return None;
        }
        chars[len] = ch;
        len += 1;
    }
    if len == 0 {
        return None;
    }

    Some(columns_for(&chars))
}

fn columns_for(chars: &[char; STATIC_CHARS]) -> Result<Columns, UnsupportedChar> {
    let mut columns = [0u8; WIDTH];
    for (i, col) in columns.iter_mut().enumerate() {
        let g = glyph(chars[i / CHAR_PITCH])?;
        *col = spaced_column(g, i % CHAR_PITCH);
    }
    Ok(columns)
}

/// Renders static and scrolling text through a [`FrameBuffer`]
///
/// Holds the 17-column working buffer that scrolling shifts through.
#[derive(Debug, Clone, Default)]
pub struct ScrollEngine {
    columns: Columns,
}

impl ScrollEngine {
    /// Create an engine with a blank buffer
    pub const fn new() -> Self {
        Self { columns: [0; WIDTH] }
    }

    /// The columns drawn last
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Draw a 1-3 character string in one frame
    pub fn render_static<C: MatrixChip>(
        &mut self,
        fb: &mut FrameBuffer<C>,
        text: &str,
        brightness: u8,
    ) -> Result<(), DisplayError<C::Error>> {
        self.columns = match static_columns(text) {
            Some(columns) => columns?,
            None => return Err(DisplayError::TextLength),
        };
        fb.draw_columns(&self.columns, brightness)
    }

    /// Scroll a string across the matrix
    ///
    /// Takes `len * 6` steps, one draw each. Returns the number of steps.
    pub fn scroll<C: MatrixChip>(
        &mut self,
        fb: &mut FrameBuffer<C>,
        text: &str,
        brightness: u8,
    ) -> Result<usize, DisplayError<C::Error>> {
        self.scroll_chars(fb, text.chars(), brightness, || {})
    }

    /// Scroll a character sequence, calling `after_step` after every draw
    ///
    /// The whole sequence is checked against the font before the first draw,
    /// so an unsupported character never leaves half a message on screen.
    pub fn scroll_chars<C, I, F>(
        &mut self,
        fb: &mut FrameBuffer<C>,
        chars: I,
        brightness: u8,
        mut after_step: F,
    ) -> Result<usize, DisplayError<C::Error>>
    where
        C: MatrixChip,
        I: Iterator<Item = char> + Clone,
        F: FnMut(),
    {
        for ch in chars.clone() {
            if let Err(err) = glyph(ch) {
                #[cfg(feature = "defmt")]
                defmt::warn!("No glyph for {}", ch);
                return Err(err.into());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("Scrolling {} chars", chars.clone().count());

        self.columns = [0; WIDTH];
        let mut steps = 0;
        for ch in chars {
            let g = glyph(ch)?;
            for i in 0..CHAR_PITCH {
                self.columns.copy_within(1.., 0);
                self.columns[WIDTH - 1] = spaced_column(g, i);
                fb.draw_columns(&self.columns, brightness)?;
                after_step();
                steps += 1;
            }
        }

        Ok(steps)
    }
}
