//! Double-buffered frame management
//!
//! The chip keeps whole frames in its own RAM. Two of them are used here:
//! while one is shown the other is cleared and redrawn, then the chip is
//! told to show the new one. The shown frame is never written during a
//! build, so the matrix never displays a partially drawn picture.
//!
//! A shadow copy of both frames is kept so the visible picture can be read
//! back without a bus transaction.

use crate::address::{address, in_bounds, HEIGHT, WIDTH};
use crate::backend::{DisplayError, MatrixChip};
use crate::scroll::Columns;

/// One of the two hardware frames used for double buffering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameSlot {
    /// Chip frame 0
    #[default]
    Zero,
    /// Chip frame 1
    One,
}

impl FrameSlot {
    /// The other slot
    pub fn toggled(self) -> Self {
        match self {
            FrameSlot::Zero => FrameSlot::One,
            FrameSlot::One => FrameSlot::Zero,
        }
    }

    /// Chip frame number
    pub const fn index(self) -> u8 {
        match self {
            FrameSlot::Zero => 0,
            FrameSlot::One => 1,
        }
    }
}

/// Brightness grid for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: [[u8; WIDTH]; HEIGHT],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Create an all-off frame
    pub const fn new() -> Self {
        Self {
            pixels: [[0; WIDTH]; HEIGHT],
        }
    }

    /// Brightness at (x, y), or `None` outside the grid
    pub fn get(&self, x: u8, y: u8) -> Option<u8> {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Set every pixel to `value`
    pub fn fill(&mut self, value: u8) {
        for row in &mut self.pixels {
            row.fill(value);
        }
    }

    /// Number of pixels that are not off
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().flatten().filter(|p| **p > 0).count()
    }

    fn set(&mut self, x: u8, y: u8, brightness: u8) {
        self.pixels[y as usize][x as usize] = brightness;
    }
}

/// Double-buffered framebuffer over a [`MatrixChip`]
pub struct FrameBuffer<C> {
    chip: C,
    /// Frame that writes currently go to
    building: FrameSlot,
    /// Frame currently shown on the matrix
    shown: FrameSlot,
    /// Shadow copy of both chip frames
    frames: [Frame; 2],
}

impl<C: MatrixChip> FrameBuffer<C> {
    /// Wrap a chip that has been initialized with frame 0 selected and shown
    pub fn new(chip: C) -> Self {
        Self {
            chip,
            building: FrameSlot::Zero,
            shown: FrameSlot::Zero,
            frames: [Frame::new(), Frame::new()],
        }
    }

    /// Blank the matrix
    ///
    /// Clears the shown frame in place. If an earlier build was cut short
    /// by a chip error, writes are switched back to the shown frame first.
    pub fn clear(&mut self) -> Result<(), DisplayError<C::Error>> {
        if self.building != self.shown {
            self.chip
                .select_build_frame(self.shown.index())
                .map_err(DisplayError::Chip)?;
            self.building = self.shown;
        }
        self.fill_building()
    }

    fn fill_building(&mut self) -> Result<(), DisplayError<C::Error>> {
        self.chip.fill_frame(0).map_err(DisplayError::Chip)?;
        self.frames[self.building.index() as usize].fill(0);
        Ok(())
    }

    /// Set one pixel in the selected frame
    pub fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) -> Result<(), DisplayError<C::Error>> {
        if !in_bounds(x, y) {
            return Err(DisplayError::OutOfBounds);
        }

        self.chip
            .set_pixel_intensity(address(x, y), brightness)
            .map_err(DisplayError::Chip)?;
        self.frames[self.building.index() as usize].set(x, y, brightness);
        Ok(())
    }

    /// Start building a new frame
    ///
    /// Switches writes to the frame opposite the shown one and clears it.
    /// Nothing changes on the matrix until [`commit`](Self::commit).
    pub fn begin(&mut self) -> Result<(), DisplayError<C::Error>> {
        let hidden = self.shown.toggled();
        self.chip
            .select_build_frame(hidden.index())
            .map_err(DisplayError::Chip)?;
        self.building = hidden;
        self.fill_building()
    }

    /// Show the frame built since [`begin`](Self::begin)
    pub fn commit(&mut self) -> Result<(), DisplayError<C::Error>> {
        self.chip
            .show_frame(self.building.index())
            .map_err(DisplayError::Chip)?;
        self.shown = self.building;

        #[cfg(feature = "defmt")]
        defmt::trace!("Showing frame {}", self.shown.index());

        Ok(())
    }

    /// Draw 17 column bytes with a uniform brightness
    ///
    /// Bit `y` of `columns[x]` lights pixel (x, y); bit 7 is ignored.
    pub fn draw_columns(
        &mut self,
        columns: &Columns,
        brightness: u8,
    ) -> Result<(), DisplayError<C::Error>> {
        self.begin()?;
        for (x, col) in columns.iter().enumerate() {
            for y in 0..HEIGHT {
                if col & (1 << y) != 0 {
                    self.set_pixel(x as u8, y as u8, brightness)?;
                }
            }
        }
        self.commit()
    }

    /// Brightness of a pixel on the matrix
    pub fn pixel(&self, x: u8, y: u8) -> Option<u8> {
        self.shown_frame().get(x, y)
    }

    /// The frame currently on the matrix
    pub fn shown_frame(&self) -> &Frame {
        &self.frames[self.shown.index() as usize]
    }

    /// Slot currently shown
    pub fn shown_slot(&self) -> FrameSlot {
        self.shown
    }

    /// Slot receiving writes
    pub fn building_slot(&self) -> FrameSlot {
        self.building
    }

    /// Borrow the chip
    pub fn chip(&self) -> &C {
        &self.chip
    }

    /// Mutably borrow the chip (for chip-specific settings)
    pub fn chip_mut(&mut self) -> &mut C {
        &mut self.chip
    }

    /// Give the chip back
    pub fn release(self) -> C {
        self.chip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{ChipOp, MockChip};
    use std::vec;

    #[test]
    fn test_slot_toggle() {
        assert_eq!(FrameSlot::Zero.toggled(), FrameSlot::One);
        assert_eq!(FrameSlot::One.toggled(), FrameSlot::Zero);
        assert_eq!(FrameSlot::One.index(), 1);
    }

    #[test]
    fn test_draw_alternates_frames() {
        let mut fb = FrameBuffer::new(MockChip::new());
        let cols = [0x01; WIDTH];

        fb.draw_columns(&cols, 10).unwrap();
        assert_eq!(fb.shown_slot(), FrameSlot::One);
        fb.draw_columns(&cols, 10).unwrap();
        assert_eq!(fb.shown_slot(), FrameSlot::Zero);
        fb.draw_columns(&cols, 10).unwrap();
        assert_eq!(fb.shown_slot(), FrameSlot::One);
    }

    #[test]
    fn test_draw_protocol_order() {
        let mut fb = FrameBuffer::new(MockChip::new());
        let mut cols = [0u8; WIDTH];
        cols[0] = 0b0000_0001;

        fb.draw_columns(&cols, 40).unwrap();

        assert_eq!(
            fb.chip().ops,
            vec![
                ChipOp::Select(1),
                ChipOp::Fill(0),
                ChipOp::Pixel(address(0, 0), 40),
                ChipOp::Show(1),
            ]
        );
    }

    #[test]
    fn test_shown_frame_never_written_during_build() {
        let mut fb = FrameBuffer::new(MockChip::new());
        let cols = [0x7f; WIDTH];

        for _ in 0..4 {
            fb.draw_columns(&cols, 255).unwrap();
        }

        assert_eq!(fb.chip().writes_to_shown, 0);
    }

    #[test]
    fn test_stale_pixels_cleared() {
        let mut fb = FrameBuffer::new(MockChip::new());

        fb.draw_columns(&[0x7f; WIDTH], 100).unwrap();
        fb.draw_columns(&[0x7f; WIDTH], 100).unwrap();

        let mut one = [0u8; WIDTH];
        one[3] = 0b100;
        fb.draw_columns(&one, 100).unwrap();

        assert_eq!(fb.shown_frame().lit_count(), 1);
        assert_eq!(fb.pixel(3, 2), Some(100));
        assert_eq!(fb.chip().visible(3, 2), 100);
        assert_eq!(fb.chip().visible(0, 0), 0);
    }

    #[test]
    fn test_bit7_ignored() {
        let mut fb = FrameBuffer::new(MockChip::new());
        fb.draw_columns(&[0x80; WIDTH], 100).unwrap();
        assert_eq!(fb.shown_frame().lit_count(), 0);
    }

    #[test]
    fn test_set_pixel_bounds() {
        let mut fb = FrameBuffer::new(MockChip::new());
        assert_eq!(fb.set_pixel(17, 0, 1), Err(DisplayError::OutOfBounds));
        assert_eq!(fb.set_pixel(0, 7, 1), Err(DisplayError::OutOfBounds));
        assert!(fb.chip().ops.is_empty());
    }

    #[test]
    fn test_clear_blanks_shown_frame() {
        let mut fb = FrameBuffer::new(MockChip::new());
        fb.draw_columns(&[0x7f; WIDTH], 50).unwrap();
        fb.clear().unwrap();

        assert_eq!(fb.shown_frame().lit_count(), 0);
        assert_eq!(fb.chip().visible(8, 3), 0);
    }

    #[test]
    fn test_chip_error_propagates() {
        let mut chip = MockChip::new();
        chip.fail_after = Some(2);
        let mut fb = FrameBuffer::new(chip);

        assert_eq!(
            fb.draw_columns(&[0x7f; WIDTH], 50),
            Err(DisplayError::Chip(crate::mock::BusError))
        );
    }

    #[test]
    fn test_failed_build_never_reaches_shown_frame() {
        let mut chip = MockChip::new();
        // Select and fill succeed, the first pixel write fails
        chip.fail_after = Some(2);
        let mut fb = FrameBuffer::new(chip);

        assert!(fb.draw_columns(&[0x7f; WIDTH], 50).is_err());
        assert_eq!(fb.shown_slot(), FrameSlot::Zero);

        fb.chip_mut().fail_after = None;
        fb.draw_columns(&[0x7f; WIDTH], 50).unwrap();

        assert_eq!(fb.chip().writes_to_shown, 0);
        assert_eq!(fb.shown_slot(), FrameSlot::One);
        assert_eq!(fb.chip().visible(8, 3), 50);
    }

    #[test]
    fn test_failed_select_keeps_slots() {
        let mut chip = MockChip::new();
        chip.fail_after = Some(0);
        let mut fb = FrameBuffer::new(chip);

        assert!(fb.begin().is_err());
        assert_eq!(fb.building_slot(), FrameSlot::Zero);
        assert_eq!(fb.shown_slot(), FrameSlot::Zero);
    }

    #[test]
    fn test_clear_after_failed_build_blanks_matrix() {
        let mut fb = FrameBuffer::new(MockChip::new());
        fb.draw_columns(&[0x7f; WIDTH], 50).unwrap();

        let ops = fb.chip().ops.len();
        fb.chip_mut().fail_after = Some(ops + 2);
        assert!(fb.draw_columns(&[0x01; WIDTH], 50).is_err());
        fb.chip_mut().fail_after = None;

        fb.clear().unwrap();
        assert_eq!(fb.building_slot(), fb.shown_slot());
        assert_eq!(fb.shown_frame().lit_count(), 0);
        assert_eq!(fb.chip().visible(8, 3), 0);
    }
}
