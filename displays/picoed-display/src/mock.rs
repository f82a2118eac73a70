//! Recording chip for tests

use std::vec::Vec;

use crate::address::{address, CHIP_PIXELS};
use crate::backend::MatrixChip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipOp {
    Pixel(u8, u8),
    Select(u8),
    Show(u8),
    Fill(u8),
}

/// Models the chip's eight frames and logs every call
pub struct MockChip {
    pub ops: Vec<ChipOp>,
    pub frames: [[u8; CHIP_PIXELS]; 8],
    pub selected: u8,
    pub shown: u8,
    /// Writes that landed on the frame being shown at the time
    pub writes_to_shown: usize,
    /// Fail every call once this many have succeeded
    pub fail_after: Option<usize>,
}

impl MockChip {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            frames: [[0; CHIP_PIXELS]; 8],
            selected: 0,
            shown: 0,
            writes_to_shown: 0,
            fail_after: None,
        }
    }

    /// Brightness the matrix currently shows at (x, y)
    pub fn visible(&self, x: u8, y: u8) -> u8 {
        self.frames[self.shown as usize][address(x, y) as usize]
    }

    pub fn show_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, ChipOp::Show(_)))
            .count()
    }

    fn record(&mut self, op: ChipOp) -> Result<(), BusError> {
        if let Some(limit) = self.fail_after {
            if self.ops.len() >= limit {
                return Err(BusError);
            }
        }
        if matches!(op, ChipOp::Pixel(..) | ChipOp::Fill(_)) && self.selected == self.shown {
            self.writes_to_shown += 1;
        }
        self.ops.push(op);
        Ok(())
    }
}

impl MatrixChip for MockChip {
    type Error = BusError;

    fn set_pixel_intensity(&mut self, index: u8, brightness: u8) -> Result<(), BusError> {
        self.record(ChipOp::Pixel(index, brightness))?;
        self.frames[self.selected as usize][index as usize] = brightness;
        Ok(())
    }

    fn select_build_frame(&mut self, frame: u8) -> Result<(), BusError> {
        self.record(ChipOp::Select(frame))?;
        self.selected = frame;
        Ok(())
    }

    fn show_frame(&mut self, frame: u8) -> Result<(), BusError> {
        self.record(ChipOp::Show(frame))?;
        self.shown = frame;
        Ok(())
    }

    fn fill_frame(&mut self, value: u8) -> Result<(), BusError> {
        self.record(ChipOp::Fill(value))?;
        self.frames[self.selected as usize].fill(value);
        Ok(())
    }
}
