//! Textual pixel-art images
//!
//! An image is written as seven rows of seventeen digits, each digit an
//! intensity from 0 (off) to 9 (full). Rows 1-6 end with a `:` separator;
//! the last row needs none:
//!
//! ```text
//! 00000000000000000:
//! 00000900000900000:
//! ...
//! 00000000000000000
//! ```
//!
//! Decoding yields one [`PixelTriple`] per pixel.

use heapless::{String, Vec};

use crate::address::{HEIGHT, WIDTH};

/// Row separator
pub const SEPARATOR: u8 = b':';

/// Characters per separated row (17 digits plus `:`)
pub const ROW_STRIDE: usize = WIDTH + 1;

/// Minimum length of an image string
pub const IMAGE_TEXT_LEN: usize = ROW_STRIDE * (HEIGHT - 1) + WIDTH;

/// Highest intensity digit
pub const MAX_INTENSITY: u8 = 9;

/// All pixels of one image
pub type PixelSet = Vec<PixelTriple, { WIDTH * HEIGHT }>;

/// Image text errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// Row `row` (0-5) is not terminated by `:`
    MissingSeparator { row: u8 },
    /// Text ends before all seven rows
    TooShort,
    /// Character at (x, y) is not a digit
    InvalidDigit { x: u8, y: u8 },
    /// Coordinates or intensity outside the grid / 0-9 range
    OutOfRange,
}

/// One pixel of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelTriple {
    x: u8,
    y: u8,
    intensity: u8,
}

impl PixelTriple {
    /// Create a pixel, checking coordinates and intensity
    pub fn new(x: u8, y: u8, intensity: u8) -> Result<Self, ImageError> {
        if x as usize >= WIDTH || y as usize >= HEIGHT || intensity > MAX_INTENSITY {
            return Err(ImageError::OutOfRange);
        }
        Ok(Self { x, y, intensity })
    }

    /// The all-off pixel at the origin
    pub const fn off() -> Self {
        Self {
            x: 0,
            y: 0,
            intensity: 0,
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Intensity 0-9
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Chip brightness for this intensity (`intensity * 255 / 9`, floored)
    pub fn brightness(&self) -> u8 {
        (self.intensity as u16 * 255 / MAX_INTENSITY as u16) as u8
    }
}

/// Decode image text
///
/// `None` or an empty string gives a single off pixel at the origin.
/// The text is fully validated before any pixel is produced.
pub fn decode(text: Option<&str>) -> Result<PixelSet, ImageError> {
    let mut pixels = PixelSet::new();

    let bytes = match text {
        Some(t) if !t.is_empty() => t.as_bytes(),
        _ => {
            // Capacity is 119, one push cannot fail
            let _ = pixels.push(PixelTriple::off());
            return Ok(pixels);
        }
    };

    for row in 0..HEIGHT - 1 {
        match bytes.get((row + 1) * ROW_STRIDE - 1) {
            Some(&SEPARATOR) => {}
            Some(_) => return Err(ImageError::MissingSeparator { row: row as u8 }),
            None => return Err(ImageError::TooShort),
        }
    }
    if bytes.len() < IMAGE_TEXT_LEN {
        return Err(ImageError::TooShort);
    }

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if !bytes[y * ROW_STRIDE + x].is_ascii_digit() {
                return Err(ImageError::InvalidDigit {
                    x: x as u8,
                    y: y as u8,
                });
            }
        }
    }

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let intensity = bytes[y * ROW_STRIDE + x] - b'0';
            pixels
                .push(PixelTriple {
                    x: x as u8,
                    y: y as u8,
                    intensity,
                })
                .map_err(|_| ImageError::OutOfRange)?;
        }
    }

    Ok(pixels)
}

/// Encode pixels as image text
///
/// Pixels not mentioned are `0`; a later pixel at the same position wins.
pub fn encode(pixels: &[PixelTriple]) -> String<IMAGE_TEXT_LEN> {
    let mut grid = [[0u8; WIDTH]; HEIGHT];
    for p in pixels {
        grid[p.y as usize][p.x as usize] = p.intensity;
    }

    let mut out = String::new();
    for (y, row) in grid.iter().enumerate() {
        for intensity in row {
            // Exactly IMAGE_TEXT_LEN characters are written
            let _ = out.push((b'0' + intensity) as char);
        }
        if y < HEIGHT - 1 {
            let _ = out.push(SEPARATOR as char);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const SMILE: &str = "00000000000000000:\
                         00000900000900000:\
                         00000900000900000:\
                         00000000000000000:\
                         00009000000090000:\
                         00000999999900000:\
                         00000000000000000";

    fn grid_text(intensities: &[u8]) -> std::string::String {
        let mut text = std::string::String::new();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                text.push((b'0' + intensities[y * WIDTH + x]) as char);
            }
            if y < HEIGHT - 1 {
                text.push(':');
            }
        }
        text
    }

    #[test]
    fn test_decode_smile() {
        let pixels = decode(Some(SMILE)).unwrap();
        assert_eq!(pixels.len(), WIDTH * HEIGHT);

        let lit: HashSet<(u8, u8)> = pixels
            .iter()
            .filter(|p| p.intensity() == 9)
            .map(|p| (p.x(), p.y()))
            .collect();
        assert!(lit.contains(&(5, 1)));
        assert!(lit.contains(&(11, 2)));
        assert!(lit.contains(&(4, 4)));
        assert_eq!(lit.len(), 2 + 2 + 2 + 7);
    }

    #[test]
    fn test_empty_is_single_off_pixel() {
        assert_eq!(decode(None).unwrap().as_slice(), &[PixelTriple::off()]);
        assert_eq!(decode(Some("")).unwrap().as_slice(), &[PixelTriple::off()]);
    }

    #[test]
    fn test_missing_separator_each_row() {
        for row in 0..HEIGHT - 1 {
            let mut text = std::string::String::from(SMILE);
            let pos = (row + 1) * ROW_STRIDE - 1;
            text.replace_range(pos..pos + 1, "0");
            assert_eq!(
                decode(Some(text.as_str())),
                Err(ImageError::MissingSeparator { row: row as u8 })
            );
        }
    }

    #[test]
    fn test_last_row_needs_no_separator() {
        let mut text = std::string::String::from(SMILE);
        text.push(':');
        assert!(decode(Some(text.as_str())).is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(decode(Some(&SMILE[..50])), Err(ImageError::TooShort));
        assert_eq!(
            decode(Some(&SMILE[..IMAGE_TEXT_LEN - 1])),
            Err(ImageError::TooShort)
        );
    }

    #[test]
    fn test_invalid_digit() {
        let mut text = std::string::String::from(SMILE);
        text.replace_range(2 * ROW_STRIDE + 3..2 * ROW_STRIDE + 4, "x");
        assert_eq!(
            decode(Some(text.as_str())),
            Err(ImageError::InvalidDigit { x: 3, y: 2 })
        );
    }

    #[test]
    fn test_brightness_scaling() {
        let p = |i| PixelTriple::new(0, 0, i).unwrap().brightness();
        assert_eq!(p(0), 0);
        assert_eq!(p(1), 28);
        assert_eq!(p(5), 141);
        assert_eq!(p(9), 255);
    }

    #[test]
    fn test_triple_bounds() {
        assert_eq!(PixelTriple::new(17, 0, 1), Err(ImageError::OutOfRange));
        assert_eq!(PixelTriple::new(0, 7, 1), Err(ImageError::OutOfRange));
        assert_eq!(PixelTriple::new(0, 0, 10), Err(ImageError::OutOfRange));
    }

    #[test]
    fn test_encode_smile() {
        let pixels = decode(Some(SMILE)).unwrap();
        assert_eq!(encode(&pixels).as_str(), SMILE);
    }

    proptest! {
        #[test]
        fn roundtrip_preserves_triples(intensities in proptest::collection::vec(0u8..=9, WIDTH * HEIGHT)) {
            let text = grid_text(&intensities);
            let first = decode(Some(text.as_str())).unwrap();
            let encoded = encode(&first);
            let second = decode(Some(encoded.as_str())).unwrap();

            let a: HashSet<PixelTriple> = first.iter().copied().collect();
            let b: HashSet<PixelTriple> = second.iter().copied().collect();
            prop_assert_eq!(a, b);
            prop_assert_eq!(encoded.as_str(), text.as_str());
        }

        #[test]
        fn broken_separator_never_decodes(row in 0usize..6, junk in "[0-9a-z ]") {
            let mut text = grid_text(&[0; WIDTH * HEIGHT]);
            let pos = (row + 1) * ROW_STRIDE - 1;
            text.replace_range(pos..pos + 1, &junk);
            prop_assert_eq!(
                decode(Some(text.as_str())),
                Err(ImageError::MissingSeparator { row: row as u8 })
            );
        }
    }
}
