//! Preset icons
//!
//! Each icon is 17 column bytes ready for
//! [`FrameBuffer::draw_columns`](crate::FrameBuffer::draw_columns) or
//! [`ShowValue::Columns`](crate::ShowValue::Columns).

use crate::scroll::Columns;

/// Cross
pub const NO: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x41, 0x22, 0x14, 0x08,
    0x14, 0x22, 0x41, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Small square outline
pub const SQUARE: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x22, 0x22,
    0x22, 0x3E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Border around the whole matrix
pub const RECTANGLE: Columns = [
    0xFF, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0xFF,
];

/// Diamond outline
pub const RHOMBUS: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x14, 0x22, 0x41,
    0x22, 0x14, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Filled diamond with hollow centre
pub const TARGET: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x1C, 0x36, 0x63,
    0x36, 0x1C, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Alternating pixels
pub const CHESSBOARD: Columns = [
    0x2A, 0x55, 0x2A, 0x55, 0x2A, 0x55, 0x2A, 0x55, 0x2A,
    0x55, 0x2A, 0x55, 0x2A, 0x55, 0x2A, 0x55, 0x2A,
];

/// Smiling face
pub const HAPPY: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x10, 0x20, 0x46, 0x40, 0x40,
    0x40, 0x46, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00,
];

/// Frowning face
pub const SAD: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x40, 0x22, 0x12, 0x10, 0x10,
    0x10, 0x12, 0x22, 0x40, 0x00, 0x00, 0x00, 0x00,
];

/// Tick
pub const YES: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x10, 0x20,
    0x10, 0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00,
];

/// Heart
pub const HEART: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x1F, 0x3F, 0x7E,
    0x3F, 0x1F, 0x0E, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Triangle outline
pub const TRIANGLE: Columns = [
    0x00, 0x00, 0x40, 0x60, 0x50, 0x48, 0x44, 0x42, 0x41,
    0x42, 0x44, 0x48, 0x50, 0x60, 0x40, 0x00, 0x00,
];

/// Squinting frown
pub const CHAGRIN: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x22, 0x14, 0x08, 0x40, 0x40,
    0x40, 0x08, 0x14, 0x22, 0x00, 0x00, 0x00, 0x00,
];

/// Wide smile
pub const SMILING_FACE: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x36, 0x50, 0x50,
    0x50, 0x36, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Crying face
pub const CRY: Columns = [
    0x60, 0x70, 0x70, 0x38, 0x02, 0x02, 0x64, 0x50, 0x50,
    0x50, 0x64, 0x02, 0x02, 0x38, 0x70, 0x70, 0x60,
];

/// Downcast face
pub const DOWNCAST: Columns = [
    0x00, 0x00, 0x00, 0x02, 0x0A, 0x11, 0x08, 0x40, 0x40,
    0x40, 0x08, 0x11, 0x0A, 0x02, 0x00, 0x00, 0x00,
];

/// Eyes looking right
pub const LOOK_RIGHT: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x26, 0x2F,
    0x06, 0x00, 0x06, 0x0F, 0x06, 0x00, 0x00, 0x00,
];

/// Eyes looking left
pub const LOOK_LEFT: Columns = [
    0x00, 0x00, 0x00, 0x06, 0x0F, 0x06, 0x00, 0x06, 0x2F,
    0x26, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Tongue out
pub const TONGUE: Columns = [
    0x00, 0x00, 0x00, 0x00, 0x04, 0x12, 0x14, 0x70, 0x70,
    0x70, 0x16, 0x16, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Peeking right
pub const PEEK_RIGHT: Columns = [
    0x00, 0x00, 0x04, 0x04, 0x04, 0x0C, 0x0C, 0x40, 0x40,
    0x40, 0x04, 0x04, 0x04, 0x0C, 0x0C, 0x00, 0x00,
];

/// Peeking left
pub const PEEK_LEFT: Columns = [
    0x00, 0x00, 0x0C, 0x0C, 0x04, 0x04, 0x04, 0x40, 0x40,
    0x40, 0x0C, 0x0C, 0x04, 0x04, 0x04, 0x00, 0x00,
];

/// Teary eyes
pub const TEAR_EYES: Columns = [
    0x00, 0x00, 0x00, 0x06, 0x7F, 0x06, 0x20, 0x40, 0x40,
    0x40, 0x20, 0x06, 0x7F, 0x06, 0x00, 0x00, 0x00,
];

/// Proud face
pub const PROUD: Columns = [
    0x01, 0x07, 0x0F, 0x0F, 0x0F, 0x0F, 0x47, 0x41, 0x41,
    0x41, 0x27, 0x0F, 0x0F, 0x0F, 0x0F, 0x07, 0x01,
];

/// Sneer to the left
pub const SNEER_LEFT: Columns = [
    0x00, 0x00, 0x00, 0x0C, 0x08, 0x0C, 0x2C, 0x40, 0x40,
    0x40, 0x2C, 0x08, 0x0C, 0x0C, 0x00, 0x00, 0x00,
];

/// Sneer to the right
pub const SNEER_RIGHT: Columns = [
    0x00, 0x00, 0x00, 0x0C, 0x0C, 0x08, 0x2C, 0x40, 0x40,
    0x40, 0x2C, 0x0C, 0x08, 0x0C, 0x00, 0x00, 0x00,
];

/// Raised eyebrows
pub const SUPERCILIOUS_LOOK: Columns = [
    0x00, 0x00, 0x00, 0x0E, 0x0C, 0x0E, 0x00, 0x20, 0x20,
    0x20, 0x00, 0x0E, 0x0C, 0x0E, 0x00, 0x00, 0x00,
];

/// Excited face
pub const EXCITED: Columns = [
    0x60, 0x70, 0x70, 0x3E, 0x01, 0x06, 0x30, 0x50, 0x50,
    0x50, 0x30, 0x06, 0x01, 0x3E, 0x70, 0x70, 0x60,
];

/// Every preset with its name, in declaration order
pub static ALL: [(&str, &Columns); 26] = [
    ("NO", &NO),
    ("SQUARE", &SQUARE),
    ("RECTANGLE", &RECTANGLE),
    ("RHOMBUS", &RHOMBUS),
    ("TARGET", &TARGET),
    ("CHESSBOARD", &CHESSBOARD),
    ("HAPPY", &HAPPY),
    ("SAD", &SAD),
    ("YES", &YES),
    ("HEART", &HEART),
    ("TRIANGLE", &TRIANGLE),
    ("CHAGRIN", &CHAGRIN),
    ("SMILING_FACE", &SMILING_FACE),
    ("CRY", &CRY),
    ("DOWNCAST", &DOWNCAST),
    ("LOOK_RIGHT", &LOOK_RIGHT),
    ("LOOK_LEFT", &LOOK_LEFT),
    ("TONGUE", &TONGUE),
    ("PEEK_RIGHT", &PEEK_RIGHT),
    ("PEEK_LEFT", &PEEK_LEFT),
    ("TEAR_EYES", &TEAR_EYES),
    ("PROUD", &PROUD),
    ("SNEER_LEFT", &SNEER_LEFT),
    ("SNEER_RIGHT", &SNEER_RIGHT),
    ("SUPERCILIOUS_LOOK", &SUPERCILIOUS_LOOK),
    ("EXCITED", &EXCITED),
];

/// Look up a preset by name (case-sensitive, e.g. `"HEART"`)
pub fn by_name(name: &str) -> Option<&'static Columns> {
    ALL.iter().find(|(n, _)| *n == name).map(|(_, cols)| *cols)
}
