//! The fixed character set packed into every atlas.

use std::ops::RangeInclusive;

/// Printable ASCII, space through tilde.
pub const GLYPH_RANGE: RangeInclusive<u8> = b' '..=b'~';

/// Number of cells in an atlas.
pub const GLYPH_COUNT: u32 = (*GLYPH_RANGE.end() - *GLYPH_RANGE.start()) as u32 + 1;

/// Characters in atlas order (increasing code point).
pub fn glyph_set() -> impl Iterator<Item = char> {
    GLYPH_RANGE.map(char::from)
}
