//! Built-in 8x8 tile font
//!
//! 38 glyphs: digits `0`-`9` (tiles 0-9), letters `A`-`Z` (tiles 10-35), a
//! multiplication cross (36) and a period (37). Ink is drawn with clear bits,
//! so with the usual 1-bit palette entry 0 is the paper color and entry 1 the
//! ink color.
//!
//! The glyphs were authored one byte per column with bit 0 at the top. They
//! are transposed at compile time into [`TILE_FONT`], the row-major MSB-first
//! layout [`MonoBitmap`](crate::decode::MonoBitmap) reads.

use crate::tile::TileRegion;

/// Glyph width and height in pixels
pub const GLYPH_SIZE: u16 = 8;

/// Number of glyphs in the atlas
pub const GLYPH_COUNT: usize = 38;

/// Tile of the period glyph
pub const PERIOD: u16 = 37;

const FONT_BYTES: usize = GLYPH_COUNT * GLYPH_SIZE as usize;

#[rustfmt::skip]
const GLYPH_COLUMNS: [u8; FONT_BYTES] = [
    0xFF, 0xC3, 0x81, 0xBD, 0xBD, 0x81, 0xC3, 0xFF, // 0
    0xFF, 0xFF, 0xBB, 0x81, 0x81, 0xBF, 0xFF, 0xFF, // 1
    0xFF, 0x9B, 0x8D, 0x8D, 0xA1, 0xA1, 0xB3, 0xFF, // 2
    0xFF, 0xBD, 0xB5, 0xB5, 0x81, 0x81, 0xCB, 0xFF, // 3
    0xFF, 0xC3, 0xD9, 0xDD, 0x81, 0x81, 0xCF, 0xFF, // 4
    0xFF, 0xD1, 0xB1, 0xB5, 0x85, 0x85, 0xCF, 0xFF, // 5
    0xFF, 0xC3, 0x81, 0xB5, 0xB5, 0x85, 0xCF, 0xFF, // 6
    0xFF, 0xFD, 0x9D, 0x8D, 0x85, 0xF1, 0xF9, 0xFF, // 7
    0xFF, 0xCB, 0xB5, 0xB5, 0x81, 0x81, 0xCB, 0xFF, // 8
    0xFF, 0xF3, 0xAD, 0xAD, 0x81, 0x81, 0xC3, 0xFF, // 9
    0xFF, 0x83, 0xED, 0xED, 0x81, 0x81, 0x83, 0xFF, // A
    0xFF, 0x81, 0x81, 0xB5, 0xB5, 0x81, 0xCB, 0xFF, // B
    0xFF, 0xC3, 0x81, 0xBD, 0xBD, 0x99, 0xDB, 0xFF, // C
    0xFF, 0x81, 0xBD, 0xBD, 0x81, 0x81, 0xC3, 0xFF, // D
    0xFF, 0x81, 0x81, 0xB5, 0xB5, 0xB5, 0xBD, 0xFF, // E
    0xFF, 0x81, 0x81, 0xED, 0xED, 0xED, 0xFD, 0xFF, // F
    0xFF, 0xC3, 0x81, 0xBD, 0xAD, 0x89, 0x8B, 0xFF, // G
    0xFF, 0x81, 0xF7, 0xF7, 0xF7, 0x81, 0x81, 0xFF, // H
    0xFF, 0xFF, 0xBD, 0x81, 0x81, 0xBD, 0xFF, 0xFF, // I
    0xFF, 0xCF, 0x9D, 0x81, 0xC1, 0xFD, 0xFF, 0xFF, // J
    0xFF, 0x81, 0x81, 0xE7, 0xC3, 0x99, 0xBD, 0xFF, // K
    0xFF, 0x81, 0x81, 0xBF, 0xBF, 0xBF, 0xBF, 0xFF, // L
    0xFF, 0x81, 0xF3, 0xE7, 0xF3, 0x81, 0x81, 0xFF, // M
    0xFF, 0x81, 0xF3, 0xE7, 0xCF, 0x81, 0x81, 0xFF, // N
    0xFF, 0xC3, 0x81, 0xBD, 0xBD, 0x81, 0xC3, 0xFF, // O
    0xFF, 0x81, 0x81, 0xED, 0xED, 0xE1, 0xF3, 0xFF, // P
    0xFF, 0xC3, 0x81, 0xBD, 0xAD, 0xDD, 0xA3, 0xFF, // Q
    0xFF, 0x81, 0x81, 0xED, 0xCD, 0xA1, 0xB3, 0xFF, // R
    0xFF, 0xDB, 0xB1, 0xB5, 0x85, 0x85, 0xCF, 0xFF, // S
    0xFF, 0xFD, 0xFD, 0x81, 0x81, 0xFD, 0xFD, 0xFF, // T
    0xFF, 0xC1, 0xBF, 0xBF, 0x9F, 0x81, 0xC1, 0xFF, // U
    0xFF, 0xE1, 0xDF, 0xBF, 0x9F, 0xC1, 0xE1, 0xFF, // V
    0xFF, 0x81, 0xCF, 0xE7, 0xCF, 0x81, 0x81, 0xFF, // W
    0xFF, 0xBD, 0x99, 0xC3, 0xC3, 0x99, 0xBD, 0xFF, // X
    0xFF, 0xF9, 0xF1, 0x87, 0x87, 0xF1, 0xF9, 0xFF, // Y
    0xFF, 0x9D, 0x8D, 0x85, 0xA1, 0xB1, 0xB9, 0xFF, // Z
    0xFF, 0xBB, 0xD7, 0xEF, 0xD7, 0xBB, 0xFF, 0xFF, // cross
    0xFF, 0xFF, 0x9F, 0x9F, 0xFF, 0xFF, 0xFF, 0xFF, // .
];

/// Glyph atlas, 8 bytes per glyph, glyphs back to back
pub static TILE_FONT: [u8; FONT_BYTES] = transpose(&GLYPH_COLUMNS);

const fn transpose(columns: &[u8; FONT_BYTES]) -> [u8; FONT_BYTES] {
    let mut rows = [0u8; FONT_BYTES];
    let mut i = 0;
    while i < FONT_BYTES {
        let (glyph, col) = (i / 8, i % 8);
        let mut row = 0;
        while row < 8 {
            if (columns[i] >> row) & 1 != 0 {
                rows[glyph * 8 + row] |= 0x80 >> col;
            }
            row += 1;
        }
        i += 1;
    }
    rows
}

/// Tile holding `c`, if the font has one
///
/// Letters are case-insensitive.
///
/// ```
/// use st7735_tiles::font::glyph_for;
///
/// assert_eq!(glyph_for('7'), Some(7));
/// assert_eq!(glyph_for('b'), Some(11));
/// assert_eq!(glyph_for('?'), None);
/// ```
pub fn glyph_for(c: char) -> Option<u16> {
    match c {
        '0'..='9' => Some(c as u16 - '0' as u16),
        'a'..='z' | 'A'..='Z' => Some(10 + (c.to_ascii_uppercase() as u16 - 'A' as u16)),
        '.' => Some(PERIOD),
        _ => None,
    }
}

/// Region of glyph `tile` in [`TILE_FONT`]
pub const fn glyph_region(tile: u16) -> TileRegion {
    TileRegion::new(
        GLYPH_SIZE,
        GLYPH_SIZE,
        GLYPH_SIZE,
        GLYPH_SIZE * GLYPH_COUNT as u16,
        tile,
    )
}
