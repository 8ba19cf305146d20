//! Palette lookup
//!
//! Stored images carry 4-bit palette indices instead of full colors. A
//! [`Palette`] borrows a caller-owned table of up to 16 packed RGB565 colors
//! and resolves those indices during decoding.
//!
//! For 1-bit images, entry 0 is the color for set bits and entry 1 the color
//! for clear bits.

/// Largest palette the 4-bit encodings can address
pub const PALETTE_SIZE: usize = 16;

/// Borrowed index → RGB565 lookup table
///
/// ## Example
///
/// ```
/// use st7735_tiles::{color, Palette};
///
/// const COLORS: [u16; 2] = [color::BLACK, color::WHITE];
/// let palette = Palette::new(&COLORS);
/// assert_eq!(palette.color(1), color::WHITE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette<'a> {
    colors: &'a [u16],
}

impl<'a> Palette<'a> {
    /// Wrap a color table
    ///
    /// The decoders produce 4-bit indices, so only the first
    /// [`PALETTE_SIZE`] entries are reachable from a blit.
    pub const fn new(colors: &'a [u16]) -> Self {
        Self { colors }
    }

    /// Resolve an index
    ///
    /// Indices past the end of the table resolve to black; debug builds
    /// assert instead.
    #[inline]
    pub fn color(&self, index: u8) -> u16 {
        debug_assert!(
            (index as usize) < self.colors.len(),
            "palette index {index} out of range ({} colors)",
            self.colors.len()
        );
        self.colors.get(index as usize).copied().unwrap_or(0)
    }

    /// Color drawn for set bits of a 1-bit image
    pub fn foreground(&self) -> u16 {
        self.color(0)
    }

    /// Color drawn for clear bits of a 1-bit image
    pub fn background(&self) -> u16 {
        self.color(1)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, RED, WHITE};

    #[test]
    fn test_lookup() {
        let colors = [BLACK, WHITE, RED];
        let palette = Palette::new(&colors);
        assert_eq!(palette.color(0), BLACK);
        assert_eq!(palette.color(2), RED);
        assert_eq!(palette.foreground(), BLACK);
        assert_eq!(palette.background(), WHITE);
        assert_eq!(palette.len(), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "palette index 5 out of range")]
    fn test_out_of_range_index_asserts_in_debug() {
        let colors = [BLACK, WHITE];
        let _ = Palette::new(&colors).color(5);
    }
}
