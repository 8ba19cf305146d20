//! Packed RGB565 colors
//!
//! The ST7735 is configured for 16-bit color (`COLMOD = 0x05`): 5 bits red,
//! 6 bits green, 5 bits blue, sent high byte first.
//!
//! | Bits   | 15..11 | 10..5 | 4..0 |
//! |--------|--------|-------|------|
//! | Field  | red    | green | blue |
//!
//! ## Example
//!
//! ```
//! use st7735_tiles::color::{self, color565};
//!
//! assert_eq!(color565(255, 0, 0), color::RED);
//! assert_eq!(color565(255, 255, 255), color::WHITE);
//! ```

/// Black
pub const BLACK: u16 = 0x0000;
/// Blue
pub const BLUE: u16 = 0x001F;
/// Red
pub const RED: u16 = 0xF800;
/// Green
pub const GREEN: u16 = 0x07E0;
/// Cyan
pub const CYAN: u16 = 0x07FF;
/// Magenta
pub const MAGENTA: u16 = 0xF81F;
/// Yellow
pub const YELLOW: u16 = 0xFFE0;
/// White
pub const WHITE: u16 = 0xFFFF;

/// Pack 8-bit channels into RGB565, dropping the low bits
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Exchange the red and blue fields
///
/// For palettes authored for RGB panels shown on a BGR panel (or the reverse)
/// when MADCTL cannot be changed.
pub const fn swap_red_blue(color: u16) -> u16 {
    (color << 11) | (color & 0x07E0) | (color >> 11)
}
