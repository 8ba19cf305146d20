//! Orientation state
//!
//! The ST7735 rotates in hardware through the MADCTL register: mirroring and
//! row/column exchange bits decide how logical (x, y) coordinates land in
//! controller RAM. What the driver has to track itself is the logical size of
//! the panel and the address offsets added to every window, because the glass
//! rarely starts at controller column/row 0.
//!
//! ## Rotation Modes
//!
//! | Rotation  | MADCTL    | Size          |
//! |-----------|-----------|---------------|
//! | Rotate0   | `MX\|MY`  | native        |
//! | Rotate90  | `MY\|MV`  | swapped       |
//! | Rotate180 | none      | native        |
//! | Rotate270 | `MX\|MV`  | swapped       |
//!
//! The offsets do not follow the rotation: column addresses always get
//! `row_start` and row addresses always get `col_start`.
//!
//! ## Example
//!
//! ```
//! use st7735_tiles::{Dimensions, Rotation, rotation::Orientation};
//!
//! let dims = Dimensions::new(80, 160).unwrap();
//! let mut orientation = Orientation::new(dims, 26, 1);
//! assert_eq!((orientation.width(), orientation.height()), (80, 160));
//! assert_eq!((orientation.x_offset(), orientation.y_offset()), (1, 26));
//!
//! orientation.set_rotation(Rotation::Rotate90);
//! assert_eq!((orientation.width(), orientation.height()), (160, 80));
//! assert_eq!((orientation.x_offset(), orientation.y_offset()), (1, 26));
//! ```

use crate::command::{MADCTL_BGR, MADCTL_MV, MADCTL_MX, MADCTL_MY, MADCTL_RGB};
use crate::config::{Dimensions, Rotation};

/// Rotation-dependent mapping from logical coordinates to controller addresses
///
/// Mutated only through [`set_rotation`](Self::set_rotation); read on every
/// window open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Native (rotation 0) panel size
    native: Dimensions,
    /// Added to row addresses
    col_start: u8,
    /// Added to column addresses
    row_start: u8,
    /// Current rotation
    rotation: Rotation,
}

impl Orientation {
    /// Orientation at rotation 0
    pub fn new(native: Dimensions, col_start: u8, row_start: u8) -> Self {
        Self {
            native,
            col_start,
            row_start,
            rotation: Rotation::Rotate0,
        }
    }

    /// Switch rotation, swapping width and height between the portrait and
    /// landscape groups
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Logical width at the current rotation
    pub fn width(&self) -> u16 {
        self.dimensions().width
    }

    /// Logical height at the current rotation
    pub fn height(&self) -> u16 {
        self.dimensions().height
    }

    /// Logical dimensions at the current rotation
    pub fn dimensions(&self) -> Dimensions {
        if self.rotation.is_landscape() {
            self.native.swapped()
        } else {
            self.native
        }
    }

    /// Offset added to column addresses
    pub fn x_offset(&self) -> u16 {
        self.row_start as u16
    }

    /// Offset added to row addresses
    pub fn y_offset(&self) -> u16 {
        self.col_start as u16
    }

    /// Whether a logical point lies on the panel
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width() && y < self.height()
    }
}

/// MADCTL value for a rotation
///
/// # Example
///
/// ```
/// use st7735_tiles::{Rotation, rotation::madctl};
///
/// assert_eq!(madctl(Rotation::Rotate0, true), 0xC8);
/// assert_eq!(madctl(Rotation::Rotate180, false), 0x00);
/// ```
pub fn madctl(rotation: Rotation, bgr: bool) -> u8 {
    let order = if bgr { MADCTL_BGR } else { MADCTL_RGB };
    let bits = match rotation {
        Rotation::Rotate0 => MADCTL_MX | MADCTL_MY,
        Rotation::Rotate90 => MADCTL_MY | MADCTL_MV,
        Rotation::Rotate180 => 0,
        Rotation::Rotate270 => MADCTL_MX | MADCTL_MV,
    };
    bits | order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mini() -> Orientation {
        Orientation::new(Dimensions::new(80, 160).unwrap(), 26, 1)
    }

    #[test]
    fn test_portrait_uses_native_size() {
        let mut orientation = mini();
        for rotation in [Rotation::Rotate0, Rotation::Rotate180] {
            orientation.set_rotation(rotation);
            assert_eq!(orientation.width(), 80);
            assert_eq!(orientation.height(), 160);
        }
    }

    #[test]
    fn test_landscape_swaps_size() {
        let mut orientation = mini();
        for rotation in [Rotation::Rotate90, Rotation::Rotate270] {
            orientation.set_rotation(rotation);
            assert_eq!(orientation.width(), 160);
            assert_eq!(orientation.height(), 80);
        }
    }

    #[test]
    fn test_offsets_pair_row_start_with_columns_at_every_rotation() {
        let mut orientation = mini();
        for index in 0..4 {
            orientation.set_rotation(Rotation::from_index(index));
            assert_eq!(orientation.x_offset(), 1);
            assert_eq!(orientation.y_offset(), 26);
        }
    }

    #[test]
    fn test_contains_follows_rotation() {
        let mut orientation = mini();
        assert!(orientation.contains(79, 159));
        assert!(!orientation.contains(80, 0));
        orientation.set_rotation(Rotation::Rotate90);
        assert!(orientation.contains(159, 79));
        assert!(!orientation.contains(0, 80));
    }

    #[test]
    fn test_madctl_per_rotation() {
        assert_eq!(madctl(Rotation::Rotate0, true), 0xC8);
        assert_eq!(madctl(Rotation::Rotate90, true), 0xA8);
        assert_eq!(madctl(Rotation::Rotate180, true), 0x08);
        assert_eq!(madctl(Rotation::Rotate270, true), 0x68);
        assert_eq!(madctl(Rotation::Rotate90, false), 0xA0);
    }
}
