//! Tile geometry
//!
//! Fonts and sprite sheets are stored as one larger image (an atlas) cut into
//! equally sized tiles. Tiles are numbered row-major across the atlas: tile
//! `n` starts `n * width` pixels into the atlas, wrapping to the next band of
//! `height` rows whenever it passes the atlas width.
//!
//! [`source_index`] maps a destination pixel of a tile to the byte that holds
//! it in the atlas, with optional mirroring. Decoders still emit pixels in
//! panel scan order (top row first, left pixel first); flips only change
//! where each pixel is read from.
//!
//! ## Example
//!
//! ```
//! use st7735_tiles::{Flip, TileRegion, tile::source_index};
//!
//! // 4x2 atlas holding two 2x2 tiles side by side
//! let region = TileRegion::new(2, 2, 4, 2, 1);
//! assert_eq!(region.base_offset(), 2);
//! assert_eq!(source_index(&region, 0, 0, Flip::NONE), 2);
//! assert_eq!(source_index(&region, 1, 1, Flip::NONE), 7);
//! assert_eq!(source_index(&region, 0, 0, Flip::HORIZONTAL), 3);
//! ```

/// Mirroring applied while reading a tile
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Flip {
    /// Mirror left/right
    pub horizontal: bool,
    /// Mirror top/bottom
    pub vertical: bool,
}

impl Flip {
    /// Upright
    pub const NONE: Self = Self::new(false, false);
    /// Mirrored left/right
    pub const HORIZONTAL: Self = Self::new(true, false);
    /// Mirrored top/bottom
    pub const VERTICAL: Self = Self::new(false, true);
    /// Rotated 180 degrees
    pub const BOTH: Self = Self::new(true, true);

    /// Build from the two flags
    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Whether any mirroring is requested
    pub const fn any(self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Width and height of a rectangle, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Extent {
    /// Create an extent
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered
    pub const fn area(self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Whether the extent covers no pixels
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A tile within a larger image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRegion {
    /// Tile width in pixels
    pub width: u16,
    /// Tile height in pixels
    pub height: u16,
    /// Width of the whole atlas in pixels
    pub image_width: u16,
    /// Height of the whole atlas in pixels
    pub image_height: u16,
    /// Tile identifier, row-major across the atlas
    pub tile: u16,
}

impl TileRegion {
    /// Tile `tile` of size `width`x`height` in an `image_width`x`image_height` atlas
    pub const fn new(
        width: u16,
        height: u16,
        image_width: u16,
        image_height: u16,
        tile: u16,
    ) -> Self {
        Self {
            width,
            height,
            image_width,
            image_height,
            tile,
        }
    }

    /// A standalone image: one tile covering the whole atlas
    pub const fn standalone(width: u16, height: u16) -> Self {
        Self::new(width, height, width, height, 0)
    }

    /// Tile size
    pub const fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Row stride of the atlas (never zero)
    pub fn stride(&self) -> usize {
        self.image_width.max(1) as usize
    }

    /// Offset of the tile's top-left pixel in the atlas
    pub fn base_offset(&self) -> usize {
        let start = self.tile as usize * self.width as usize;
        let stride = self.stride();
        let band = start / stride;
        start % stride + band * self.height as usize * stride
    }
}

/// Atlas offset of destination pixel (`row`, `col`) of a tile
///
/// `row` and `col` are tile-local and must lie inside the tile. With
/// `flip.horizontal` the column is read from the right edge; with
/// `flip.vertical` the row is read from the bottom edge.
#[inline]
pub fn source_index(region: &TileRegion, row: u16, col: u16, flip: Flip) -> usize {
    debug_assert!(row < region.height && col < region.width);
    let src_col = if flip.horizontal {
        region.width - 1 - col
    } else {
        col
    };
    let src_row = if flip.vertical {
        region.height - 1 - row
    } else {
        row
    };
    region.base_offset() + src_row as usize * region.stride() + src_col as usize
}
