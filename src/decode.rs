//! Stored image decoders
//!
//! Three encodings are supported, all borrowed and read-only:
//!
//! | Decoder          | Storage                                              |
//! |------------------|------------------------------------------------------|
//! | [`MonoBitmap`]   | 1 bit per pixel, `ceil(w/8)` bytes per row, MSB first |
//! | [`IndexedImage`] | 1 byte per pixel holding a palette index              |
//! | [`RleImage`]     | `(index << 4) \| (run - 1)` tokens plus an offset table |
//!
//! Every decoder emits exactly `visible.width * visible.height` pixels into a
//! [`PixelSink`] in panel scan order. `visible` is the part of the tile left
//! after clipping; it never exceeds the tile size.
//!
//! Malformed data never fails: reads past the end resolve to palette index 0
//! and an RLE stream that runs out early simply stops.

use crate::palette::Palette;
use crate::tile::{Extent, Flip, TileRegion, source_index};
use crate::window::PixelSink;

/// A stored image that can be streamed into a [`PixelSink`]
pub trait Decoder {
    /// Stream the visible part of `region` into `sink`
    fn decode<S: PixelSink>(
        &self,
        region: &TileRegion,
        visible: Extent,
        flip: Flip,
        palette: &Palette<'_>,
        sink: &mut S,
    ) -> Result<(), S::Error>;
}

/// 1-bit packed image
///
/// Set bits draw [`Palette::foreground`], clear bits [`Palette::background`].
/// Tiles are stored back to back, `ceil(w/8) * h` bytes each, so the atlas
/// width is not used. Flips are not supported and are ignored.
#[derive(Clone, Copy, Debug)]
pub struct MonoBitmap<'a> {
    data: &'a [u8],
}

impl<'a> MonoBitmap<'a> {
    /// Wrap packed bitmap data
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Bytes per packed row of a `width` pixel wide tile
    pub const fn row_bytes(width: u16) -> usize {
        (width as usize).div_ceil(8)
    }

    fn bit(&self, region: &TileRegion, row: u16, col: u16) -> bool {
        let row_bytes = Self::row_bytes(region.width);
        let tile_bytes = row_bytes * region.height as usize;
        let index = region.tile as usize * tile_bytes + row as usize * row_bytes + col as usize / 8;
        debug_assert!(index < self.data.len(), "bitmap read past end");
        let byte = self.data.get(index).copied().unwrap_or(0);
        byte & (0x80 >> (col % 8)) != 0
    }
}

impl Decoder for MonoBitmap<'_> {
    fn decode<S: PixelSink>(
        &self,
        region: &TileRegion,
        visible: Extent,
        _flip: Flip,
        palette: &Palette<'_>,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        let (set, clear) = (palette.foreground(), palette.background());
        for row in 0..visible.height {
            for col in 0..visible.width {
                let color = if self.bit(region, row, col) { set } else { clear };
                sink.write_pixel(color)?;
            }
        }
        Ok(())
    }
}

/// Uncompressed image with one palette index per byte
///
/// Rows span the full atlas width; tiles are located with
/// [`TileRegion::base_offset`] and read through [`source_index`], which
/// applies the flips.
#[derive(Clone, Copy, Debug)]
pub struct IndexedImage<'a> {
    data: &'a [u8],
}

impl<'a> IndexedImage<'a> {
    /// Wrap index data
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl Decoder for IndexedImage<'_> {
    fn decode<S: PixelSink>(
        &self,
        region: &TileRegion,
        visible: Extent,
        flip: Flip,
        palette: &Palette<'_>,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        for row in 0..visible.height {
            for col in 0..visible.width {
                let index = source_index(region, row, col, flip);
                debug_assert!(index < self.data.len(), "indexed read past end");
                // low nibble only; indices are 4-bit
                let entry = self.data.get(index).copied().unwrap_or(0) & 0x0F;
                sink.write_pixel(palette.color(entry))?;
            }
        }
        Ok(())
    }
}

/// Tile offset table of an RLE blob
///
/// Raw big-endian `u16` words: word 0 is the tile count, words `1..=count`
/// are the byte offsets where each tile's tokens start.
#[derive(Clone, Copy, Debug)]
pub struct TileOffsets<'a> {
    raw: &'a [u8],
}

impl<'a> TileOffsets<'a> {
    /// Wrap a raw table
    pub const fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    fn word(&self, index: usize) -> u16 {
        match self.raw.get(index * 2..index * 2 + 2) {
            Some(&[hi, lo]) => u16::from_be_bytes([hi, lo]),
            _ => 0,
        }
    }

    /// Number of tiles the table describes
    pub fn count(&self) -> u16 {
        self.word(0)
    }

    /// Start of `tile` in the blob
    ///
    /// Unknown tiles start at offset 0.
    pub fn offset(&self, tile: u16) -> u16 {
        if tile < self.count() {
            self.word(tile as usize + 1)
        } else {
            0
        }
    }
}

/// Run-length encoded 4-bit image
///
/// Each token byte is `(index << 4) | (run - 1)`. Decoding walks the tile
/// row-major and stops once `w * h` pixels are covered or the blob ends; a
/// run that overshoots the tile is cut short. Pixels outside the visible
/// extent are walked without being emitted.
///
/// ## Example
///
/// ```
/// use st7735_tiles::{Extent, Flip, Palette, TileRegion};
/// use st7735_tiles::decode::{Decoder, RleImage, TileOffsets};
/// use st7735_tiles::window::PixelSink;
///
/// struct Collect(Vec<u16>);
///
/// impl PixelSink for Collect {
///     type Error = core::convert::Infallible;
///     fn write_pixel(&mut self, color: u16) -> Result<(), Self::Error> {
///         self.0.push(color);
///         Ok(())
///     }
/// }
///
/// // one tile at offset 0: four pixels of index 0
/// let offsets = [0x00, 0x01, 0x00, 0x00];
/// let image = RleImage::new(&[0x03, 0x10], TileOffsets::new(&offsets));
/// let colors = [0x1111, 0x2222];
/// let region = TileRegion::standalone(4, 1);
///
/// let mut out = Collect(Vec::new());
/// image
///     .decode(&region, region.extent(), Flip::NONE, &Palette::new(&colors), &mut out)
///     .unwrap();
/// assert_eq!(out.0, [0x1111; 4]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RleImage<'a> {
    data: &'a [u8],
    offsets: TileOffsets<'a>,
}

impl<'a> RleImage<'a> {
    /// Wrap a token blob and its offset table
    pub const fn new(data: &'a [u8], offsets: TileOffsets<'a>) -> Self {
        Self { data, offsets }
    }

    /// The offset table
    pub fn offsets(&self) -> TileOffsets<'a> {
        self.offsets
    }
}

impl Decoder for RleImage<'_> {
    fn decode<S: PixelSink>(
        &self,
        region: &TileRegion,
        visible: Extent,
        flip: Flip,
        palette: &Palette<'_>,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        if flip.any() {
            log::debug!("flip requested for RLE tile {}, drawing upright", region.tile);
        }

        let total = region.extent().area();
        let width = region.width as u32;
        let clipped = visible != region.extent();
        let mut cursor = self.offsets.offset(region.tile) as usize;
        let mut walked = 0u32;

        while walked < total {
            let Some(&token) = self.data.get(cursor) else {
                break;
            };
            cursor += 1;

            let color = palette.color(token >> 4);
            let run = ((token & 0x0F) as u32 + 1).min(total - walked);

            if !clipped {
                sink.write_repeated(color, run)?;
                walked += run;
                continue;
            }

            for _ in 0..run {
                let (row, col) = (walked / width, walked % width);
                if row < visible.height as u32 && col < visible.width as u32 {
                    sink.write_pixel(color)?;
                }
                walked += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const BW: [u16; 2] = [0x0000, 0xFFFF];

    fn decode_all<D: Decoder>(
        decoder: &D,
        region: TileRegion,
        flip: Flip,
        colors: &[u16],
    ) -> Vec<u16> {
        decode_visible(decoder, region, region.extent(), flip, colors)
    }

    fn decode_visible<D: Decoder>(
        decoder: &D,
        region: TileRegion,
        visible: Extent,
        flip: Flip,
        colors: &[u16],
    ) -> Vec<u16> {
        let mut out = Vec::new();
        let palette = Palette::new(colors);
        decoder
            .decode(&region, visible, flip, &palette, &mut out)
            .unwrap();
        out
    }

    #[test]
    fn test_mono_set_bits_use_entry_zero() {
        let bitmap = MonoBitmap::new(&[0b1010_0000, 0b0101_0000]);
        let out = decode_all(&bitmap, TileRegion::standalone(4, 2), Flip::NONE, &[7, 9]);
        assert_eq!(out, [7, 9, 7, 9, 9, 7, 9, 7]);
    }

    #[test]
    fn test_mono_rows_pad_to_whole_bytes() {
        // 10 px wide: two bytes per row
        let bitmap = MonoBitmap::new(&[0xFF, 0xC0, 0x00, 0x40]);
        let out = decode_all(&bitmap, TileRegion::standalone(10, 2), Flip::NONE, &[1, 0]);
        assert_eq!(&out[..10], &[1; 10]);
        assert_eq!(&out[10..], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_mono_tiles_are_consecutive_and_ignore_flip() {
        let glyphs = [0x80, 0x00, 0x00, 0x80];
        let bitmap = MonoBitmap::new(&glyphs);
        let region = TileRegion::new(2, 2, 4, 2, 1);
        let upright = decode_all(&bitmap, region, Flip::NONE, &BW);
        assert_eq!(upright, [0xFFFF, 0xFFFF, 0x0000, 0xFFFF]);
        assert_eq!(decode_all(&bitmap, region, Flip::BOTH, &BW), upright);
    }

    #[test]
    fn test_indexed_two_by_two() {
        let image = IndexedImage::new(&[1, 0, 0, 1]);
        let out = decode_all(&image, TileRegion::standalone(2, 2), Flip::NONE, &BW);
        assert_eq!(out, [0xFFFF, 0x0000, 0x0000, 0xFFFF]);
    }

    #[test]
    fn test_indexed_reads_low_nibble_only() {
        let colors: Vec<u16> = (0..16).collect();
        let image = IndexedImage::new(&[0x13, 0xF0, 0x2F]);
        let out = decode_all(&image, TileRegion::standalone(3, 1), Flip::NONE, &colors);
        assert_eq!(out, [3, 0, 15]);
    }

    #[test]
    fn test_indexed_tile_in_atlas_with_flips() {
        // 4x2 atlas, two 2x2 tiles: [0 1 | 2 3] / [4 5 | 6 7]
        let atlas = [0, 1, 2, 3, 4, 5, 6, 7];
        let colors: Vec<u16> = (0..8).collect();
        let image = IndexedImage::new(&atlas);
        let region = TileRegion::new(2, 2, 4, 2, 1);

        assert_eq!(decode_all(&image, region, Flip::NONE, &colors), [2, 3, 6, 7]);
        assert_eq!(decode_all(&image, region, Flip::HORIZONTAL, &colors), [3, 2, 7, 6]);
        assert_eq!(decode_all(&image, region, Flip::VERTICAL, &colors), [6, 7, 2, 3]);
        assert_eq!(decode_all(&image, region, Flip::BOTH, &colors), [7, 6, 3, 2]);
    }

    #[test]
    fn test_indexed_clipped_emits_visible_only() {
        let atlas = [0, 1, 2, 3, 4, 5];
        let colors: Vec<u16> = (0..6).collect();
        let image = IndexedImage::new(&atlas);
        let region = TileRegion::standalone(3, 2);
        let out = decode_visible(&image, region, Extent::new(2, 1), Flip::NONE, &colors);
        assert_eq!(out, [0, 1]);
    }

    #[test]
    fn test_offsets_table() {
        let raw = [0x00, 0x02, 0x00, 0x00, 0x01, 0x04];
        let offsets = TileOffsets::new(&raw);
        assert_eq!(offsets.count(), 2);
        assert_eq!(offsets.offset(0), 0);
        assert_eq!(offsets.offset(1), 0x104);
        assert_eq!(offsets.offset(2), 0);
        assert_eq!(TileOffsets::new(&[]).count(), 0);
    }

    #[test]
    fn test_rle_stops_when_tile_is_full() {
        let offsets = [0x00, 0x01, 0x00, 0x00];
        let image = RleImage::new(&[0x03, 0x10], TileOffsets::new(&offsets));
        let out = decode_all(&image, TileRegion::standalone(4, 1), Flip::NONE, &[0xAAAA, 0xBBBB]);
        assert_eq!(out, [0xAAAA; 4]);
    }

    #[test]
    fn test_rle_uses_tile_offset() {
        let offsets = [0x00, 0x02, 0x00, 0x00, 0x00, 0x01];
        let image = RleImage::new(&[0x01, 0x11], TileOffsets::new(&offsets));
        let region = TileRegion::new(2, 1, 4, 1, 1);
        assert_eq!(decode_all(&image, region, Flip::NONE, &[5, 6]), [6, 6]);
    }

    #[test]
    fn test_rle_under_run_stops_at_end_of_data() {
        let offsets = [0x00, 0x01, 0x00, 0x00];
        let image = RleImage::new(&[0x12], TileOffsets::new(&offsets));
        let out = decode_all(&image, TileRegion::standalone(4, 2), Flip::NONE, &BW);
        assert_eq!(out, [0xFFFF; 3]);
    }

    #[test]
    fn test_rle_overshooting_run_is_cut() {
        let offsets = [0x00, 0x01, 0x00, 0x00];
        let image = RleImage::new(&[0x0F], TileOffsets::new(&offsets));
        let out = decode_all(&image, TileRegion::standalone(3, 1), Flip::NONE, &BW);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_rle_clipping_walks_hidden_pixels() {
        // 3x2 tile: row 0 = 0 0 1, row 1 = 1 1 0
        let offsets = [0x00, 0x01, 0x00, 0x00];
        let image = RleImage::new(&[0x01, 0x12, 0x00], TileOffsets::new(&offsets));
        let region = TileRegion::standalone(3, 2);
        let out = decode_visible(&image, region, Extent::new(2, 2), Flip::NONE, &[10, 11]);
        assert_eq!(out, [10, 10, 11, 11]);
    }

    #[test]
    fn test_rle_ignores_flip() {
        let offsets = [0x00, 0x01, 0x00, 0x00];
        let image = RleImage::new(&[0x00, 0x12], TileOffsets::new(&offsets));
        let region = TileRegion::standalone(2, 2);
        let upright = decode_all(&image, region, Flip::NONE, &BW);
        assert_eq!(upright, [0x0000, 0xFFFF, 0xFFFF, 0xFFFF]);
        for flip in [Flip::HORIZONTAL, Flip::VERTICAL, Flip::BOTH] {
            assert_eq!(decode_all(&image, region, flip, &BW), upright);
        }
    }
}
