//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{INVOFF, INVON, MADCTL};
use crate::config::{Config, Dimensions, Rotation};
use crate::decode::{Decoder, MonoBitmap};
use crate::error::Error;
use crate::font::{self, GLYPH_COUNT, GLYPH_SIZE, TILE_FONT, glyph_for};
use crate::init;
use crate::interface::DisplayInterface;
use crate::palette::Palette;
use crate::rotation::{Orientation, madctl};
use crate::tile::{Extent, Flip, TileRegion};
use crate::window::{self, PixelSink, Window};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Drawing capabilities of a panel
///
/// Everything above the driver (generic shapes, text layout) is written
/// against this trait rather than against [`Display`] directly. Coordinates
/// are logical, at the current rotation. Requests that start off the panel
/// are ignored; requests that run past an edge are clipped.
pub trait PanelDriver {
    /// Error raised by the transport
    type Error;

    /// Logical width in pixels
    fn width(&self) -> u16;

    /// Logical height in pixels
    fn height(&self) -> u16;

    /// Set one pixel
    fn draw_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), Self::Error>;

    /// Fill a rectangle with one color
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: u16,
    ) -> Result<(), Self::Error>;

    /// Horizontal line `w` pixels long
    fn draw_fast_hline(&mut self, x: u16, y: u16, w: u16, color: u16) -> Result<(), Self::Error>;

    /// Vertical line `h` pixels long
    fn draw_fast_vline(&mut self, x: u16, y: u16, h: u16, color: u16) -> Result<(), Self::Error>;

    /// Fill the whole panel
    fn fill_screen(&mut self, color: u16) -> Result<(), Self::Error>;

    /// Draw a tile of a stored image with its top-left corner at (`x`, `y`)
    fn blit<D: Decoder>(
        &mut self,
        x: u16,
        y: u16,
        region: &TileRegion,
        source: &D,
        palette: &Palette<'_>,
        flip: Flip,
    ) -> Result<(), Self::Error>;
}

/// Core display driver for ST7735
///
/// Owns the transport and the orientation state. Every drawing operation is
/// synchronous: it returns once the last byte has been handed to the
/// [`DisplayInterface`].
///
/// ## Example
///
/// ```rust,no_run
/// use st7735_tiles::{Builder, Dimensions, Display, Flip, Interface, Palette, TileRegion};
/// use st7735_tiles::decode::IndexedImage;
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let interface = Interface::new(MockSpi, MockPin, MockPin);
/// let Ok(dims) = Dimensions::new(128, 128) else { return };
/// let Ok(config) = Builder::new().dimensions(dims).build() else { return };
/// let mut display = Display::new(interface, config);
/// let _ = display.init(&mut delay);
///
/// // 4x4 sprite sheet holding four 2x2 tiles
/// const SHEET: [u8; 16] = [0, 1, 2, 3, 1, 0, 3, 2, 2, 2, 3, 3, 2, 2, 3, 3];
/// const COLORS: [u16; 4] = [0x0000, 0xFFFF, 0xF800, 0x07E0];
/// let region = TileRegion::new(2, 2, 4, 4, 1);
/// let _ = display.blit(
///     10,
///     20,
///     &region,
///     &IndexedImage::new(&SHEET),
///     &Palette::new(&COLORS),
///     Flip::HORIZONTAL,
/// );
/// ```
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Current rotation and address offsets
    orientation: Orientation,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`init`](Self::init).
    pub fn new(interface: I, config: Config) -> Self {
        let mut orientation =
            Orientation::new(config.dimensions, config.col_start, config.row_start);
        orientation.set_rotation(config.rotation);
        Self {
            interface,
            config,
            orientation,
        }
    }

    /// Hardware reset, vendor init tables, then the configured rotation
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "init {}x{} {:?}",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.variant
        );
        self.interface.reset(delay);
        init::run(&mut self.interface, delay, self.config.variant).map_err(Error::Interface)?;
        self.set_rotation(self.config.rotation)
    }

    /// Rotate the panel
    ///
    /// Writes MADCTL and switches the logical size.
    /// Use [`Rotation::from_index`] to convert a raw `0..=3` value.
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        let value = madctl(rotation, self.config.bgr);
        log::debug!("rotation {:?}, MADCTL {:#04x}", rotation, value);
        self.send_command(MADCTL)?;
        self.send_data(&[value])?;
        self.orientation.set_rotation(rotation);
        Ok(())
    }

    /// Invert all colors on the panel
    pub fn invert(&mut self, invert: bool) -> DisplayResult<I> {
        self.send_command(if invert { INVON } else { INVOFF })
    }

    /// Program the addressing window `(x0, y0)..=(x1, y1)` and open a pixel
    /// stream into it
    ///
    /// Coordinates are not checked; the caller clips them to the panel.
    /// The display stays borrowed until the window is closed or dropped.
    pub fn open_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<Window<'_, I>, Error<I>> {
        window::open(&mut self.interface, &self.orientation, x0, y0, x1, y1)
    }

    /// Draw a tile of a stored image with its top-left corner at (`x`, `y`)
    ///
    /// A tile whose corner lies off the panel, or that has no area, draws
    /// nothing. A tile running past the right or bottom edge is cut at the
    /// edge.
    pub fn blit<D: Decoder>(
        &mut self,
        x: u16,
        y: u16,
        region: &TileRegion,
        source: &D,
        palette: &Palette<'_>,
        flip: Flip,
    ) -> DisplayResult<I> {
        let Some(visible) = self.clip(x, y, region.width, region.height) else {
            return Ok(());
        };
        log::trace!(
            "blit tile {} at ({x},{y}), {}x{} visible",
            region.tile,
            visible.width,
            visible.height
        );

        let mut window = self.open_area(x, y, visible)?;
        source.decode(region, visible, flip, palette, &mut window)?;
        window.close()
    }

    /// Set one pixel
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: u16) -> DisplayResult<I> {
        self.fill_rect(x, y, 1, 1, color)
    }

    /// Fill a rectangle with one color, clipped to the panel
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u16) -> DisplayResult<I> {
        let Some(visible) = self.clip(x, y, w, h) else {
            return Ok(());
        };
        let mut window = self.open_area(x, y, visible)?;
        window.write_repeated(color, visible.area())?;
        window.close()
    }

    /// Fill the whole panel
    pub fn fill_screen(&mut self, color: u16) -> DisplayResult<I> {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0, 0, w, h, color)
    }

    /// Horizontal line `w` pixels long
    pub fn draw_fast_hline(&mut self, x: u16, y: u16, w: u16, color: u16) -> DisplayResult<I> {
        self.fill_rect(x, y, w, 1, color)
    }

    /// Vertical line `h` pixels long
    pub fn draw_fast_vline(&mut self, x: u16, y: u16, h: u16, color: u16) -> DisplayResult<I> {
        self.fill_rect(x, y, 1, h, color)
    }

    /// Draw a standalone 1-bit bitmap
    ///
    /// Set bits are drawn in `fg`, clear bits in `bg`. Rows are
    /// `ceil(w / 8)` bytes, MSB first.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        bitmap: &[u8],
        w: u16,
        h: u16,
        fg: u16,
        bg: u16,
    ) -> DisplayResult<I> {
        let colors = [fg, bg];
        self.blit(
            x,
            y,
            &TileRegion::standalone(w, h),
            &MonoBitmap::new(bitmap),
            &Palette::new(&colors),
            Flip::NONE,
        )
    }

    /// Draw glyph `tile` of the built-in font
    ///
    /// Set bits take palette entry 0, clear bits (the ink) entry 1.
    pub fn draw_glyph(
        &mut self,
        x: u16,
        y: u16,
        tile: u16,
        palette: &Palette<'_>,
    ) -> DisplayResult<I> {
        debug_assert!((tile as usize) < GLYPH_COUNT, "no glyph {tile}");
        if tile as usize >= GLYPH_COUNT {
            return Ok(());
        }
        self.blit(
            x,
            y,
            &font::glyph_region(tile),
            &MonoBitmap::new(&TILE_FONT),
            palette,
            Flip::NONE,
        )
    }

    /// Draw a line of text with the built-in font
    ///
    /// Each character takes an 8 pixel cell. Characters without a glyph
    /// leave the cell filled with palette entry 0. Drawing stops at the
    /// right edge of the panel.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        palette: &Palette<'_>,
    ) -> DisplayResult<I> {
        let mut cursor = x;
        for c in text.chars() {
            if cursor >= self.width() {
                break;
            }
            match glyph_for(c) {
                Some(tile) => self.draw_glyph(cursor, y, tile, palette)?,
                None => self.fill_rect(cursor, y, GLYPH_SIZE, GLYPH_SIZE, palette.foreground())?,
            }
            cursor = cursor.saturating_add(GLYPH_SIZE);
        }
        Ok(())
    }

    /// Logical width at the current rotation
    pub fn width(&self) -> u16 {
        self.orientation.width()
    }

    /// Logical height at the current rotation
    pub fn height(&self) -> u16 {
        self.orientation.height()
    }

    /// Logical dimensions at the current rotation
    pub fn dimensions(&self) -> Dimensions {
        self.orientation.dimensions()
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.orientation.rotation()
    }

    /// Get the orientation state
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Get the display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Visible part of a `w`x`h` rectangle at (`x`, `y`)
    fn clip(&self, x: u16, y: u16, w: u16, h: u16) -> Option<Extent> {
        if !self.orientation.contains(x, y) || w == 0 || h == 0 {
            return None;
        }
        let visible = Extent::new(w.min(self.width() - x), h.min(self.height() - y));
        debug_assert!(x + visible.width <= self.width() && y + visible.height <= self.height());
        Some(visible)
    }

    fn open_area(&mut self, x: u16, y: u16, area: Extent) -> Result<Window<'_, I>, Error<I>> {
        self.open_window(x, y, x + area.width - 1, y + area.height - 1)
    }

    /// Send command via interface
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data via interface
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

impl<I> PanelDriver for Display<I>
where
    I: DisplayInterface,
{
    type Error = Error<I>;

    fn width(&self) -> u16 {
        Display::width(self)
    }

    fn height(&self) -> u16 {
        Display::height(self)
    }

    fn draw_pixel(&mut self, x: u16, y: u16, color: u16) -> DisplayResult<I> {
        Display::draw_pixel(self, x, y, color)
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: u16) -> DisplayResult<I> {
        Display::fill_rect(self, x, y, w, h, color)
    }

    fn draw_fast_hline(&mut self, x: u16, y: u16, w: u16, color: u16) -> DisplayResult<I> {
        Display::draw_fast_hline(self, x, y, w, color)
    }

    fn draw_fast_vline(&mut self, x: u16, y: u16, h: u16, color: u16) -> DisplayResult<I> {
        Display::draw_fast_vline(self, x, y, h, color)
    }

    fn fill_screen(&mut self, color: u16) -> DisplayResult<I> {
        Display::fill_screen(self, color)
    }

    fn blit<D: Decoder>(
        &mut self,
        x: u16,
        y: u16,
        region: &TileRegion,
        source: &D,
        palette: &Palette<'_>,
        flip: Flip,
    ) -> DisplayResult<I> {
        Display::blit(self, x, y, region, source, palette, flip)
    }
}
