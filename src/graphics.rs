//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which wraps any
//! [`PanelDriver`] and implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem.
//!
//! Shapes, fonts and images all come from embedded-graphics. They reach the
//! panel through the driver's own primitives: single pixels become
//! [`PanelDriver::draw_pixel`], solid areas become one
//! [`PanelDriver::fill_rect`]. Nothing is buffered.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use st7735_tiles::GraphicDisplay;
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use st7735_tiles::{Builder, Dimensions, Display, Interface};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let Ok(dims) = Dimensions::new(128, 160) else { return };
//! # let Ok(config) = Builder::new().dimensions(dims).build() else { return };
//! # let driver = Display::new(interface, config);
//! let mut display = GraphicDisplay::new(driver);
//!
//! let _ = display.clear(Rgb565::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(60, 60), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::YELLOW, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, ST7735!",
//!     Point::new(10, 120),
//!     MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE),
//! )
//! .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::{IntoStorage, Rgb565},
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::display::PanelDriver;

/// embedded-graphics view of a panel
///
/// ## Type Parameters
///
/// * `P` - Panel driver, usually a [`Display`](crate::Display)
pub struct GraphicDisplay<P>
where
    P: PanelDriver,
{
    /// The underlying panel driver
    panel: P,
}

impl<P> GraphicDisplay<P>
where
    P: PanelDriver,
{
    /// Wrap a panel driver
    pub fn new(panel: P) -> Self {
        Self { panel }
    }

    /// Get a reference to the panel driver
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Get a mutable reference to the panel driver
    ///
    /// For tile blits and other driver operations mixed with
    /// embedded-graphics drawing.
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Unwrap the panel driver
    pub fn into_inner(self) -> P {
        self.panel
    }

    fn to_panel(point: Point) -> Option<(u16, u16)> {
        Some((u16::try_from(point.x).ok()?, u16::try_from(point.y).ok()?))
    }
}

impl<P> DrawTarget for GraphicDisplay<P>
where
    P: PanelDriver,
{
    type Color = Rgb565;
    type Error = P::Error;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let Some((x, y)) = Self::to_panel(point) else {
                continue;
            };
            // draw_pixel drops points past the far edges
            self.panel.draw_pixel(x, y, color.into_storage())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some((x, y)) = Self::to_panel(area.top_left) else {
            return Ok(());
        };
        if area.is_zero_sized() {
            return Ok(());
        }
        self.panel.fill_rect(
            x,
            y,
            area.size.width as u16,
            area.size.height as u16,
            color.into_storage(),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.panel.fill_screen(color.into_storage())
    }
}

impl<P> OriginDimensions for GraphicDisplay<P>
where
    P: PanelDriver,
{
    fn size(&self) -> Size {
        Size::new(self.panel.width() as u32, self.panel.height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Decoder;
    use crate::palette::Palette;
    use crate::tile::{Flip, TileRegion};
    use alloc::vec::Vec;
    use embedded_graphics::{
        pixelcolor::RgbColor,
        primitives::{Line, Primitive, PrimitiveStyle},
        Drawable,
    };

    #[derive(Debug, PartialEq)]
    enum Call {
        Pixel(u16, u16, u16),
        Fill(u16, u16, u16, u16, u16),
        Screen(u16),
    }

    struct MockPanel {
        width: u16,
        height: u16,
        calls: Vec<Call>,
    }

    impl MockPanel {
        fn new(width: u16, height: u16) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
            }
        }
    }

    impl PanelDriver for MockPanel {
        type Error = core::convert::Infallible;

        fn width(&self) -> u16 {
            self.width
        }

        fn height(&self) -> u16 {
            self.height
        }

        fn draw_pixel(&mut self, x: u16, y: u16, color: u16) -> Result<(), Self::Error> {
            self.calls.push(Call::Pixel(x, y, color));
            Ok(())
        }

        fn fill_rect(
            &mut self,
            x: u16,
            y: u16,
            w: u16,
            h: u16,
            color: u16,
        ) -> Result<(), Self::Error> {
            self.calls.push(Call::Fill(x, y, w, h, color));
            Ok(())
        }

        fn draw_fast_hline(
            &mut self,
            x: u16,
            y: u16,
            w: u16,
            color: u16,
        ) -> Result<(), Self::Error> {
            self.fill_rect(x, y, w, 1, color)
        }

        fn draw_fast_vline(
            &mut self,
            x: u16,
            y: u16,
            h: u16,
            color: u16,
        ) -> Result<(), Self::Error> {
            self.fill_rect(x, y, 1, h, color)
        }

        fn fill_screen(&mut self, color: u16) -> Result<(), Self::Error> {
            self.calls.push(Call::Screen(color));
            Ok(())
        }

        fn blit<D: Decoder>(
            &mut self,
            _x: u16,
            _y: u16,
            _region: &TileRegion,
            _source: &D,
            _palette: &Palette<'_>,
            _flip: Flip,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_size_follows_panel() {
        let display = GraphicDisplay::new(MockPanel::new(160, 80));
        assert_eq!(display.size(), Size::new(160, 80));
    }

    #[test]
    fn test_pixels_are_packed_rgb565() {
        let mut display = GraphicDisplay::new(MockPanel::new(128, 160));
        display
            .draw_iter([
                Pixel(Point::new(3, 4), Rgb565::RED),
                Pixel(Point::new(-1, 4), Rgb565::RED),
                Pixel(Point::new(5, 6), Rgb565::BLUE),
            ])
            .unwrap();

        assert_eq!(
            display.panel().calls,
            [Call::Pixel(3, 4, 0xF800), Call::Pixel(5, 6, 0x001F)]
        );
    }

    #[test]
    fn test_filled_rectangle_is_one_clipped_fill() {
        let mut display = GraphicDisplay::new(MockPanel::new(128, 160));
        Rectangle::new(Point::new(-5, 150), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.panel().calls, [Call::Fill(0, 150, 15, 10, 0x07E0)]);
    }

    #[test]
    fn test_fill_outside_panel_is_dropped() {
        let mut display = GraphicDisplay::new(MockPanel::new(128, 160));
        display
            .fill_solid(&Rectangle::new(Point::new(200, 0), Size::new(4, 4)), Rgb565::WHITE)
            .unwrap();
        assert!(display.panel().calls.is_empty());
    }

    #[test]
    fn test_clear_fills_screen() {
        let mut display = GraphicDisplay::new(MockPanel::new(128, 160));
        display.clear(Rgb565::WHITE).unwrap();
        assert_eq!(display.into_inner().calls, [Call::Screen(0xFFFF)]);
    }

    #[test]
    fn test_line_draws_through_pixels() {
        let mut display = GraphicDisplay::new(MockPanel::new(128, 160));
        Line::new(Point::new(0, 0), Point::new(3, 0))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
            .draw(&mut display)
            .unwrap();

        let calls = &display.panel().calls;
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|c| matches!(c, Call::Pixel(_, 0, 0xFFFF))));
    }
}
