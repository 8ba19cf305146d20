//! Addressing window and pixel stream
//!
//! Before pixels can be written the controller has to be told which rectangle
//! receives them: [`CASET`] programs the column range, [`RASET`] the row range,
//! and [`RAMWR`] opens the stream. The controller then auto-advances row-major
//! through the rectangle, so every further data word is one pixel.
//!
//! [`open`] performs that sequence and hands back a [`Window`]. The window
//! mutably borrows the interface, so only one stream can be open at a time;
//! [`Window::close`] ends it. A window dropped without `close`, for example
//! when a decoder bails out with `?`, ends the stream on drop.
//!
//! Coordinates passed to [`open`] must already be clipped to the panel. No
//! bounds checking happens at this level.

use crate::command::{CASET, RAMWR, RASET};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::rotation::Orientation;

type WindowResult<I> = core::result::Result<(), Error<I>>;

/// Encode an address range register value
///
/// Returns `[start_hi, start_lo, end_hi, end_lo]` of `start + offset` and
/// `end + offset`, big-endian.
///
/// ```
/// use st7735_tiles::window::encode_range;
///
/// assert_eq!(encode_range(0, 127, 2), [0x00, 0x02, 0x00, 0x81]);
/// ```
pub fn encode_range(start: u16, end: u16, offset: u16) -> [u8; 4] {
    let [start_hi, start_lo] = start.wrapping_add(offset).to_be_bytes();
    let [end_hi, end_lo] = end.wrapping_add(offset).to_be_bytes();
    [start_hi, start_lo, end_hi, end_lo]
}

/// Consumer of a sequential pixel stream
///
/// Decoders write into a sink one packed RGB565 color at a time, in panel
/// scan order. [`Window`] is the sink backed by the controller.
pub trait PixelSink {
    /// Error raised by the underlying transport
    type Error;

    /// Emit one pixel
    fn write_pixel(&mut self, color: u16) -> Result<(), Self::Error>;

    /// Emit `count` pixels of the same color
    fn write_repeated(&mut self, color: u16, count: u32) -> Result<(), Self::Error> {
        for _ in 0..count {
            self.write_pixel(color)?;
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "alloc"))]
impl PixelSink for alloc::vec::Vec<u16> {
    type Error = core::convert::Infallible;

    fn write_pixel(&mut self, color: u16) -> Result<(), Self::Error> {
        self.push(color);
        Ok(())
    }
}

/// An open addressing window
///
/// Created by [`open`] (or [`Display::open_window`](crate::Display::open_window)).
/// Pixels written fill the programmed rectangle row-major.
#[must_use = "dropping a window ends its pixel stream"]
pub struct Window<'a, I: DisplayInterface> {
    interface: &'a mut I,
    /// Cleared by `close` so drop does not end the stream twice
    open: bool,
}

impl<I: DisplayInterface> Window<'_, I> {
    /// Emit one pixel, high byte first
    #[inline]
    pub fn write_pixel(&mut self, color: u16) -> WindowResult<I> {
        self.interface.send_pixel(color).map_err(Error::Interface)
    }

    /// Close the window
    pub fn close(mut self) -> WindowResult<I> {
        self.open = false;
        self.interface.end_data().map_err(Error::Interface)
    }
}

impl<I: DisplayInterface> Drop for Window<'_, I> {
    fn drop(&mut self) {
        if self.open {
            // no caller left to report this to
            let _ = self.interface.end_data();
        }
    }
}

impl<I: DisplayInterface> PixelSink for Window<'_, I> {
    type Error = Error<I>;

    #[inline]
    fn write_pixel(&mut self, color: u16) -> Result<(), Self::Error> {
        Window::write_pixel(self, color)
    }

    fn write_repeated(&mut self, color: u16, count: u32) -> Result<(), Self::Error> {
        self.interface
            .send_repeated(color, count)
            .map_err(Error::Interface)
    }
}

/// Program the addressing window `(x0, y0)..=(x1, y1)` and open a pixel stream
///
/// Coordinates are logical and panel-local; the orientation's offsets are
/// added before they reach the controller.
pub fn open<'a, I: DisplayInterface>(
    interface: &'a mut I,
    orientation: &Orientation,
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
) -> Result<Window<'a, I>, Error<I>> {
    debug_assert!(x0 <= x1 && y0 <= y1, "inverted window");
    log::trace!("window ({x0},{y0})-({x1},{y1})");

    interface.send_command(CASET).map_err(Error::Interface)?;
    interface
        .send_data(&encode_range(x0, x1, orientation.x_offset()))
        .map_err(Error::Interface)?;

    interface.send_command(RASET).map_err(Error::Interface)?;
    interface
        .send_data(&encode_range(y0, y1, orientation.y_offset()))
        .map_err(Error::Interface)?;

    interface.send_command(RAMWR).map_err(Error::Interface)?;
    interface.begin_data().map_err(Error::Interface)?;

    Ok(Window {
        interface,
        open: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use crate::config::Rotation;
    use alloc::vec::Vec;
    use embedded_hal::delay::DelayNs;

    #[derive(Debug, Default)]
    struct MockInterface {
        commands: Vec<u8>,
        command_data: Vec<(u8, Vec<u8>)>,
        ended: usize,
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.commands.push(command);
            self.command_data.push((command, Vec::new()));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if let Some((_, bytes)) = self.command_data.last_mut() {
                bytes.extend_from_slice(data);
            }
            Ok(())
        }

        fn end_data(&mut self) -> Result<(), Self::Error> {
            self.ended += 1;
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {}
    }

    fn orientation() -> Orientation {
        Orientation::new(Dimensions::new(128, 160).unwrap(), 2, 1)
    }

    #[test]
    fn test_encode_range_big_endian() {
        assert_eq!(encode_range(10, 20, 0), [0, 10, 0, 20]);
        assert_eq!(encode_range(0, 300, 0), [0, 0, 0x01, 0x2C]);
    }

    #[test]
    fn test_open_programs_offset_ranges_then_ramwr() {
        let mut interface = MockInterface::default();
        let window = open(&mut interface, &orientation(), 4, 5, 9, 7).unwrap();
        window.close().unwrap();

        assert_eq!(interface.commands, [CASET, RASET, RAMWR]);
        assert_eq!(interface.command_data[0].1, [0x00, 5, 0x00, 10]);
        assert_eq!(interface.command_data[1].1, [0x00, 7, 0x00, 9]);
        assert_eq!(interface.ended, 1);
    }

    #[test]
    fn test_landscape_keeps_offsets() {
        let mut interface = MockInterface::default();
        let mut orientation = orientation();
        orientation.set_rotation(Rotation::Rotate90);
        let window = open(&mut interface, &orientation, 0, 0, 0, 0).unwrap();
        window.close().unwrap();

        assert_eq!(interface.command_data[0].1, [0x00, 1, 0x00, 1]);
        assert_eq!(interface.command_data[1].1, [0x00, 2, 0x00, 2]);
    }

    #[test]
    fn test_pixels_go_high_byte_first() {
        let mut interface = MockInterface::default();
        let mut window = open(&mut interface, &orientation(), 0, 0, 1, 0).unwrap();
        window.write_pixel(0xF81F).unwrap();
        window.write_repeated(0x1234, 2).unwrap();
        window.close().unwrap();

        let (cmd, pixels) = interface.command_data.last().unwrap();
        assert_eq!(*cmd, RAMWR);
        assert_eq!(pixels, &[0xF8, 0x1F, 0x12, 0x34, 0x12, 0x34]);
    }

    #[test]
    fn test_dropped_window_ends_stream_once() {
        let mut interface = MockInterface::default();
        let mut window = open(&mut interface, &orientation(), 0, 0, 0, 0).unwrap();
        window.write_pixel(0xFFFF).unwrap();
        drop(window);
        assert_eq!(interface.ended, 1);
    }
}
