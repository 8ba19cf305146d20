//! ST7735 Tile Blitting Driver
//!
//! A driver for ST7735R TFT panels (up to 160x160 pixels) built around
//! indexed-color tiles: fonts and sprites are stored once as compact atlases
//! and streamed straight into the panel's addressing window, without a frame
//! buffer.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - 1-bit, 4-bit indexed and 4-bit run-length encoded images
//! - Tile atlases with horizontal/vertical flips
//! - Built-in 8x8 tile font
//! - Hardware rotation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735_tiles::{Builder, Dimensions, Display, Interface, Palette, PanelVariant, Rotation};
//! use st7735_tiles::color;
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let dims = match Dimensions::new(128, 160) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new()
//!     .dimensions(dims)
//!     .variant(PanelVariant::Green18)
//!     .col_start(2)
//!     .row_start(1)
//!     .rotation(Rotation::Rotate90)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut delay);
//!
//! let text_colors = [color::BLACK, color::WHITE];
//! let _ = display.fill_screen(color::BLACK);
//! let _ = display.draw_text(4, 4, "Score 120", &Palette::new(&text_colors));
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 color helpers
pub mod color;
/// ST7735 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Stored image decoders
pub mod decode;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 8x8 tile font
pub mod font;
/// Power-up command tables
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// Palette lookup
pub mod palette;
/// Orientation state and MADCTL encoding
pub mod rotation;
/// Tile geometry and source mapping
pub mod tile;
/// Addressing window and pixel stream
pub mod window;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{Builder, Config, Dimensions, MAX_AXIS, PanelVariant, Rotation};
pub use decode::{Decoder, IndexedImage, MonoBitmap, RleImage, TileOffsets};
pub use display::{Display, PanelDriver};
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, RESET_SETTLE_MS};
pub use palette::Palette;
pub use tile::{Extent, Flip, TileRegion};
pub use window::{PixelSink, Window};

#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;
