//! ST7735 command definitions
//!
//! This module defines the command bytes used to drive the ST7735 TFT
//! controller. Commands are sent over SPI with the DC pin low; their
//! parameters follow with the DC pin high.
//!
//! ## Addressing Sequence
//!
//! Every pixel transfer follows the same pattern:
//! 1. [`CASET`] + 4 bytes (column start/end, big-endian)
//! 2. [`RASET`] + 4 bytes (row start/end, big-endian)
//! 3. [`RAMWR`]
//! 4. Two bytes per pixel (RGB565, high byte first)
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7735_tiles::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Column range 0..=127
//! let _ = interface.send_command(command::CASET);
//! let _ = interface.send_data(&[0x00, 0x00, 0x00, 0x7F]);
//! ```

// System control commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset (0x01)
///
/// Requires a 150ms delay before the next command.
pub const SWRESET: u8 = 0x01;

/// Sleep in (0x10)
pub const SLPIN: u8 = 0x10;

/// Sleep out (0x11)
///
/// Requires up to 500ms before the panel accepts further commands.
pub const SLPOUT: u8 = 0x11;

/// Partial display mode on (0x12)
pub const PTLON: u8 = 0x12;

/// Normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Addressing commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Opens the pixel stream into the window programmed by [`CASET`]/[`RASET`].
/// The controller auto-advances row-major inside the window.
pub const RAMWR: u8 = 0x2C;

/// Memory read (0x2E)
pub const RAMRD: u8 = 0x2E;

/// Partial area (0x30)
pub const PTLAR: u8 = 0x30;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte: 0x05 = 16-bit RGB565
pub const COLMOD: u8 = 0x3A;

/// Memory data access control (0x36)
///
/// Requires 1 byte built from the `MADCTL_*` bits below.
pub const MADCTL: u8 = 0x36;

// Panel function commands

/// Frame rate control, normal mode (0xB1)
pub const FRMCTR1: u8 = 0xB1;

/// Frame rate control, idle mode (0xB2)
pub const FRMCTR2: u8 = 0xB2;

/// Frame rate control, partial mode (0xB3)
pub const FRMCTR3: u8 = 0xB3;

/// Display inversion control (0xB4)
pub const INVCTR: u8 = 0xB4;

/// Display function setting (0xB6)
pub const DISSET5: u8 = 0xB6;

/// Power control 1 (0xC0)
pub const PWCTR1: u8 = 0xC0;

/// Power control 2 (0xC1)
pub const PWCTR2: u8 = 0xC1;

/// Power control 3 (0xC2)
pub const PWCTR3: u8 = 0xC2;

/// Power control 4 (0xC3)
pub const PWCTR4: u8 = 0xC3;

/// Power control 5 (0xC4)
pub const PWCTR5: u8 = 0xC4;

/// VCOM control 1 (0xC5)
pub const VMCTR1: u8 = 0xC5;

/// Power control 6 (0xFC)
pub const PWCTR6: u8 = 0xFC;

/// Positive gamma correction (0xE0)
///
/// Requires 16 bytes.
pub const GMCTRP1: u8 = 0xE0;

/// Negative gamma correction (0xE1)
///
/// Requires 16 bytes.
pub const GMCTRN1: u8 = 0xE1;

// MADCTL bits

/// Row address order (mirror Y)
pub const MADCTL_MY: u8 = 0x80;
/// Column address order (mirror X)
pub const MADCTL_MX: u8 = 0x40;
/// Row/column exchange
pub const MADCTL_MV: u8 = 0x20;
/// Vertical refresh order
pub const MADCTL_ML: u8 = 0x10;
/// RGB subpixel order
pub const MADCTL_RGB: u8 = 0x00;
/// BGR subpixel order
pub const MADCTL_BGR: u8 = 0x08;
/// Horizontal refresh order
pub const MADCTL_MH: u8 = 0x04;
