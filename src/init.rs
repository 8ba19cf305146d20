//! Power-up command tables
//!
//! The ST7735R is brought up by three tables run back to back: [`RCMD1`]
//! (reset, frame rate, power, color mode), one variant table selected by
//! [`PanelVariant`] (default address ranges), and [`RCMD3`] (gamma, display
//! on).
//!
//! ## Table Format
//!
//! ```text
//! count
//! cmd, argc | DELAY, arg0 .. argN, [ms]
//! ...
//! ```
//!
//! When the [`DELAY`] bit is set on the argument count, one more byte follows
//! the arguments holding the delay in milliseconds; `255` stands for 500 ms.

use embedded_hal::delay::DelayNs;

use crate::command::{
    CASET, COLMOD, DISPON, FRMCTR1, FRMCTR2, FRMCTR3, GMCTRN1, GMCTRP1, INVCTR, INVOFF, MADCTL,
    NORON, PWCTR1, PWCTR2, PWCTR3, PWCTR4, PWCTR5, RASET, SLPOUT, SWRESET, VMCTR1,
};
use crate::config::PanelVariant;
use crate::interface::DisplayInterface;

/// Flag on the argument count marking a trailing delay byte
pub const DELAY: u8 = 0x80;

/// Delay byte value that encodes 500 ms
pub const LONG_DELAY: u8 = 255;

/// Init part 1, shared by all R-type panels
#[rustfmt::skip]
pub static RCMD1: &[u8] = &[
    15,
    SWRESET, DELAY, 150,
    SLPOUT, DELAY, LONG_DELAY,
    FRMCTR1, 3, 0x01, 0x2C, 0x2D,
    FRMCTR2, 3, 0x01, 0x2C, 0x2D,
    FRMCTR3, 6, 0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D,
    INVCTR, 1, 0x07,
    PWCTR1, 3, 0xA2, 0x02, 0x84,
    PWCTR2, 1, 0xC5,
    PWCTR3, 2, 0x0A, 0x00,
    PWCTR4, 2, 0x8A, 0x2A,
    PWCTR5, 2, 0x8A, 0xEE,
    VMCTR1, 1, 0x0E,
    INVOFF, 0,
    MADCTL, 1, 0xC8,
    COLMOD, 1, 0x05,
];

/// Init part 2, green tab 1.8"
#[rustfmt::skip]
pub static RCMD2_GREEN: &[u8] = &[
    2,
    CASET, 4, 0x00, 0x02, 0x00, 0x7F + 0x02,
    RASET, 4, 0x00, 0x01, 0x00, 0x9F + 0x01,
];

/// Init part 2, red tab 1.8"
#[rustfmt::skip]
pub static RCMD2_RED: &[u8] = &[
    2,
    CASET, 4, 0x00, 0x00, 0x00, 0x7F,
    RASET, 4, 0x00, 0x00, 0x00, 0x9F,
];

/// Init part 2, green tab 1.44"
#[rustfmt::skip]
pub static RCMD2_GREEN_144: &[u8] = &[
    2,
    CASET, 4, 0x00, 0x00, 0x00, 0x7F,
    RASET, 4, 0x00, 0x00, 0x00, 0x7F,
];

/// Init part 2, mini 160x80
#[rustfmt::skip]
pub static RCMD2_MINI_160X80: &[u8] = &[
    2,
    CASET, 4, 0x00, 0x00, 0x00, 0x7F,
    RASET, 4, 0x00, 0x00, 0x00, 0x9F,
];

/// Init part 3: gamma and display on
#[rustfmt::skip]
pub static RCMD3: &[u8] = &[
    4,
    GMCTRP1, 16,
    0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D,
    0x29, 0x25, 0x2B, 0x39, 0x00, 0x01, 0x03, 0x10,
    GMCTRN1, 16,
    0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D,
    0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00, 0x02, 0x10,
    NORON, DELAY, 10,
    DISPON, DELAY, 100,
];

/// Part 2 table for a panel variant
pub fn variant_table(variant: PanelVariant) -> &'static [u8] {
    match variant {
        PanelVariant::Green18 => RCMD2_GREEN,
        PanelVariant::Red18 => RCMD2_RED,
        PanelVariant::Green144 => RCMD2_GREEN_144,
        PanelVariant::Mini160x80 => RCMD2_MINI_160X80,
    }
}

/// Issue every command of a table, in order
///
/// A truncated table stops at the last complete command.
pub fn run_table<I, D>(interface: &mut I, delay: &mut D, table: &[u8]) -> Result<(), I::Error>
where
    I: DisplayInterface,
    D: DelayNs,
{
    let Some((&count, mut rest)) = table.split_first() else {
        return Ok(());
    };

    for _ in 0..count {
        let [command, argc, tail @ ..] = rest else {
            break;
        };
        let has_delay = argc & DELAY != 0;
        let Some((args, tail)) = tail.split_at_checked((argc & !DELAY) as usize) else {
            break;
        };

        interface.send_command(*command)?;
        if !args.is_empty() {
            interface.send_data(args)?;
        }
        rest = tail;

        if has_delay {
            let Some((&ms, tail)) = rest.split_first() else {
                break;
            };
            rest = tail;
            delay.delay_ms(if ms == LONG_DELAY { 500 } else { ms as u32 });
        }
    }
    Ok(())
}

/// Run the full power-up sequence for `variant`
pub fn run<I, D>(interface: &mut I, delay: &mut D, variant: PanelVariant) -> Result<(), I::Error>
where
    I: DisplayInterface,
    D: DelayNs,
{
    log::debug!("running init tables for {variant:?}");
    run_table(interface, delay, RCMD1)?;
    run_table(interface, delay, variant_table(variant))?;
    run_table(interface, delay, RCMD3)
}
