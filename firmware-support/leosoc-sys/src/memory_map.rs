// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Bus addresses of the LeoSoC peripherals.
//!
//! All register blocks consist of consecutive 32 bit words.

pub const LED_ADDR: usize = 0x0F00_0000;
pub const UART0_ADDR: usize = 0x0300_0000;
pub const UART1_ADDR: usize = 0x0400_0000;
pub const GPIO0_ADDR: usize = 0x0500_0000;
pub const TRNG0_ADDR: usize = 0x0600_0000;

/// Word offsets inside a UART block.
pub mod uart {
    pub const STATUS: usize = 0;
    pub const RX: usize = 1;
    pub const TX: usize = 2;
    pub const BAUDRATE: usize = 3;

    /// High when a byte was received, cleared by reading [`RX`].
    pub const RX_FLAG: u32 = 1 << 0;
    /// High while the transmitter is busy.
    pub const TX_FLAG: u32 = 1 << 1;
}

/// Word offsets inside a GPIO block.
pub mod gpio {
    pub const VALUE: usize = 0;
    pub const OUTPUT_ENABLE: usize = 1;
}

/// Word offsets inside a TRNG block.
pub mod trng {
    pub const ENABLE: usize = 0;
    pub const OUTPUT: usize = 1;
}

pub mod led {
    pub const DATA: usize = 0;
}
