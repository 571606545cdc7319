// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use log::LevelFilter;
use ufmt::derive::uDebug;

/// Clock frequency the SoC runs at in the testbench.
pub const F_CPU: u32 = 40_000_000;
pub const BAUDRATE_UART0: u32 = 115_200;
pub const BAUDRATE_UART1: u32 = 9_600;

#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A baud rate of zero hertz was requested.
    ZeroBaudrate,
}

/// Compute the UART divisor register value for `baudrate` given the input
/// clock `f_cpu`. The hardware truncates, so does this.
pub const fn baud_divisor(f_cpu: u32, baudrate: u32) -> Result<u32, ConfigError> {
    if baudrate == 0 {
        return Err(ConfigError::ZeroBaudrate);
    }
    Ok(f_cpu / baudrate)
}

/// Everything the bring-up routines can be told to do differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BringupConfig {
    pub f_cpu: u32,
    pub uart0_baudrate: u32,
    pub uart1_baudrate: u32,
    pub gpio_output_enable: u32,
    pub gpio_value: u32,
    /// Switch the TRNG on before sampling it.
    pub enable_trng: bool,
    /// Let hart 1 spin until hart 0 raised the shared flag.
    pub secondary_waits_for_primary: bool,
    /// Level for the UART logger. `Off` keeps the UART transcripts clean.
    pub log_level: LevelFilter,
    /// Log records at or below this level carry their `file:line`.
    pub log_display_source: LevelFilter,
}

impl BringupConfig {
    /// The configuration the toplevel testbench expects.
    pub const DEFAULT: BringupConfig = BringupConfig {
        f_cpu: F_CPU,
        uart0_baudrate: BAUDRATE_UART0,
        uart1_baudrate: BAUDRATE_UART1,
        gpio_output_enable: 0xFFFF_0000,
        gpio_value: 0x1234_5678,
        enable_trng: false,
        secondary_waits_for_primary: false,
        log_level: LevelFilter::Off,
        log_display_source: LevelFilter::Debug,
    };
}

impl Default for BringupConfig {
    fn default() -> Self {
        BringupConfig::DEFAULT
    }
}
