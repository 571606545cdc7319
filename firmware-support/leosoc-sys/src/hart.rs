// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Per-hart identification and performance counters.
//!
//! These read machine CSRs and only work when running on the SoC itself.

use ufmt::derive::uDebug;

/// What a hart does after reset.
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Hart 0: configures the peripherals, then echoes UART0.
    Primary,
    /// Hart 1: greets on UART1, then parks.
    Secondary,
    /// Any other hart. Parks immediately.
    Idle,
}

impl Role {
    pub fn for_hart(hart_id: usize) -> Role {
        match hart_id {
            0 => Role::Primary,
            1 => Role::Secondary,
            _ => Role::Idle,
        }
    }
}

/// The `mhartid` of the calling hart.
pub fn hart_id() -> usize {
    riscv::register::mhartid::read()
}

/// Lower 32 bits of the cycle counter.
pub fn cycle() -> usize {
    riscv::register::cycle::read()
}

/// Lower 32 bits of the retired instruction counter.
pub fn instret() -> usize {
    riscv::register::instret::read()
}

/// Spin forever without touching the bus.
pub fn park() -> ! {
    loop {
        continue;
    }
}
