// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::memory_map::gpio::{OUTPUT_ENABLE, VALUE};
use crate::mmio::{Mmio, RegisterBlock};

/// A 32 bit GPIO port. Each bit of the output enable mask turns the matching
/// pin into an output.
#[derive(Clone)]
pub struct Gpio<R = Mmio> {
    regs: R,
}

impl Gpio<Mmio> {
    /// # Safety
    ///
    /// The `base_addr` MUST BE the address of a memory mapped GPIO instance.
    pub const unsafe fn new(base_addr: usize) -> Gpio<Mmio> {
        Gpio {
            regs: Mmio::new(base_addr),
        }
    }
}

impl<R: RegisterBlock> Gpio<R> {
    pub fn from_registers(regs: R) -> Gpio<R> {
        Gpio { regs }
    }

    /// Current pin state. Input pins reflect the outside world, output pins
    /// the last written value.
    pub fn value(&self) -> u32 {
        self.regs.read(VALUE)
    }

    pub fn set_value(&self, value: u32) {
        self.regs.write(VALUE, value);
    }

    pub fn set_output_enable(&self, mask: u32) {
        self.regs.write(OUTPUT_ENABLE, mask);
    }
}
