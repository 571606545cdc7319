// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::memory_map::led::DATA;
use crate::mmio::{Mmio, RegisterBlock};

#[derive(Clone)]
pub struct Led<R = Mmio> {
    regs: R,
}

impl Led<Mmio> {
    /// # Safety
    ///
    /// The `base_addr` MUST BE the address of the memory mapped LED register.
    pub const unsafe fn new(base_addr: usize) -> Led<Mmio> {
        Led {
            regs: Mmio::new(base_addr),
        }
    }
}

impl<R: RegisterBlock> Led<R> {
    pub fn from_registers(regs: R) -> Led<R> {
        Led { regs }
    }

    pub fn set(&self, value: u32) {
        self.regs.write(DATA, value);
    }

    /// On, off, on. Visible as a pulse in the testbench waveform.
    pub fn blink(&self) {
        self.set(1);
        self.set(0);
        self.set(1);
    }
}
