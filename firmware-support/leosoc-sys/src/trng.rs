// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

/*! True random number generator.

The TRNG samples a set of free running ring oscillators. The oscillators only
run while the enable register is non-zero; with the oscillators stopped the
output register holds whatever was last sampled.

[`Trng`] implements [`rand::RngCore`], so it can seed the software generators
from `rand`:

```ignore
use rand::{rngs::SmallRng, SeedableRng};
let rng = SmallRng::from_rng(trng)?;
```
*/

use rand::RngCore;

use crate::memory_map::trng::{ENABLE, OUTPUT};
use crate::mmio::{Mmio, RegisterBlock};

#[derive(Clone)]
pub struct Trng<R = Mmio> {
    regs: R,
}

impl Trng<Mmio> {
    /// # Safety
    ///
    /// The `base_addr` MUST BE the address of a memory mapped TRNG instance.
    pub const unsafe fn new(base_addr: usize) -> Trng<Mmio> {
        Trng {
            regs: Mmio::new(base_addr),
        }
    }
}

impl<R: RegisterBlock> Trng<R> {
    pub fn from_registers(regs: R) -> Trng<R> {
        Trng { regs }
    }

    pub fn enable(&self) {
        self.regs.write(ENABLE, u32::MAX);
    }

    pub fn disable(&self) {
        self.regs.write(ENABLE, 0);
    }

    /// The current random word.
    pub fn output(&self) -> u32 {
        self.regs.read(OUTPUT)
    }
}

impl<R: RegisterBlock> RngCore for Trng<R> {
    fn next_u32(&mut self) -> u32 {
        self.output()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
