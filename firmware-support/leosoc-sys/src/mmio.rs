// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

/// Word-granular access to a block of peripheral registers.
///
/// `offset` is a word index into the block, not a byte offset. Drivers only
/// talk to their registers through this trait, so a driver can run against
/// the real bus ([`Mmio`]) or a model of the peripheral.
pub trait RegisterBlock {
    fn read(&self, offset: usize) -> u32;
    fn write(&self, offset: usize, value: u32);
}

impl<R: RegisterBlock + ?Sized> RegisterBlock for &R {
    fn read(&self, offset: usize) -> u32 {
        (**self).read(offset)
    }

    fn write(&self, offset: usize, value: u32) {
        (**self).write(offset, value)
    }
}

/// A memory mapped register block living at a fixed bus address.
///
/// Every read and write is volatile and reaches the bus exactly once.
#[derive(Clone)]
pub struct Mmio {
    base_addr: *mut u32,
}

impl Mmio {
    /// Create a new [`Mmio`] handle given a base address.
    ///
    /// # Safety
    ///
    /// The `base_addr` MUST BE the address of a peripheral register block that
    /// is mapped for the entire runtime of the program, and all offsets used
    /// with this handle must stay inside that block.
    pub const unsafe fn new(base_addr: usize) -> Mmio {
        Mmio {
            base_addr: base_addr as *mut u32,
        }
    }
}

impl RegisterBlock for Mmio {
    fn read(&self, offset: usize) -> u32 {
        // SAFETY: `new` requires the block to be mapped and `offset` in range.
        unsafe { self.base_addr.add(offset).read_volatile() }
    }

    fn write(&self, offset: usize, value: u32) {
        // SAFETY: see `read`.
        unsafe { self.base_addr.add(offset).write_volatile(value) }
    }
}
