// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use core::sync::atomic::{AtomicBool, Ordering};

/// A one-shot flag one hart raises and others can wait on.
///
/// Only atomic loads and stores are used: the LeoRV32 cores implement RV32I
/// without the A extension.
pub struct SyncFlag {
    raised: AtomicBool,
}

impl SyncFlag {
    pub const fn new() -> SyncFlag {
        SyncFlag {
            raised: AtomicBool::new(false),
        }
    }

    /// Publish everything written before this call to harts that observe the
    /// flag through [`SyncFlag::is_raised`] or [`SyncFlag::wait`].
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Spin until the flag is raised.
    pub fn wait(&self) {
        while !self.is_raised() {
            core::hint::spin_loop();
        }
    }
}

impl Default for SyncFlag {
    fn default() -> Self {
        SyncFlag::new()
    }
}
