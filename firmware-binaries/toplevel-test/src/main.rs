#![no_std]
#![cfg_attr(not(test), no_main)]
// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use log::LevelFilter;
use ufmt::uwriteln;

use leosoc_sys::bringup;
use leosoc_sys::config::BringupConfig;
use leosoc_sys::devices::DeviceInstances;
use leosoc_sys::hart;
use leosoc_sys::memory_map::{UART0_ADDR, UART1_ADDR};
use leosoc_sys::sync::SyncFlag;
use leosoc_sys::uart::{self, Uart};

#[cfg(not(test))]
use riscv_rt::entry;

const CONFIG: BringupConfig = BringupConfig::DEFAULT;
const INSTANCES: DeviceInstances = unsafe { DeviceInstances::new() };

static SYNC_FLAG: SyncFlag = SyncFlag::new();

/// Only hart 0 initialises `.bss` and `.data`, hart 1 goes straight to `main`.
#[export_name = "_mp_hook"]
pub extern "Rust" fn mp_hook(hartid: usize) -> bool {
    hartid == 0
}

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    let hart_id = hart::hart_id();

    if hart_id == 0 && CONFIG.log_level != LevelFilter::Off {
        // Logs share UART1 with the hart 1 greeting.
        let log_uart = unsafe { Uart::new(UART1_ADDR) };
        let _ = log_uart.configure_baudrate(CONFIG.f_cpu, CONFIG.uart1_baudrate);
        let _ = unsafe { uart::log::init(log_uart, CONFIG.log_level, CONFIG.log_display_source) };
        log::info!("hart 0 up after {} cycles", hart::cycle());
    }

    match bringup::start(hart_id, &INSTANCES, &CONFIG, &SYNC_FLAG) {
        Ok(never) => match never {},
        Err(err) => {
            let mut uart = INSTANCES.uart0;
            let _ = uwriteln!(uart, "hart {}: invalid configuration {:?}", hart_id, err);
            hart::park()
        }
    }
}

#[cfg(not(test))]
#[inline(never)]
#[panic_handler]
fn panic_handler(info: &core::panic::PanicInfo) -> ! {
    let mut uart = unsafe { Uart::new(UART0_ADDR) };
    match info.location() {
        Some(loc) => {
            let _ = uwriteln!(uart, "A panic happened {}:{}", loc.file(), loc.line());
        }
        None => {
            let _ = uwriteln!(
                uart,
                "A panic without location information happened, stopping execution now."
            );
        }
    }
    hart::park()
}
