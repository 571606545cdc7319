// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::gpio::Gpio;
use crate::led::Led;
use crate::memory_map::{GPIO0_ADDR, LED_ADDR, TRNG0_ADDR, UART0_ADDR, UART1_ADDR};
use crate::mmio::{Mmio, RegisterBlock};
use crate::trng::Trng;
use crate::uart::Uart;

/// All peripherals of the SoC.
pub struct DeviceInstances<R = Mmio> {
    pub led: Led<R>,
    pub uart0: Uart<R>,
    pub uart1: Uart<R>,
    pub gpio0: Gpio<R>,
    pub trng0: Trng<R>,
}

impl DeviceInstances<Mmio> {
    /// Handles for the peripherals at their fixed addresses.
    ///
    /// # Safety
    ///
    /// Only sound on the LeoSoC memory map. The handles alias the hardware, so
    /// creating several instances is fine as long as no two harts drive the
    /// same peripheral.
    pub const unsafe fn new() -> DeviceInstances<Mmio> {
        DeviceInstances {
            led: Led::new(LED_ADDR),
            uart0: Uart::new(UART0_ADDR),
            uart1: Uart::new(UART1_ADDR),
            gpio0: Gpio::new(GPIO0_ADDR),
            trng0: Trng::new(TRNG0_ADDR),
        }
    }
}

impl<R: RegisterBlock> DeviceInstances<R> {
    pub fn from_registers(led: R, uart0: R, uart1: R, gpio0: R, trng0: R) -> DeviceInstances<R> {
        DeviceInstances {
            led: Led::from_registers(led),
            uart0: Uart::from_registers(uart0),
            uart1: Uart::from_registers(uart1),
            gpio0: Gpio::from_registers(gpio0),
            trng0: Trng::from_registers(trng0),
        }
    }
}
