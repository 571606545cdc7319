// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

/*! Bring-up sequence for the toplevel testbench.

Both harts run the same image. After blinking the LED each hart picks its
[`Role`] from its hart ID:

 - hart 0 configures GPIO and UART0, reports the GPIO value and two TRNG
   samples in decimal, greets with `Core 0` and raises the shared flag. It
   then echoes everything received on UART0.
 - hart 1 configures UART1, greets with `Core 1` and parks.
 - every other hart parks.

The testbench checks the UART transcripts, so nothing else may be printed on
them while the default configuration is used.
*/

use log::{debug, trace};

use crate::config::{BringupConfig, ConfigError};
use crate::devices::DeviceInstances;
use crate::hart::{park, Role};
use crate::mmio::RegisterBlock;
use crate::sync::SyncFlag;
use crate::uart::Uart;

/// Hart 0 work up to, not including, the echo loop.
pub fn run_primary<R: RegisterBlock>(
    devices: &DeviceInstances<R>,
    config: &BringupConfig,
    flag: &SyncFlag,
) -> Result<(), ConfigError> {
    let uart = &devices.uart0;

    devices.gpio0.set_output_enable(config.gpio_output_enable);
    devices.gpio0.set_value(config.gpio_value);
    uart.configure_baudrate(config.f_cpu, config.uart0_baudrate)?;
    debug!("uart0 at {} baud", config.uart0_baudrate);

    let gpio_value = devices.gpio0.value();
    trace!("gpio0 reads {:#x}", gpio_value);
    write_line(uart, gpio_value);

    if config.enable_trng {
        devices.trng0.enable();
    }
    for _ in 0..2 {
        write_line(uart, devices.trng0.output());
    }

    uart.write_message(b"Core 0\n");
    flag.raise();
    debug!("hart 0 done");
    Ok(())
}

/// Hart 1 work before it parks.
pub fn run_secondary<R: RegisterBlock>(
    devices: &DeviceInstances<R>,
    config: &BringupConfig,
    flag: &SyncFlag,
) -> Result<(), ConfigError> {
    if config.secondary_waits_for_primary {
        flag.wait();
    }
    devices
        .uart1
        .configure_baudrate(config.f_cpu, config.uart1_baudrate)?;
    debug!("uart1 at {} baud", config.uart1_baudrate);
    devices.uart1.write_message(b"Core 1\n");
    Ok(())
}

/// Forward every byte received on `uart` back to it.
pub fn echo<R: RegisterBlock>(uart: &Uart<R>) -> ! {
    loop {
        uart.echo_once();
    }
}

/// Blink the LED and pick what `hart_id` does next. Runs on every hart
/// before anything else touches the bus.
pub fn prologue<R: RegisterBlock>(hart_id: usize, devices: &DeviceInstances<R>) -> Role {
    devices.led.blink();
    Role::for_hart(hart_id)
}

/// Run the bring-up sequence for `hart_id`. Never returns.
pub fn start<R: RegisterBlock>(
    hart_id: usize,
    devices: &DeviceInstances<R>,
    config: &BringupConfig,
    flag: &SyncFlag,
) -> Result<core::convert::Infallible, ConfigError> {
    match prologue(hart_id, devices) {
        Role::Primary => {
            run_primary(devices, config, flag)?;
            echo(&devices.uart0)
        }
        Role::Secondary => {
            run_secondary(devices, config, flag)?;
            park()
        }
        // Harts above 1 park instead of joining hart 0 in the UART0 echo
        // loop, two harts polling one receiver would split its bytes.
        // The image only starts harts 0 and 1 (`_max_hart_id = 1`).
        Role::Idle => park(),
    }
}

fn write_line<R: RegisterBlock>(uart: &Uart<R>, value: u32) {
    uart.write_u32(value);
    uart.send(b'\n');
}
