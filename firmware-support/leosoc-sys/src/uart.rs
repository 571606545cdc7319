// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use heapless::Vec;

use crate::config::{baud_divisor, ConfigError};
use crate::memory_map::uart::{BAUDRATE, RX, RX_FLAG, STATUS, TX, TX_FLAG};
use crate::mmio::{Mmio, RegisterBlock};

pub mod log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartStatus {
    pub rx_ready: bool,
    pub tx_busy: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TransmitBufferFull;
#[derive(Debug, PartialEq, Eq)]
pub struct ReceiveBufferEmpty;

/// Number of decimal digits in `u32::MAX`.
const MAX_DIGITS: usize = 10;

#[derive(Clone)]
/// `Uart` is a structure representing a universal asynchronous receiver-transmitter.
pub struct Uart<R = Mmio> {
    regs: R,
}

impl Uart<Mmio> {
    /// Create a new [`Uart`] instance given a base address.
    ///
    /// # Safety
    ///
    /// The `base_addr` MUST BE the address of a memory mapped UART instance.
    pub const unsafe fn new(base_addr: usize) -> Uart<Mmio> {
        Uart {
            regs: Mmio::new(base_addr),
        }
    }
}

impl<R: RegisterBlock> Uart<R> {
    pub fn from_registers(regs: R) -> Uart<R> {
        Uart { regs }
    }

    /// UART status register output
    pub fn read_status(&self) -> UartStatus {
        let flags = self.regs.read(STATUS);

        UartStatus {
            rx_ready: flags & RX_FLAG != 0,
            tx_busy: flags & TX_FLAG != 0,
        }
    }

    pub fn set_baud_divisor(&self, divisor: u32) {
        self.regs.write(BAUDRATE, divisor);
    }

    /// Program the divisor for `baudrate` given the input clock `f_cpu`.
    pub fn configure_baudrate(&self, f_cpu: u32, baudrate: u32) -> Result<(), ConfigError> {
        let divisor = baud_divisor(f_cpu, baudrate)?;
        ::log::trace!("uart divisor {} for {} baud", divisor, baudrate);
        self.set_baud_divisor(divisor);
        Ok(())
    }

    /// The `receive` function attempts to receive data from the UART. If no
    /// data is available, it keeps looping until data is available.
    pub fn receive(&self) -> u8 {
        loop {
            if let Ok(val) = self.try_receive() {
                return val;
            }
        }
    }

    /// The `try_receive` function attempts to receive data from the UART. The
    /// data register is only read when the status reports a received byte, so
    /// an empty receiver is left untouched.
    pub fn try_receive(&self) -> Result<u8, ReceiveBufferEmpty> {
        if self.read_status().rx_ready {
            Ok(self.regs.read(RX) as u8)
        } else {
            Err(ReceiveBufferEmpty)
        }
    }

    /// Sample the ready flag and read the data register regardless of it.
    ///
    /// The byte is only meaningful when the flag is `true`. Reading the data
    /// register clears the ready flag in hardware, so calling this while a
    /// byte arrives can consume it. Prefer [`Uart::try_receive`].
    pub fn try_receive_raw(&self) -> (bool, u8) {
        let ready = self.read_status().rx_ready;
        let data = self.regs.read(RX) as u8;
        (ready, data)
    }

    /// The `send` function sends the given data to the UART. If the UART is
    /// unable to accept the data, it keeps looping until it can send the data.
    pub fn send(&self, data: u8) {
        loop {
            if let Ok(()) = self.try_send(data) {
                return;
            }
        }
    }

    /// The `try_send` function attempts to send the given data to the UART. If
    /// the UART is unable to accept the data, it returns an error.
    pub fn try_send(&self, data: u8) -> Result<(), TransmitBufferFull> {
        if self.read_status().tx_busy {
            Err(TransmitBufferFull)
        } else {
            self.regs.write(TX, data as u32);
            Ok(())
        }
    }

    /// Send `message` up to, but excluding, the first NUL byte.
    pub fn write_message(&self, message: &[u8]) {
        for &b in message.iter().take_while(|&&b| b != 0) {
            self.send(b);
        }
    }

    /// Send the decimal representation of `value`, most significant digit
    /// first.
    pub fn write_u32(&self, value: u32) {
        for digit in decimal_digits(value).iter().rev() {
            self.send(*digit);
        }
    }

    /// Wait for one byte and send it straight back.
    pub fn echo_once(&self) {
        let data = self.receive();
        self.send(data);
    }
}

/// ASCII digits of `value`, least significant first.
fn decimal_digits(mut value: u32) -> Vec<u8, MAX_DIGITS> {
    let mut digits = Vec::new();
    loop {
        // Cannot overflow, `u32::MAX` has `MAX_DIGITS` digits.
        let _ = digits.push(b'0' + (value % 10) as u8);
        value /= 10;
        if value == 0 {
            return digits;
        }
    }
}

impl<R: RegisterBlock> ufmt::uWrite for Uart<R> {
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }

    type Error = ();
}

impl<R: RegisterBlock> core::fmt::Write for Uart<R> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.send(b);
        }
        Ok(())
    }
}
