// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
use core::cell::UnsafeCell;

// The logger utilizes core::fmt to format the log messages because ufmt formatting is not
// compatible with (dependencies of) the log crate.
use core::fmt::Write;
use log::LevelFilter;

use crate::uart::Uart;

/// A global logger instance to be used with the `log` crate.
///
/// Use [`init`] to attach a `Uart` and register it with `log`.
pub static LOGGER: UartLogger = UartLogger {
    state: UnsafeCell::new(LoggerState {
        uart: None,
        display_source: LevelFilter::Debug,
    }),
};

struct LoggerState {
    uart: Option<Uart>,
    /// Records at or below this level are prefixed with `file:line`.
    display_source: LevelFilter,
}

/// Wrapper for `Uart` to be used as a logger with the `log` crate.
/// Instead of making a new logger, use [`init`] on the [`LOGGER`] instance.
///
/// # Safety
///
/// The underlying `Uart` is neither `Send` nor `Sync`. Records emitted by
/// different harts at the same time interleave on the wire.
pub struct UartLogger {
    state: UnsafeCell<LoggerState>,
}

impl UartLogger {
    /// Set the logger to use the given UART.
    ///
    /// # Safety
    ///
    /// No other hart may log or call this function concurrently.
    pub unsafe fn set_logger(&self, uart: Uart, display_source: LevelFilter) {
        let state = &mut *self.state.get();
        state.uart = Some(uart);
        state.display_source = display_source;
    }
}

/// Attach `uart` to [`LOGGER`], register it with `log` and set the maximum
/// level. Records at or below `display_source` carry their `file:line`.
///
/// # Safety
///
/// Must be called once, before any other hart logs. The SoC has no atomic
/// compare-and-swap, so registration is racy.
pub unsafe fn init(
    uart: Uart,
    level: LevelFilter,
    display_source: LevelFilter,
) -> Result<(), log::SetLoggerError> {
    LOGGER.set_logger(uart, display_source);
    log::set_logger_racy(&LOGGER)?;
    log::set_max_level_racy(level);
    Ok(())
}

impl log::Log for UartLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // SAFETY: the state is only mutated by `set_logger`, which callers
        // guarantee does not run concurrently with logging.
        let state = unsafe { &mut *self.state.get() };
        let display_source = state.display_source;
        let Some(uart) = state.uart.as_mut() else {
            return;
        };
        let _ = write!(uart, "{} | ", record.level());
        if record.level() <= display_source {
            if let (Some(file), Some(line)) = (record.file(), record.line()) {
                let _ = write!(uart, "{}:{} - ", file, line);
            }
        }
        let _ = writeln!(uart, "{}", record.args());
    }

    fn flush(&self) {}
}

unsafe impl core::marker::Send for UartLogger {}
unsafe impl core::marker::Sync for UartLogger {}
