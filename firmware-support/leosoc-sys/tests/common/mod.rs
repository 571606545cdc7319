// SPDX-FileCopyrightText: 2024 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

//! A behavioural model of the LeoSoC peripherals for host tests.
//!
//! Every block records its bus accesses in a trace shared by the whole SoC so
//! tests can check ordering across peripherals.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use leosoc_sys::devices::DeviceInstances;
use leosoc_sys::memory_map::uart::{RX, RX_FLAG, STATUS, TX, TX_FLAG};
use leosoc_sys::mmio::RegisterBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read {
        device: &'static str,
        offset: usize,
        value: u32,
    },
    Write {
        device: &'static str,
        offset: usize,
        value: u32,
    },
}

pub type Trace = Rc<RefCell<Vec<Access>>>;

#[derive(Default)]
struct UartModel {
    /// Status reads left that report the transmitter as busy.
    busy_polls: Cell<u32>,
    /// Busy polls reloaded after every transmitted byte.
    busy_after_send: Cell<u32>,
    rx_queue: RefCell<VecDeque<u8>>,
    /// Status reads left before the head of `rx_queue` is reported ready.
    rx_delay: Cell<u32>,
    /// What the data register holds when nothing new arrived.
    stale_rx: Cell<u8>,
    rx_reads: Cell<usize>,
    transmitted: RefCell<Vec<u8>>,
    sent_while_busy: Cell<usize>,
    /// Panic after this many status polls on an empty receiver without a
    /// transmit in between. Lets tests leave the endless echo loop.
    starve_after: Cell<Option<u32>>,
    idle_polls: Cell<u32>,
}

impl UartModel {
    fn rx_ready(&self) -> bool {
        !self.rx_queue.borrow().is_empty() && self.rx_delay.get() == 0
    }

    fn read_status(&self) -> u32 {
        let busy = self.busy_polls.get() > 0;
        if busy {
            self.busy_polls.set(self.busy_polls.get() - 1);
        }
        if self.rx_queue.borrow().is_empty() {
            self.idle_polls.set(self.idle_polls.get() + 1);
            if let Some(limit) = self.starve_after.get() {
                if self.idle_polls.get() > limit {
                    panic!("receiver starved after {limit} polls");
                }
            }
        }
        let ready = self.rx_ready();
        if !self.rx_queue.borrow().is_empty() && self.rx_delay.get() > 0 {
            self.rx_delay.set(self.rx_delay.get() - 1);
        }

        let mut status = 0;
        if ready {
            status |= RX_FLAG;
        }
        if busy {
            status |= TX_FLAG;
        }
        status
    }

    fn read_rx(&self) -> u32 {
        self.rx_reads.set(self.rx_reads.get() + 1);
        if self.rx_ready() {
            if let Some(byte) = self.rx_queue.borrow_mut().pop_front() {
                self.stale_rx.set(byte);
                return byte as u32;
            }
        }
        self.stale_rx.get() as u32
    }

    fn write_tx(&self, value: u32) {
        if self.busy_polls.get() > 0 {
            self.sent_while_busy.set(self.sent_while_busy.get() + 1);
        }
        self.transmitted.borrow_mut().push(value as u8);
        self.idle_polls.set(0);
        self.busy_polls.set(self.busy_after_send.get());
    }
}

enum Model {
    Uart(UartModel),
    Plain,
}

struct SimState {
    name: &'static str,
    words: RefCell<[u32; 4]>,
    scripted: RefCell<[VecDeque<u32>; 4]>,
    model: Model,
    trace: Trace,
}

/// One simulated register block.
#[derive(Clone)]
pub struct SimBlock(Rc<SimState>);

impl SimBlock {
    fn new(name: &'static str, model: Model, trace: &Trace) -> SimBlock {
        SimBlock(Rc::new(SimState {
            name,
            words: RefCell::new([0; 4]),
            scripted: RefCell::new(Default::default()),
            model,
            trace: Rc::clone(trace),
        }))
    }

    pub fn uart(name: &'static str, trace: &Trace) -> SimBlock {
        SimBlock::new(name, Model::Uart(UartModel::default()), trace)
    }

    pub fn plain(name: &'static str, trace: &Trace) -> SimBlock {
        SimBlock::new(name, Model::Plain, trace)
    }

    fn uart_model(&self) -> &UartModel {
        match &self.0.model {
            Model::Uart(model) => model,
            Model::Plain => panic!("{} is not a UART", self.0.name),
        }
    }

    /// Last value written to (or preset in) the word at `offset`.
    pub fn word(&self, offset: usize) -> u32 {
        self.0.words.borrow()[offset]
    }

    /// Values returned by the next reads of `offset`, before falling back to
    /// the stored word.
    pub fn script_reads(&self, offset: usize, values: &[u32]) {
        self.0.scripted.borrow_mut()[offset].extend(values.iter().copied());
    }

    pub fn set_tx_busy_polls(&self, polls: u32) {
        self.uart_model().busy_polls.set(polls);
    }

    pub fn set_busy_after_send(&self, polls: u32) {
        self.uart_model().busy_after_send.set(polls);
    }

    pub fn push_rx(&self, bytes: &[u8]) {
        self.uart_model()
            .rx_queue
            .borrow_mut()
            .extend(bytes.iter().copied());
    }

    pub fn set_rx_delay(&self, polls: u32) {
        self.uart_model().rx_delay.set(polls);
    }

    pub fn starve_after(&self, polls: u32) {
        self.uart_model().starve_after.set(Some(polls));
    }

    pub fn set_stale_rx(&self, byte: u8) {
        self.uart_model().stale_rx.set(byte);
    }

    pub fn rx_pending(&self) -> usize {
        self.uart_model().rx_queue.borrow().len()
    }

    pub fn rx_reads(&self) -> usize {
        self.uart_model().rx_reads.get()
    }

    pub fn transmitted(&self) -> Vec<u8> {
        self.uart_model().transmitted.borrow().clone()
    }

    pub fn transcript(&self) -> String {
        String::from_utf8(self.transmitted()).unwrap()
    }

    pub fn sent_while_busy(&self) -> usize {
        self.uart_model().sent_while_busy.get()
    }

    /// All writes to this block as `(offset, value)`, oldest first.
    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.0
            .trace
            .borrow()
            .iter()
            .filter_map(|access| match *access {
                Access::Write {
                    device,
                    offset,
                    value,
                } if device == self.0.name => Some((offset, value)),
                _ => None,
            })
            .collect()
    }
}

impl RegisterBlock for SimBlock {
    fn read(&self, offset: usize) -> u32 {
        let scripted = self.0.scripted.borrow_mut()[offset].pop_front();
        let value = match (&self.0.model, scripted) {
            (_, Some(value)) => value,
            (Model::Uart(uart), None) if offset == STATUS => uart.read_status(),
            (Model::Uart(uart), None) if offset == RX => uart.read_rx(),
            _ => self.0.words.borrow()[offset],
        };
        self.0.trace.borrow_mut().push(Access::Read {
            device: self.0.name,
            offset,
            value,
        });
        value
    }

    fn write(&self, offset: usize, value: u32) {
        if let Model::Uart(uart) = &self.0.model {
            if offset == TX {
                uart.write_tx(value);
            }
        }
        self.0.words.borrow_mut()[offset] = value;
        self.0.trace.borrow_mut().push(Access::Write {
            device: self.0.name,
            offset,
            value,
        });
    }
}

/// The full set of peripherals, sharing one trace.
pub struct Soc {
    pub trace: Trace,
    pub led: SimBlock,
    pub uart0: SimBlock,
    pub uart1: SimBlock,
    pub gpio0: SimBlock,
    pub trng0: SimBlock,
}

impl Soc {
    pub fn new() -> Soc {
        let trace = Trace::default();
        Soc {
            led: SimBlock::plain("led", &trace),
            uart0: SimBlock::uart("uart0", &trace),
            uart1: SimBlock::uart("uart1", &trace),
            gpio0: SimBlock::plain("gpio0", &trace),
            trng0: SimBlock::plain("trng0", &trace),
            trace,
        }
    }

    pub fn devices(&self) -> DeviceInstances<SimBlock> {
        DeviceInstances::from_registers(
            self.led.clone(),
            self.uart0.clone(),
            self.uart1.clone(),
            self.gpio0.clone(),
            self.trng0.clone(),
        )
    }

    /// Names of the devices in the order they were first touched.
    pub fn device_order(&self) -> Vec<&'static str> {
        let mut order = Vec::new();
        for access in self.trace.borrow().iter() {
            let device = match *access {
                Access::Read { device, .. } | Access::Write { device, .. } => device,
            };
            if !order.contains(&device) {
                order.push(device);
            }
        }
        order
    }
}

pub fn sim_uart() -> (leosoc_sys::uart::Uart<SimBlock>, SimBlock) {
    let trace = Trace::default();
    let block = SimBlock::uart("uart", &trace);
    (leosoc_sys::uart::Uart::from_registers(block.clone()), block)
}
