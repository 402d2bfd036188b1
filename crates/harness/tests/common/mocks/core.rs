use std::cell::RefCell;
use std::rc::Rc;

use rvharness_core::SimulatedCore;
use rvharness_core::dut::ResetPolarity;
use rvharness_core::soc::{BusPins, TransferType};

/// One call the harness made into the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Clock(bool),
    Reset(bool),
    /// `eval` with the clock level and the slot-0 ready line seen at that moment.
    Eval { clock: bool, ready: bool },
    Finalize,
}

/// Shared call log, readable after the harness (and the core with it) is dropped.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Active-high, three-slot core that records every call and can script its bus pins.
#[derive(Debug)]
pub struct RecordingCore {
    log: EventLog,
    pins: BusPins,
    clock: bool,
    regs: [u32; 4],
    /// Master outputs driven on every rising edge.
    pub script: Option<(usize, u32, bool, u32)>,
}

impl RecordingCore {
    pub fn new() -> (Self, EventLog) {
        let log = EventLog::default();
        let core = Self {
            log: Rc::clone(&log),
            pins: BusPins::new(Self::DEVICE_COUNT),
            clock: false,
            regs: [0; 4],
            script: None,
        };
        (core, log)
    }

    /// A core whose pin block has `slots` slots regardless of `DEVICE_COUNT`.
    pub fn with_slots(slots: usize) -> (Self, EventLog) {
        let (mut core, log) = Self::new();
        core.pins = BusPins::new(slots);
        (core, log)
    }

    /// Drives a single-slot transfer on every rising edge: `(slot, addr, write, data)`.
    pub fn scripted(slot: usize, addr: u32, write: bool, data: u32) -> (Self, EventLog) {
        let (mut core, log) = Self::new();
        core.script = Some((slot, addr, write, data));
        (core, log)
    }
}

impl SimulatedCore for RecordingCore {
    const DEVICE_COUNT: usize = 3;
    const ADDRESS_MAP: &'static [u32] = &[0x100, 0x200];
    const REGISTER_COUNT: usize = 4;
    const RESET_POLARITY: ResetPolarity = ResetPolarity::ActiveHigh;

    fn set_clock(&mut self, level: bool) {
        self.clock = level;
        self.log.borrow_mut().push(Event::Clock(level));
    }

    fn set_reset(&mut self, level: bool) {
        self.log.borrow_mut().push(Event::Reset(level));
    }

    fn eval(&mut self) {
        if self.clock {
            if let Some((slot, addr, write, data)) = self.script {
                self.pins.select.fill(false);
                self.pins.select[slot] = true;
                self.pins.addr = addr;
                self.pins.write = write;
                self.pins.write_data = data;
                self.pins.trans = TransferType::NonSeq;
            }
        }
        self.log.borrow_mut().push(Event::Eval {
            clock: self.clock,
            ready: self.pins.slave_ready[0],
        });
    }

    fn finalize(&mut self) {
        self.log.borrow_mut().push(Event::Finalize);
    }

    fn bus(&self) -> &BusPins {
        &self.pins
    }

    fn bus_mut(&mut self) -> &mut BusPins {
        &mut self.pins
    }

    fn read_register(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    fn write_register(&mut self, idx: usize, value: u32) {
        self.regs[idx] = value;
    }

    fn read_instruction(&self) -> u32 {
        0
    }

    fn read_program_counter(&self) -> u32 {
        0
    }
}
