//! Design harness: clock, reset, and per-cycle device evaluation.
//!
//! This module implements the top-level sequencer. It performs:
//! 1. **Construction:** Builds the device table from the core's compiled address map, then
//!    asserts reset and drives the clock low so the model starts from a defined state.
//! 2. **Cycling:** Rising half-cycle, falling half-cycle, then every device evaluated once
//!    against the settled pins, in ascending slot order.
//! 3. **Back-door access:** Word reads/writes routed through the fabric, and register,
//!    instruction, and program-counter peeks into the core.
//!
//! Dropping the harness finalizes the core.

use tracing::debug;

use crate::common::HarnessError;
use crate::config::HarnessConfig;
use crate::dut::SimulatedCore;
use crate::soc::{BusFabric, DeviceKind};

/// One simulated core plus the bus devices attached to its slave slots.
#[derive(Debug)]
pub struct DesignHarness<C: SimulatedCore> {
    core: C,
    fabric: BusFabric,
    cycles: u64,
}

impl<C: SimulatedCore> DesignHarness<C> {
    /// Attaches `layout` (one device kind per slot) to `core`.
    ///
    /// The core is left with reset asserted and the clock low, evaluated once.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::AddressMap` if the core's boundary list does not describe
    /// `DEVICE_COUNT` slots, `HarnessError::BusSlots` if its pin block has a different slot
    /// count, and any error `BusFabric::new` reports for `layout`.
    pub fn new(mut core: C, layout: &[DeviceKind]) -> Result<Self, HarnessError> {
        if C::ADDRESS_MAP.len() + 1 != C::DEVICE_COUNT {
            return Err(HarnessError::AddressMap {
                boundaries: C::ADDRESS_MAP.to_vec(),
                expected: C::DEVICE_COUNT.saturating_sub(1),
            });
        }
        if core.bus().slots() != C::DEVICE_COUNT {
            return Err(HarnessError::BusSlots {
                expected: C::DEVICE_COUNT,
                found: core.bus().slots(),
            });
        }
        let fabric = BusFabric::new(C::ADDRESS_MAP, layout)?;

        core.set_reset(C::RESET_POLARITY.asserted());
        core.set_clock(false);
        core.eval();
        debug!(devices = fabric.len(), polarity = ?C::RESET_POLARITY, "design harness constructed");

        Ok(Self {
            core,
            fabric,
            cycles: 0,
        })
    }

    /// Attaches the device layout named by `config`.
    ///
    /// # Errors
    ///
    /// See [`DesignHarness::new`].
    pub fn from_config(core: C, config: &HarnessConfig) -> Result<Self, HarnessError> {
        Self::new(core, &config.devices)
    }

    /// Holds reset asserted for one full cycle, then releases it and settles the model.
    pub fn reset(&mut self) {
        self.core.set_reset(C::RESET_POLARITY.asserted());
        self.cycle();
        self.core.set_reset(C::RESET_POLARITY.released());
        self.core.eval();
        debug!(cycle = self.cycles, "reset released");
    }

    /// Advances the design by one clock cycle.
    pub fn cycle(&mut self) {
        self.core.set_clock(true);
        self.core.eval();
        self.core.set_clock(false);
        self.core.eval();
        self.fabric.evaluate(self.core.bus_mut());
        self.cycles += 1;
    }

    /// Runs `n` cycles.
    pub fn do_cycles(&mut self, n: u64) {
        for _ in 0..n {
            self.cycle();
        }
    }

    /// Cycles run since construction, including those spent in reset.
    pub const fn cycle_count(&self) -> u64 {
        self.cycles
    }

    /// Back-door write of one word into whichever device owns `addr`.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        self.fabric.write_word(addr, value);
    }

    /// Back-door write of consecutive words starting at `addr`.
    pub fn write_words(&mut self, addr: u32, words: impl IntoIterator<Item = u32>) {
        let mut at = addr;
        for word in words {
            self.fabric.write_word(at, word);
            at = at.wrapping_add(4);
        }
    }

    /// Back-door read of one word from whichever device owns `addr`.
    pub fn read_word(&mut self, addr: u32) -> u32 {
        self.fabric.read_word(addr)
    }

    /// Reads architectural register `idx`.
    pub fn read_register(&self, idx: usize) -> u32 {
        self.core.read_register(idx)
    }

    /// Overwrites architectural register `idx`.
    pub fn write_register(&mut self, idx: usize, value: u32) {
        self.core.write_register(idx, value);
    }

    /// Every architectural register, `x0` first.
    pub fn registers(&self) -> Vec<u32> {
        (0..C::REGISTER_COUNT).map(|i| self.core.read_register(i)).collect()
    }

    /// The most recently fetched instruction word.
    pub fn read_instruction(&self) -> u32 {
        self.core.read_instruction()
    }

    /// The core's program counter.
    pub fn read_program_counter(&self) -> u32 {
        self.core.read_program_counter()
    }

    /// Renders `word` with the core's disassembler, or as hex if it has none.
    pub fn disassemble(&self, word: u32) -> String {
        self.core
            .disassemble(word)
            .unwrap_or_else(|| format!("{word:#010x}"))
    }

    /// The simulated core.
    pub const fn core(&self) -> &C {
        &self.core
    }

    /// The device table.
    pub const fn fabric(&self) -> &BusFabric {
        &self.fabric
    }
}

impl<C: SimulatedCore> Drop for DesignHarness<C> {
    fn drop(&mut self) {
        self.core.finalize();
    }
}
