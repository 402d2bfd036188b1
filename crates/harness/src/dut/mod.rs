//! Device under test.
//!
//! The harness never looks inside the core. It drives clock and reset, calls `eval` after
//! every input change, lets devices react to the `BusPins` the core exposes, and peeks at
//! architectural state for checking. Any signal-level model (or a software stand-in) that
//! implements [`SimulatedCore`] can be verified.
//!
//! This module provides:
//! 1. **Interface:** `SimulatedCore` and `ResetPolarity`.
//! 2. **Reference model:** `ReferenceCore`, a multi-cycle RV32E core and AHB-Lite master.
//! 3. **Support:** The reference core's register file and instruction decoder.

/// Instruction decoder for the reference core.
pub mod decode;

/// General-purpose register file.
pub mod gpr;

/// Behavioural RV32E reference core.
pub mod reference;

pub use reference::ReferenceCore;

use crate::soc::BusPins;

/// Which reset line level holds the core in reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetPolarity {
    /// Reset is asserted while the line is high.
    ActiveHigh,
    /// Reset is asserted while the line is low.
    ActiveLow,
}

impl ResetPolarity {
    /// Line level that asserts reset.
    #[inline(always)]
    pub const fn asserted(self) -> bool {
        matches!(self, Self::ActiveHigh)
    }

    /// Line level that releases reset.
    #[inline(always)]
    pub const fn released(self) -> bool {
        !self.asserted()
    }
}

/// Interface a simulated core exposes to the harness.
///
/// The associated constants mirror what a generated RTL model fixes at compile time: the
/// number of bus slave slots, the boundaries between them, the register file size, and
/// the reset polarity of the top-level port. Implementors own all of their state.
pub trait SimulatedCore: 'static {
    /// Number of bus slave slots.
    const DEVICE_COUNT: usize;
    /// Ascending upper bounds of every slot except the last (`DEVICE_COUNT - 1` entries).
    const ADDRESS_MAP: &'static [u32];
    /// Number of architectural integer registers.
    const REGISTER_COUNT: usize;
    /// Reset polarity of the top-level reset port.
    const RESET_POLARITY: ResetPolarity;

    /// Drives the clock input.
    fn set_clock(&mut self, level: bool);
    /// Drives the reset input.
    fn set_reset(&mut self, level: bool);
    /// Settles the model for its current inputs; rising clock edges are acted on here.
    fn eval(&mut self);
    /// Tears the model down. No other method is called afterwards.
    fn finalize(&mut self);

    /// The bus pins shared with the device slots.
    fn bus(&self) -> &BusPins;
    /// Mutable access to the bus pins, for device evaluation.
    fn bus_mut(&mut self) -> &mut BusPins;

    /// Reads integer register `idx`.
    fn read_register(&self, idx: usize) -> u32;
    /// Overwrites integer register `idx`.
    fn write_register(&mut self, idx: usize, value: u32);
    /// The most recently fetched instruction word.
    fn read_instruction(&self) -> u32;
    /// The current program counter.
    fn read_program_counter(&self) -> u32;

    /// Renders an instruction word for diagnostics, if the model can.
    fn disassemble(&self, _word: u32) -> Option<String> {
        None
    }
}
