//! General-purpose register file.
//!
//! This module implements the integer register file of the reference core. It performs the
//! following:
//! 1. **Storage:** `N` 32-bit registers (16 for RV32E).
//! 2. **Invariant Enforcement:** Register `x0` reads as zero and ignores writes.
//! 3. **Debugging:** A formatted dump of the complete register state.

use std::fmt;

/// General-purpose register file with `N` registers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr<const N: usize> {
    regs: [u32; N],
}

impl<const N: usize> Default for Gpr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Gpr<N> {
    /// Creates a register file with every register zeroed.
    pub const fn new() -> Self {
        Self { regs: [0; N] }
    }

    /// Reads register `idx`; `x0` always reads 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= N`.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes register `idx`; writes to `x0` are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= N`.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }
}

impl<const N: usize> fmt::Display for Gpr<N> {
    /// Prints registers four per line in hexadecimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.regs.chunks(4).enumerate() {
            for (j, val) in chunk.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "x{:<2}={val:#010x}", i * 4 + j)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
