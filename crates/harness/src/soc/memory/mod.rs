//! Word-addressed system memory.
//!
//! This module implements the RAM behind a bus slot. It provides:
//! 1. **Storage:** One `u32` per word of the owning range, zero-initialised.
//! 2. **Back-door:** `read`/`write` at absolute bus addresses for preloading programs.
//! 3. **Protocol:** Zero-wait-state `evaluate`: always ready, serves any selected active transfer.
//!
//! Only aligned 32-bit words are modeled. Addresses are turned into indices with
//! `(addr - begin) / 4`; an address outside the range indexes out of the buffer and panics.

use tracing::trace;

use crate::common::AddressRange;
use crate::soc::signals::BusSignals;
use crate::soc::traits::BusDevice;

/// Largest range a memory device will allocate host storage for (256 MiB).
pub const MAX_MEMORY_BYTES: u64 = 256 * 1024 * 1024;

/// Zero-wait-state RAM.
#[derive(Debug)]
pub struct MemoryDevice {
    /// Bus address of word 0.
    offset: u32,
    words: Vec<u32>,
}

impl MemoryDevice {
    /// Creates a zeroed memory covering `range`.
    ///
    /// A range whose size is not a whole number of words still backs its last partial word.
    /// The harness checks `range.size` against [`MAX_MEMORY_BYTES`] before building one.
    pub fn new(range: AddressRange) -> Self {
        Self {
            offset: range.begin,
            words: vec![0; range.size.div_ceil(4) as usize],
        }
    }

    /// Number of words of storage.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    fn index(&self, addr: u32) -> usize {
        (addr.wrapping_sub(self.offset) / 4) as usize
    }
}

impl BusDevice for MemoryDevice {
    fn write(&mut self, addr: u32, value: u32) {
        let idx = self.index(addr);
        self.words[idx] = value;
    }

    fn read(&mut self, addr: u32) -> u32 {
        self.words[self.index(addr)]
    }

    fn evaluate(&mut self, bus: BusSignals<'_>) {
        *bus.ready = true;
        if !bus.is_transfer() {
            return;
        }
        if bus.write {
            trace!(
                addr = format_args!("{:#010x}", bus.addr),
                data = format_args!("{:#010x}", bus.write_data),
                "memory write"
            );
            self.write(bus.addr, bus.write_data);
        } else {
            let value = self.read(bus.addr);
            trace!(
                addr = format_args!("{:#010x}", bus.addr),
                data = format_args!("{value:#010x}"),
                "memory read"
            );
            *bus.read_data = value;
        }
    }
}
