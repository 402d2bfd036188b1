//! Harness error definitions.
//!
//! Errors here cover everything that can go wrong before a test case runs: reading
//! configuration or program files, and building a device table that does not fit the
//! core's compiled address map. Misuse during a run (bad register index, address outside a
//! device) is a programming error and panics instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or constructing the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A configuration or program file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// File that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration document was not valid JSON for `HarnessConfig`.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The device layout does not have one entry per device slot of the core.
    #[error("device layout has {found} entries but the core exposes {expected} device slots")]
    DeviceLayout {
        /// Slot count reported by the core.
        expected: usize,
        /// Layout entries supplied.
        found: usize,
    },

    /// The core's bus pin block does not have one slot per device.
    #[error("core drives {found} bus slots but declares {expected} devices")]
    BusSlots {
        /// `DEVICE_COUNT` declared by the core.
        expected: usize,
        /// Slots in the core's `BusPins`.
        found: usize,
    },

    /// The core's boundary list does not have `DEVICE_COUNT - 1` ascending entries.
    #[error("address map {boundaries:x?} is not a strictly ascending list of {expected} boundaries")]
    AddressMap {
        /// Boundary list reported by the core.
        boundaries: Vec<u32>,
        /// Number of boundaries required.
        expected: usize,
    },

    /// A memory device was mapped onto a range too large to back with host memory.
    #[error("memory device {slot} spans {size:#x} bytes (limit {limit:#x})")]
    MemoryTooLarge {
        /// Device slot index.
        slot: usize,
        /// Range size in bytes.
        size: u64,
        /// Largest supported memory range.
        limit: u64,
    },
}
