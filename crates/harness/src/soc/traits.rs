//! Device trait for bus-attached components.
//!
//! This module defines the `BusDevice` trait implemented by everything the fabric routes to.
//! It provides:
//! 1. **Back-door access:** Word `read`/`write` used to preload and inspect storage.
//! 2. **Bus protocol:** `evaluate`, called once per cycle with the device's pin view.
//! 3. **Layout:** `DeviceKind`, naming the variants a device table is built from.

use std::fmt;

use serde::Deserialize;

use crate::common::AddressRange;
use crate::soc::devices::NullDevice;
use crate::soc::memory::MemoryDevice;
use crate::soc::signals::BusSignals;

/// Trait for devices attached to a slave slot of the bus.
///
/// `read` and `write` bypass protocol timing entirely; `evaluate` is the only path the core
/// uses, and runs every cycle whether or not the device is selected.
pub trait BusDevice: fmt::Debug {
    /// Stores one word at the absolute bus address `addr`.
    fn write(&mut self, addr: u32, value: u32);
    /// Loads one word from the absolute bus address `addr`.
    fn read(&mut self, addr: u32) -> u32;
    /// Reacts to this cycle's settled bus signals.
    fn evaluate(&mut self, bus: BusSignals<'_>);
}

/// Device variants a device table can be built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum DeviceKind {
    /// Word-addressed zero-wait-state RAM.
    Memory,
    /// Always-ready sink for unmapped ranges.
    Null,
}

impl DeviceKind {
    /// Layout of the main design: RAM in slot 0, everything else unmapped.
    pub const MAIN_LAYOUT: [Self; 2] = [Self::Memory, Self::Null];

    /// Instantiates this device over `range`.
    pub fn build(self, range: AddressRange) -> Box<dyn BusDevice> {
        match self {
            Self::Memory => Box::new(MemoryDevice::new(range)),
            Self::Null => Box::new(NullDevice),
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Null => write!(f, "null"),
        }
    }
}
