//! Bus fabric: address decode and dispatch.
//!
//! This module implements the slave side of the bus. It provides:
//! 1. **Device table:** One device per slot, built once from the core's boundary list.
//! 2. **Decode:** Address-to-slot lookup over ranges that partition the 32-bit space.
//! 3. **Back-door routing:** Word reads/writes forwarded to the owning device.
//! 4. **Evaluation:** Every device evaluated once per cycle, in ascending slot order.

use tracing::debug;

use crate::common::{AddressRange, HarnessError};
use crate::soc::memory::MAX_MEMORY_BYTES;
use crate::soc::signals::BusPins;
use crate::soc::traits::{BusDevice, DeviceKind};

/// Device table plus the boundary list it was derived from.
#[derive(Debug)]
pub struct BusFabric {
    boundaries: Vec<u32>,
    ranges: Vec<AddressRange>,
    devices: Vec<Box<dyn BusDevice>>,
}

impl BusFabric {
    /// Builds the device table for a core's address map.
    ///
    /// # Arguments
    ///
    /// * `boundaries` - Ascending upper bounds of every slot except the last.
    /// * `layout` - Device kind for each slot; must have `boundaries.len() + 1` entries.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::AddressMap` for a boundary list that is not strictly ascending,
    /// `HarnessError::DeviceLayout` when `layout` does not cover every slot, and
    /// `HarnessError::MemoryTooLarge` when a memory slot cannot be backed.
    pub fn new(boundaries: &[u32], layout: &[DeviceKind]) -> Result<Self, HarnessError> {
        if !boundaries.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(HarnessError::AddressMap {
                boundaries: boundaries.to_vec(),
                expected: boundaries.len(),
            });
        }
        let ranges = AddressRange::partition(boundaries);
        if layout.len() != ranges.len() {
            return Err(HarnessError::DeviceLayout {
                expected: ranges.len(),
                found: layout.len(),
            });
        }

        let mut devices = Vec::with_capacity(ranges.len());
        for (slot, (&kind, &range)) in layout.iter().zip(&ranges).enumerate() {
            if kind == DeviceKind::Memory && range.size > MAX_MEMORY_BYTES {
                return Err(HarnessError::MemoryTooLarge {
                    slot,
                    size: range.size,
                    limit: MAX_MEMORY_BYTES,
                });
            }
            debug!(
                slot,
                %kind,
                begin = format_args!("{:#010x}", range.begin),
                size = format_args!("{:#x}", range.size),
                "attaching bus device"
            );
            devices.push(kind.build(range));
        }

        Ok(Self {
            boundaries: boundaries.to_vec(),
            ranges,
            devices,
        })
    }

    /// Number of device slots.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Always `false`: a fabric has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Ranges in slot order.
    pub fn ranges(&self) -> &[AddressRange] {
        &self.ranges
    }

    /// Returns the slot owning `addr`.
    ///
    /// Scans the boundaries in ascending order and picks the first slot whose upper bound
    /// exceeds the address; addresses past every boundary belong to the last slot.
    pub fn slot_of(&self, addr: u32) -> usize {
        self.boundaries
            .iter()
            .position(|&upper| addr < upper)
            .unwrap_or(self.boundaries.len())
    }

    /// Returns the device owning `addr`.
    pub fn device_mut(&mut self, addr: u32) -> &mut dyn BusDevice {
        let slot = self.slot_of(addr);
        self.devices[slot].as_mut()
    }

    /// Back-door word write to whichever device owns `addr`.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        self.device_mut(addr).write(addr, value);
    }

    /// Back-door word read from whichever device owns `addr`.
    pub fn read_word(&mut self, addr: u32) -> u32 {
        self.device_mut(addr).read(addr)
    }

    /// Evaluates every device against its slot of `pins`, slot 0 first.
    pub fn evaluate(&mut self, pins: &mut BusPins) {
        for (slot, device) in self.devices.iter_mut().enumerate() {
            device.evaluate(pins.port(slot));
        }
    }
}
