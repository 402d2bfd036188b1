//! System-on-Chip (SoC) Components.
//!
//! This module organizes everything on the slave side of the core's bus: the pin block
//! shared with the core, the fabric that decodes addresses to device slots, and the
//! devices themselves.

/// Always-ready null device for unmapped ranges.
pub mod devices;

/// Address decode and dispatch.
pub mod interconnect;

/// Word-addressed memory device.
pub mod memory;

/// Bus pins and per-slot signal views.
pub mod signals;

/// Device trait and device kinds.
pub mod traits;

pub use interconnect::BusFabric;
pub use signals::{BusPins, BusSignals, Response, TransferType};
pub use traits::{BusDevice, DeviceKind};
