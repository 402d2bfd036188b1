//! Bus devices other than memory.
//!
//! The fabric never fails a lookup, so every slot without real storage behind it is
//! filled with a device from here.

/// Null (not-connected) device.
pub mod null;

pub use null::NullDevice;

pub use crate::soc::traits::BusDevice;
