//! Unit tests for the bus fabric and devices.

/// Per-cycle device behaviour driven through a core's pins.
pub mod bus_protocol;
