//! Mock implementations of the simulated-core interface.

pub mod core;
