//! Cycle-accurate bus and clock harness for RTL CPU cores.
//!
//! This crate drives a simulated CPU core one clock edge at a time and provides:
//! 1. **SoC:** Address decode over a partitioned 32-bit map, plus memory and null bus devices.
//! 2. **Simulation:** The `DesignHarness` clock/reset sequencer and a raw program loader.
//! 3. **DUT:** The `SimulatedCore` interface and a behavioural RV32E reference core.
//! 4. **ISA:** Opcode tables, instruction encoders, a disassembler, and the bit-level oracle.
//! 5. **Verification:** Seeded `TestContext`, the `TestRunner`, and the built-in test suite.

/// Common types (address ranges, harness errors).
pub mod common;
/// Harness configuration (seeding, reporting, device layout).
pub mod config;
/// Simulated core interface and the reference RV32E model.
pub mod dut;
/// Instruction set tables, encoders, disassembler, and oracle helpers.
pub mod isa;
/// Clock/reset orchestration and program loading.
pub mod sim;
/// Bus fabric, bus signals, and bus devices.
pub mod soc;
/// Randomized test context, runner, and the built-in suite.
pub mod verify;

/// Root configuration type; use `HarnessConfig::default()` or load from JSON.
pub use crate::config::HarnessConfig;
/// Harness driving one simulated core and its bus devices.
pub use crate::sim::DesignHarness;
/// Interface every simulated core exposes to the harness.
pub use crate::dut::SimulatedCore;
/// Per-test-case randomness and assertion bookkeeping.
pub use crate::verify::{TestContext, TestRunner};
