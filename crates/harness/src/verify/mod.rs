//! Randomized verification framework.
//!
//! This module provides:
//! 1. **Context:** `TestContext`, one per test case, owning a seeded PRNG and assertion tallies.
//! 2. **Runner:** `TestRunner`, building a fresh harness and context for every registered case.
//! 3. **Report:** Coloured pass/fail lines.
//! 4. **Suite:** The built-in cases for the main design.

/// Per-case randomness and assertion bookkeeping.
pub mod context;

/// Coloured report lines.
pub mod report;

/// Test case registry and execution.
pub mod runner;

/// Built-in test cases.
pub mod suite;

pub use context::TestContext;
pub use runner::{CaseOutcome, RunSummary, TestCase, TestRunner};
