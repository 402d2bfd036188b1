//! Shared helpers for harness tests.

pub mod mocks;
