//! Common types shared across the harness.
//!
//! This module provides:
//! 1. **Address Ranges:** The half-open span each bus device owns.
//! 2. **Error Handling:** The `HarnessError` type for construction and I/O failures.

/// Address range definitions.
pub mod addr;

/// Error types.
pub mod error;

pub use addr::AddressRange;
pub use error::HarnessError;
