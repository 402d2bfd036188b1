//! Unit tests for the reference core and its building blocks.

/// Field and immediate extraction.
pub mod decode;

/// Register file behaviour and dump format.
pub mod gpr;
