//! Unit tests for the instruction oracle and encoders.


/// Bit-math properties of the oracle helpers.
pub mod oracle_properties;

/// Known encodings and their disassembly.
pub mod encoding;
