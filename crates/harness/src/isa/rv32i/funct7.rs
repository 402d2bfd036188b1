//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects the alternate encoding of
//! register-register operations and of the immediate right shifts.

/// Default encoding (ADD, SRL, SRLI, ...).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding (SUB, SRA, SRAI).
pub const ALT: u32 = 0b0100000;
