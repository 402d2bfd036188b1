//! RV32I base integer instruction set constants.

/// funct3 codes.
pub mod funct3;
/// funct7 codes.
pub mod funct7;
/// Major opcodes.
pub mod opcodes;
