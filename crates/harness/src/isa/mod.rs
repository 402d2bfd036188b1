//! Instruction set support for stimulus generation and checking.
//!
//! This module provides:
//! 1. **Tables:** RV32I major opcodes and function codes.
//! 2. **Fields:** Register and function-code extraction from raw words.
//! 3. **Oracle:** Pure bit-level helpers (sign extension, immediate reassembly, shifts)
//!    and the reference results expected from the core.
//! 4. **Encoders:** Builders for the instruction words tests load into memory.
//! 5. **Disassembler:** Mnemonic rendering for diagnostics.

/// Instruction disassembler for diagnostics.
pub mod disasm;

/// Instruction word encoders.
pub mod encode;

/// Instruction field extraction.
pub mod instruction;

/// Bit-level oracle helpers and reference ALU.
pub mod oracle;

/// RV32I base integer opcodes and function codes.
pub mod rv32i;

pub use oracle::AluOp;
