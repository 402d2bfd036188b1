//! Instruction word encoders.
//!
//! Builds the raw 32-bit words test cases preload into memory. Register indices are masked
//! to 5 bits and immediates to their field width; offsets are taken as two's-complement
//! words so callers can pass `oracle` results straight through.

use crate::isa::instruction::{FUNCT3_SHIFT, FUNCT7_SHIFT, RD_SHIFT, REG_MASK, RS1_SHIFT, RS2_SHIFT};
use crate::isa::oracle::{AluOp, SHAMT_MASK, bit_field, binary_ones};
use crate::isa::rv32i::{funct3, opcodes};

/// Encodes an R-type instruction.
pub const fn r_type(opcode: u32, rd: u32, f3: u32, rs1: u32, rs2: u32, f7: u32) -> u32 {
    (f7 & 0x7F) << FUNCT7_SHIFT
        | (rs2 & REG_MASK) << RS2_SHIFT
        | (rs1 & REG_MASK) << RS1_SHIFT
        | (f3 & 0x7) << FUNCT3_SHIFT
        | (rd & REG_MASK) << RD_SHIFT
        | (opcode & 0x7F)
}

/// Encodes an I-type instruction with a 12-bit immediate.
pub const fn i_type(opcode: u32, rd: u32, f3: u32, rs1: u32, imm: u32) -> u32 {
    (imm & binary_ones(12)) << 20
        | (rs1 & REG_MASK) << RS1_SHIFT
        | (f3 & 0x7) << FUNCT3_SHIFT
        | (rd & REG_MASK) << RD_SHIFT
        | (opcode & 0x7F)
}

/// Encodes an S-type instruction with a 12-bit immediate.
pub const fn s_type(opcode: u32, f3: u32, rs1: u32, rs2: u32, imm: u32) -> u32 {
    bit_field(imm, 11, 5) << 25
        | (rs2 & REG_MASK) << RS2_SHIFT
        | (rs1 & REG_MASK) << RS1_SHIFT
        | (f3 & 0x7) << FUNCT3_SHIFT
        | bit_field(imm, 4, 0) << 7
        | (opcode & 0x7F)
}

/// Encodes a B-type instruction with a 13-bit even offset.
pub const fn b_type(f3: u32, rs1: u32, rs2: u32, offset: u32) -> u32 {
    bit_field(offset, 12, 12) << 31
        | bit_field(offset, 10, 5) << 25
        | (rs2 & REG_MASK) << RS2_SHIFT
        | (rs1 & REG_MASK) << RS1_SHIFT
        | (f3 & 0x7) << FUNCT3_SHIFT
        | bit_field(offset, 4, 1) << 8
        | bit_field(offset, 11, 11) << 7
        | opcodes::OP_BRANCH
}

/// Encodes a U-type instruction from a 20-bit upper immediate.
pub const fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & binary_ones(20)) << 12 | (rd & REG_MASK) << RD_SHIFT | (opcode & 0x7F)
}

/// `lui rd, imm20`.
pub const fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(opcodes::OP_LUI, rd, imm20)
}

/// `auipc rd, imm20`.
pub const fn auipc(rd: u32, imm20: u32) -> u32 {
    u_type(opcodes::OP_AUIPC, rd, imm20)
}

/// `jal rd, offset` with a 21-bit even offset.
pub const fn jal(rd: u32, offset: u32) -> u32 {
    bit_field(offset, 20, 20) << 31
        | bit_field(offset, 10, 1) << 21
        | bit_field(offset, 11, 11) << 20
        | bit_field(offset, 19, 12) << 12
        | (rd & REG_MASK) << RD_SHIFT
        | opcodes::OP_JAL
}

/// `jalr rd, imm(rs1)`.
pub const fn jalr(rd: u32, rs1: u32, imm: u32) -> u32 {
    i_type(opcodes::OP_JALR, rd, funct3::JALR, rs1, imm)
}

/// `lw rd, imm(rs1)`.
pub const fn lw(rd: u32, rs1: u32, imm: u32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, funct3::LW, rs1, imm)
}

/// `sw rs2, imm(rs1)`.
pub const fn sw(rs1: u32, rs2: u32, imm: u32) -> u32 {
    s_type(opcodes::OP_STORE, funct3::SW, rs1, rs2, imm)
}

/// `addi x0, x0, 0`.
pub const fn nop() -> u32 {
    i_type(opcodes::OP_IMM, 0, funct3::ADD_SUB, 0, 0)
}

/// Register-register form of `op`: `op rd, rs1, rs2`.
pub const fn alu_reg(op: AluOp, rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, op.funct3(), rs1, rs2, op.funct7())
}

/// Register-immediate form of `op`: `opi rd, rs1, imm`.
///
/// Shifts encode the low 5 bits of `imm` as the shift amount with `funct7` above it;
/// every other operation takes the low 12 bits of `imm`. `AluOp::Sub` has no immediate
/// form and encodes as ADDI.
pub const fn alu_imm(op: AluOp, rd: u32, rs1: u32, imm: u32) -> u32 {
    let field = if op.is_shift() {
        op.funct7() << 5 | (imm & SHAMT_MASK)
    } else {
        imm
    };
    i_type(opcodes::OP_IMM, rd, op.funct3(), rs1, field)
}
