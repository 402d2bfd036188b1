//! Reference core instruction decoder.
//!
//! Splits a 32-bit RV32 encoding into a `Decoded` record: opcode, register indices,
//! function codes, and the sign-extended immediate of whichever format the opcode uses.
//! Immediates are rebuilt with native signed arithmetic so the result is independent of
//! the mask-based helpers in `isa::oracle` that tests check against.

use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting the I-Type immediate (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for the S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-Type immediate low field (imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for the S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Total number of bits in the S-Type immediate.
const S_IMM_BITS: u32 = 12;

/// Bit mask selecting the B-Type immediate bits that sit in place in the word.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_IMM_10_5_MASK: u32 = 0x3F;

/// Total number of bits in the B-Type immediate.
const B_IMM_BITS: u32 = 13;

/// Bit mask for the U-Type immediate (bits 12-31).
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Total number of bits in the J-Type immediate.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_IMM_BITS: u32 = 21;

/// Decoded RV32 instruction fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw instruction word.
    pub raw: u32,
    /// Major opcode (bits 0-6).
    pub opcode: u32,
    /// Destination register.
    pub rd: usize,
    /// First source register.
    pub rs1: usize,
    /// Second source register.
    pub rs2: usize,
    /// Minor opcode (bits 12-14).
    pub funct3: u32,
    /// Function code (bits 25-31).
    pub funct7: u32,
    /// Sign-extended immediate; zero for formats without one.
    pub imm: i32,
}

/// Decodes a RISC-V instruction into its component fields.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => decode_i_type_imm(inst),
        opcodes::OP_STORE => decode_s_type_imm(inst),
        opcodes::OP_BRANCH => decode_b_type_imm(inst),
        opcodes::OP_LUI | opcodes::OP_AUIPC => (inst & U_IMM_MASK) as i32,
        opcodes::OP_JAL => decode_j_type_imm(inst),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm,
    }
}

fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = inst >> S_IMM_HIGH_SHIFT;
    sign_extend((high << 5) | low, S_IMM_BITS)
}

fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> 7) & 1;
    let bits_4_1 = (inst >> 8) & 0xF;
    let bits_10_5 = (inst >> 25) & B_IMM_10_5_MASK;
    let bit_12 = inst >> 31;
    sign_extend(
        (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1),
        B_IMM_BITS,
    )
}

fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 1;
    let bits_10_1 = (inst >> 21) & 0x3FF;
    let bit_20 = inst >> 31;
    sign_extend(
        (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1),
        J_IMM_BITS,
    )
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    (val as i32) << shift >> shift
}
