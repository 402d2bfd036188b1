//! Instruction disassembler for RV32I.
//!
//! Converts a 32-bit instruction word into a mnemonic string for trace logs, program
//! listings, and failed-assertion diagnostics. Only the base integer opcodes the harness
//! exercises are recognised; anything else renders as `unknown`.
//!
//! # Usage
//!
//! ```
//! use rvharness_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A0_0513), "addi a0, zero, 10");
//! ```

use crate::isa::encode::nop;
use crate::isa::instruction::InstructionBits;
use crate::isa::oracle::{b_offset, i_immediate, jal_offset, s_immediate};
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index.
#[inline]
fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown (0x...)"` for unrecognised
/// encodings.
pub fn disassemble(inst: u32) -> String {
    let rd = xreg(inst.rd());
    let rs1 = xreg(inst.rs1());
    let rs2 = xreg(inst.rs2());
    let imm_i = i_immediate(inst) as i32;

    match inst.opcode() {
        op::OP_REG => {
            let mn = match (inst.funct3(), inst.funct7()) {
                (f3::ADD_SUB, f7::DEFAULT) => "add",
                (f3::ADD_SUB, f7::ALT) => "sub",
                (f3::SLL, f7::DEFAULT) => "sll",
                (f3::SLT, f7::DEFAULT) => "slt",
                (f3::SLTU, f7::DEFAULT) => "sltu",
                (f3::XOR, f7::DEFAULT) => "xor",
                (f3::SRL_SRA, f7::DEFAULT) => "srl",
                (f3::SRL_SRA, f7::ALT) => "sra",
                (f3::OR, f7::DEFAULT) => "or",
                (f3::AND, f7::DEFAULT) => "and",
                _ => return unknown(inst),
            };
            format!("{mn} {rd}, {rs1}, {rs2}")
        }

        op::OP_IMM => {
            let shamt = inst.rs2();
            let mn = match inst.funct3() {
                f3::ADD_SUB if inst == nop() => return "nop".to_string(),
                f3::ADD_SUB => "addi",
                f3::SLT => "slti",
                f3::SLTU => "sltiu",
                f3::XOR => "xori",
                f3::OR => "ori",
                f3::AND => "andi",
                f3::SLL => return format!("slli {rd}, {rs1}, {shamt}"),
                f3::SRL_SRA => {
                    let mn = if inst.funct7() == f7::ALT { "srai" } else { "srli" };
                    return format!("{mn} {rd}, {rs1}, {shamt}");
                }
                _ => return unknown(inst),
            };
            format!("{mn} {rd}, {rs1}, {imm_i}")
        }

        op::OP_LOAD if inst.funct3() == f3::LW => format!("lw {rd}, {imm_i}({rs1})"),

        op::OP_STORE if inst.funct3() == f3::SW => {
            format!("sw {rs2}, {}({rs1})", s_immediate(inst) as i32)
        }

        op::OP_BRANCH => {
            let mn = match inst.funct3() {
                f3::BEQ => "beq",
                f3::BNE => "bne",
                f3::BLT => "blt",
                f3::BGE => "bge",
                f3::BLTU => "bltu",
                f3::BGEU => "bgeu",
                _ => return unknown(inst),
            };
            format!("{mn} {rs1}, {rs2}, {}", b_offset(inst) as i32)
        }

        op::OP_LUI => format!("lui {rd}, {:#x}", inst >> 12),
        op::OP_AUIPC => format!("auipc {rd}, {:#x}", inst >> 12),
        op::OP_JAL => format!("jal {rd}, {}", jal_offset(inst) as i32),
        op::OP_JALR if inst.funct3() == f3::JALR => format!("jalr {rd}, {imm_i}({rs1})"),

        _ => unknown(inst),
    }
}

fn unknown(inst: u32) -> String {
    format!("unknown ({inst:#010x})")
}
