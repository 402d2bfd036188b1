//! # Encoder and Disassembler Tests
//!
//! Known encodings from the RV32I manual, and their rendering back to assembly.

use pretty_assertions::assert_eq;
use rvharness_core::isa::disasm::disassemble;
use rvharness_core::isa::encode;
use rvharness_core::isa::oracle::AluOp;
use rvharness_core::isa::rv32i::funct3;

#[test]
fn known_encodings() {
    assert_eq!(encode::nop(), 0x0000_0013);
    // addi a0, x0, 10
    assert_eq!(encode::alu_imm(AluOp::Add, 10, 0, 10), 0x00A0_0513);
    // add x1, x2, x3
    assert_eq!(encode::alu_reg(AluOp::Add, 1, 2, 3), 0x0031_00B3);
    // sub x1, x2, x3
    assert_eq!(encode::alu_reg(AluOp::Sub, 1, 2, 3), 0x4031_00B3);
    // srai x5, x6, 3
    assert_eq!(encode::alu_imm(AluOp::Sra, 5, 6, 3), 0x4033_5293);
    // lui x5, 0x12345
    assert_eq!(encode::lui(5, 0x12345), 0x1234_52B7);
    // sw x2, 8(x1)
    assert_eq!(encode::sw(1, 2, 8), 0x0020_A423);
    // lw x3, 8(x1)
    assert_eq!(encode::lw(3, 1, 8), 0x0080_A183);
}

#[test]
fn disassembly_of_each_format() {
    assert_eq!(disassemble(encode::nop()), "nop");
    assert_eq!(disassemble(encode::alu_reg(AluOp::Sub, 1, 2, 3)), "sub ra, sp, gp");
    assert_eq!(disassemble(encode::alu_imm(AluOp::Sra, 5, 6, 3)), "srai t0, t1, 3");
    assert_eq!(disassemble(encode::alu_imm(AluOp::Add, 10, 0, 0xFFF)), "addi a0, zero, -1");
    assert_eq!(disassemble(encode::lw(3, 1, 8)), "lw gp, 8(ra)");
    assert_eq!(disassemble(encode::sw(1, 2, (-4i32) as u32)), "sw sp, -4(ra)");
    assert_eq!(disassemble(encode::jal(1, (-8i32) as u32)), "jal ra, -8");
    assert_eq!(disassemble(encode::lui(5, 0x12345)), "lui t0, 0x12345");
    assert_eq!(disassemble(encode::b_type(funct3::BNE, 1, 2, 16)), "bne ra, sp, 16");
}

#[test]
fn zero_word_is_unknown() {
    assert_eq!(disassemble(0), "unknown (0x00000000)");
}
