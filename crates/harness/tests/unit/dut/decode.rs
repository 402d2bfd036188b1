//! # Decoder Tests
//!
//! The reference core's decoder sign-extends with native arithmetic; these pin it to the
//! encoders at the edges of every immediate format.

use rvharness_core::dut::decode::decode;
use rvharness_core::isa::encode;
use rvharness_core::isa::rv32i::opcodes;

#[test]
fn immediates_of_each_format() {
    assert_eq!(decode(encode::lw(3, 1, (-8i32) as u32)).imm, -8);
    assert_eq!(decode(encode::sw(1, 2, (-4i32) as u32)).imm, -4);
    assert_eq!(decode(encode::sw(1, 2, 2047)).imm, 2047);
    assert_eq!(decode(encode::b_type(0, 1, 2, (-4096i32) as u32)).imm, -4096);
    assert_eq!(decode(encode::b_type(0, 1, 2, 18)).imm, 18);
    assert_eq!(decode(encode::jal(1, (-8i32) as u32)).imm, -8);
    assert_eq!(decode(encode::jal(1, 0x000F_FFFE)).imm, 0x000F_FFFE);
    assert_eq!(decode(encode::lui(5, 0xFFFFF)).imm, 0xFFFF_F000u32 as i32);
}

#[test]
fn register_fields() {
    let d = decode(encode::sw(7, 9, 0));
    assert_eq!((d.rs1, d.rs2, d.opcode), (7, 9, opcodes::OP_STORE));
}
