//! # Oracle Properties
//!
//! The oracle builds sign extension and arithmetic shifts out of masks. These properties
//! check it against native signed arithmetic, and check that every immediate the encoders
//! pack is reassembled unchanged.

use proptest::prelude::*;
use rvharness_core::isa::encode;
use rvharness_core::isa::instruction::InstructionBits;
use rvharness_core::isa::oracle::{self, AluOp};

proptest! {
    #[test]
    fn sign_extend_matches_native_shift(value in any::<u32>(), bits in 1u32..=32) {
        let shift = 32 - bits;
        let native = ((value << shift) as i32 >> shift) as u32;
        prop_assert_eq!(oracle::sign_extend(value, bits), native);
    }

    #[test]
    fn arithmetic_shift_matches_native(a in any::<u32>(), b in any::<u32>()) {
        let native = ((a as i32) >> (b & 31)) as u32;
        prop_assert_eq!(oracle::shiftr_arithmetic(a, b), native);
    }

    #[test]
    fn signed_compare_matches_native(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(oracle::signed_less_than(a, b), (a as i32) < (b as i32));
    }

    #[test]
    fn jal_offset_survives_encoding(raw in any::<u32>(), rd in 0u32..32) {
        let offset = oracle::sign_extend(raw & 0x1F_FFFE, 21);
        let inst = encode::jal(rd, offset);
        prop_assert_eq!(oracle::jal_offset(inst), offset);
        prop_assert_eq!(inst.rd(), rd as usize);
    }

    #[test]
    fn branch_offset_survives_encoding(raw in any::<u32>()) {
        let offset = oracle::sign_extend(raw & 0x1FFE, 13);
        prop_assert_eq!(oracle::b_offset(encode::b_type(0, 1, 2, offset)), offset);
    }

    #[test]
    fn store_and_load_immediates_survive_encoding(raw in any::<u32>()) {
        let imm = oracle::sign_extend(raw, 12);
        prop_assert_eq!(oracle::s_immediate(encode::sw(1, 2, imm)), imm);
        prop_assert_eq!(oracle::i_immediate(encode::lw(1, 2, imm)), imm);
    }

    #[test]
    fn shift_immediates_keep_their_funct7(shamt in 0u32..32, rd in 1u32..16, rs1 in 1u32..16) {
        let srai = encode::alu_imm(AluOp::Sra, rd, rs1, shamt);
        prop_assert_eq!(srai.funct7(), AluOp::Sra.funct7());
        prop_assert_eq!(srai.rs2() as u32, shamt);
    }
}

#[test]
fn u_immediate_clears_the_low_twelve_bits() {
    assert_eq!(oracle::u_immediate(encode::lui(7, 0xABCDE)), 0xABCD_E000);
}

#[test]
fn branch_conditions_cover_signed_and_unsigned() {
    use rvharness_core::isa::rv32i::funct3;

    let minus_one = u32::MAX;
    assert_eq!(oracle::branch_taken(funct3::BLT, minus_one, 0), Some(true));
    assert_eq!(oracle::branch_taken(funct3::BLTU, minus_one, 0), Some(false));
    assert_eq!(oracle::branch_taken(funct3::BGE, 0, minus_one), Some(true));
    assert_eq!(oracle::branch_taken(funct3::BGEU, 0, minus_one), Some(false));
    assert_eq!(oracle::branch_taken(0b010, 0, 0), None);
}
