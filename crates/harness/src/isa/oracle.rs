//! Bit-level oracle for instruction checking.
//!
//! Everything here is a pure function of fixed-width unsigned integers. Test cases use these
//! helpers both to build stimulus and to compute the value the core should produce, so the
//! math deliberately avoids signed Rust arithmetic: sign extension and arithmetic shifts are
//! assembled from masks, the same way the hardware does it.

use crate::isa::rv32i::{funct3, funct7};

/// Width of a register and of an instruction word.
pub const XLEN: u32 = 32;

/// Mask of legal shift amounts (5 bits).
pub const SHAMT_MASK: u32 = XLEN - 1;

/// Returns a word with the low `n` bits set (`n` in `0..=32`).
#[inline(always)]
pub const fn binary_ones(n: u32) -> u32 {
    if n >= XLEN { u32::MAX } else { (1 << n) - 1 }
}

/// Extracts bits `hi..=lo` of `value`, right-aligned.
#[inline(always)]
pub const fn bit_field(value: u32, hi: u32, lo: u32) -> u32 {
    (value >> lo) & binary_ones(hi - lo + 1)
}

/// Sign-extends the low `bits` bits of `value` to 32 bits.
///
/// Bits above `bits` in the input are ignored. `bits` must be in `1..=32`.
#[inline(always)]
pub const fn sign_extend(value: u32, bits: u32) -> u32 {
    let field = value & binary_ones(bits);
    if bit_field(field, bits - 1, bits - 1) == 1 {
        field | !binary_ones(bits)
    } else {
        field
    }
}

/// Arithmetic right shift of `a` by the low 5 bits of `b`.
///
/// Fills the vacated high bits with copies of bit 31.
#[inline(always)]
pub const fn shiftr_arithmetic(a: u32, b: u32) -> u32 {
    let b = b & SHAMT_MASK;
    if b == 0 {
        return a;
    }
    (a >> b) | ((a >> 31) * (binary_ones(XLEN) << (XLEN - b)))
}

/// Signed comparison `a < b` on two's-complement words, without a signed cast.
#[inline(always)]
pub const fn signed_less_than(a: u32, b: u32) -> bool {
    let sign = 1 << (XLEN - 1);
    (a ^ sign) < (b ^ sign)
}

/// I-type immediate: bits 20–31, sign-extended.
#[inline(always)]
pub const fn i_immediate(inst: u32) -> u32 {
    sign_extend(bit_field(inst, 31, 20), 12)
}

/// S-type immediate: bits 25–31 → 5–11, bits 7–11 → 0–4, sign-extended.
#[inline(always)]
pub const fn s_immediate(inst: u32) -> u32 {
    sign_extend((bit_field(inst, 31, 25) << 5) | bit_field(inst, 11, 7), 12)
}

/// B-type offset: bit 31 → 12, bit 7 → 11, bits 25–30 → 5–10, bits 8–11 → 1–4, sign-extended.
#[inline(always)]
pub const fn b_offset(inst: u32) -> u32 {
    let raw = (bit_field(inst, 31, 31) << 12)
        | (bit_field(inst, 7, 7) << 11)
        | (bit_field(inst, 30, 25) << 5)
        | (bit_field(inst, 11, 8) << 1);
    sign_extend(raw, 13)
}

/// U-type immediate: bits 12–31 in place, low 12 bits clear.
#[inline(always)]
pub const fn u_immediate(inst: u32) -> u32 {
    inst & !binary_ones(12)
}

/// JAL offset reassembled from the instruction word.
///
/// Bits 21–30 become offset bits 1–10, bit 20 becomes bit 11, bits 12–19 stay in place,
/// and bit 31 is sign-extended over bits 20–31. Bit 0 is always clear.
#[inline(always)]
pub const fn jal_offset(inst: u32) -> u32 {
    let bits_10_1 = bit_field(inst, 30, 21) << 1;
    let bit_11 = bit_field(inst, 20, 20) << 11;
    let bits_19_12 = bit_field(inst, 19, 12) << 12;
    let bits_31_20 = sign_extend(bit_field(inst, 31, 31), 1) << 20;
    bits_31_20 | bits_19_12 | bit_11 | bits_10_1
}

/// Whether a branch with the given `funct3` is taken for operands `a` and `b`.
///
/// Returns `None` for a `funct3` that is not a branch condition.
pub const fn branch_taken(f3: u32, a: u32, b: u32) -> Option<bool> {
    match f3 {
        funct3::BEQ => Some(a == b),
        funct3::BNE => Some(a != b),
        funct3::BLT => Some(signed_less_than(a, b)),
        funct3::BGE => Some(!signed_less_than(a, b)),
        funct3::BLTU => Some(a < b),
        funct3::BGEU => Some(a >= b),
        _ => None,
    }
}

/// Integer ALU operations of the register-register and register-immediate forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Addition.
    Add,
    /// Subtraction (register form only).
    Sub,
    /// Bitwise XOR.
    Xor,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Signed set-less-than.
    Slt,
    /// Unsigned set-less-than.
    Sltu,
    /// Logical left shift.
    Sll,
    /// Logical right shift.
    Srl,
    /// Arithmetic right shift.
    Sra,
}

impl AluOp {
    /// Every operation, in encoding order of the register form.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
    ];

    /// Operations that also have a register-immediate form (everything but SUB).
    pub const IMMEDIATE: [Self; 9] = [
        Self::Add,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
    ];

    /// The `funct3` shared by both forms.
    pub const fn funct3(self) -> u32 {
        match self {
            Self::Add | Self::Sub => funct3::ADD_SUB,
            Self::Sll => funct3::SLL,
            Self::Slt => funct3::SLT,
            Self::Sltu => funct3::SLTU,
            Self::Xor => funct3::XOR,
            Self::Srl | Self::Sra => funct3::SRL_SRA,
            Self::Or => funct3::OR,
            Self::And => funct3::AND,
        }
    }

    /// The `funct7` of the register form (also the upper immediate bits of SRAI).
    pub const fn funct7(self) -> u32 {
        match self {
            Self::Sub | Self::Sra => funct7::ALT,
            _ => funct7::DEFAULT,
        }
    }

    /// Whether this is a shift, whose immediate form carries a 5-bit shift amount.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }

    /// Lower-case mnemonic of the register form.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Xor => "xor",
            Self::Or => "or",
            Self::And => "and",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
        }
    }

    /// Lower-case mnemonic of the register-immediate form.
    pub const fn immediate_mnemonic(self) -> &'static str {
        match self {
            Self::Add | Self::Sub => "addi",
            Self::Xor => "xori",
            Self::Or => "ori",
            Self::And => "andi",
            Self::Slt => "slti",
            Self::Sltu => "sltiu",
            Self::Sll => "slli",
            Self::Srl => "srli",
            Self::Sra => "srai",
        }
    }

    /// The value the core must write to `rd` for operands `a` and `b`.
    pub const fn expected(self, a: u32, b: u32) -> u32 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Sub => a.wrapping_sub(b),
            Self::Xor => a ^ b,
            Self::Or => a | b,
            Self::And => a & b,
            Self::Slt => signed_less_than(a, b) as u32,
            Self::Sltu => (a < b) as u32,
            Self::Sll => a << (b & SHAMT_MASK),
            Self::Srl => a >> (b & SHAMT_MASK),
            Self::Sra => shiftr_arithmetic(a, b),
        }
    }
}
