//! Built-in test cases for the main design.
//!
//! Every case assumes the main device layout (RAM from address 0) and the fetch timing of a
//! non-pipelined core: the first instruction is visible two cycles after reset and retires
//! on the third, each following non-memory instruction two cycles later, and loads and
//! stores one cycle later still. Expected values come from `isa::oracle`, never from the
//! core under test.

use crate::dut::SimulatedCore;
use crate::isa::encode;
use crate::isa::oracle::{self, AluOp};
use crate::isa::rv32i::funct3;
use crate::sim::DesignHarness;
use crate::verify::context::TestContext;
use crate::verify::runner::TestCase;

/// Cycles from the end of reset until the first instruction has retired.
pub const FIRST_RETIRE: u64 = 3;
/// Cycles each further non-memory instruction adds.
pub const RETIRE_INTERVAL: u64 = 2;
/// Cycles from the end of reset until a leading store or load has retired.
pub const MEMORY_RETIRE: u64 = 4;

/// Longest run of no-ops placed ahead of a jump.
const MAX_PREFIX: u32 = 8;

/// Every built-in case, each repeating its randomized body `trials` times.
pub fn cases<C: SimulatedCore>(trials: usize) -> Vec<TestCase<C>> {
    let mut cases: Vec<TestCase<C>> = vec![
        TestCase::new("instruction fetch", fetch::<C>),
        TestCase::new("lui", move |sim, ctx| repeat(trials, sim, ctx, lui::<C>)),
        TestCase::new("auipc", move |sim, ctx| repeat(trials, sim, ctx, auipc::<C>)),
        TestCase::new("jal", move |sim, ctx| repeat(trials, sim, ctx, jal::<C>)),
        TestCase::new("jalr", move |sim, ctx| repeat(trials, sim, ctx, jalr::<C>)),
        TestCase::new("x0 ignores writes", x0_hardwired::<C>),
    ];

    for op in AluOp::ALL {
        cases.push(TestCase::new(format!("alu {}", op.mnemonic()), move |sim, ctx| {
            repeat(trials, sim, ctx, |sim, ctx| alu_register(op, sim, ctx));
        }));
    }
    for op in AluOp::IMMEDIATE {
        cases.push(TestCase::new(format!("alu {}", op.immediate_mnemonic()), move |sim, ctx| {
            repeat(trials, sim, ctx, |sim, ctx| alu_immediate(op, sim, ctx));
        }));
    }

    cases.push(TestCase::new("sw then lw", move |sim, ctx| {
        repeat(trials, sim, ctx, store_load::<C>);
    }));
    for (f3, name) in [
        (funct3::BEQ, "beq"),
        (funct3::BNE, "bne"),
        (funct3::BLT, "blt"),
        (funct3::BGE, "bge"),
        (funct3::BLTU, "bltu"),
        (funct3::BGEU, "bgeu"),
    ] {
        cases.push(TestCase::new(format!("branch {name}"), move |sim, ctx| {
            repeat(trials, sim, ctx, |sim, ctx| branch(f3, sim, ctx));
        }));
    }
    cases
}

fn repeat<C: SimulatedCore>(
    trials: usize,
    sim: &mut DesignHarness<C>,
    ctx: &mut TestContext,
    body: impl Fn(&mut DesignHarness<C>, &mut TestContext),
) {
    for _ in 0..trials {
        body(sim, ctx);
    }
}

/// Cycles until instruction `k` (0-based) of a straight-line program has retired.
const fn retire_cycles(k: u32) -> u64 {
    FIRST_RETIRE + RETIRE_INTERVAL * k as u64
}

/// Random word-aligned offset that fits a sign-extended immediate of `bits` bits.
fn random_offset(ctx: &mut TestContext, bits: u32) -> u32 {
    oracle::sign_extend(ctx.random_u32() & oracle::binary_ones(bits) & !3, bits)
}

fn nops<C: SimulatedCore>(sim: &mut DesignHarness<C>, count: u32) {
    sim.write_words(0, (0..count).map(|_| encode::nop()));
}

fn fetch<C: SimulatedCore>(sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    const EXPECT: u32 = 1_234_321;
    sim.write_word(0, EXPECT);
    sim.reset();
    sim.cycle(); // address phase
    sim.cycle(); // data phase
    ctx.test_assert_eq(EXPECT, sim.read_instruction(), Some("wrong instruction fetched"));
}

fn lui<C: SimulatedCore>(sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let imm20 = ctx.random(0, 4095);
    let rd = ctx.random_reg();
    let inst = encode::lui(rd, imm20);
    sim.write_word(0, inst);
    sim.reset();
    sim.do_cycles(4);
    let context = sim.disassemble(inst);
    ctx.test_assert_eq(imm20 << 12, sim.read_register(rd as usize), Some(&context));
}

fn auipc<C: SimulatedCore>(sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let prefix = ctx.random(0, MAX_PREFIX);
    let addr = prefix * 4;
    let imm20 = ctx.random(0, oracle::binary_ones(20));
    let rd = ctx.random_reg();
    let inst = encode::auipc(rd, imm20);

    nops(sim, prefix);
    sim.write_word(addr, inst);
    sim.reset();
    sim.do_cycles(retire_cycles(prefix));

    let expected = addr.wrapping_add(oracle::u_immediate(inst));
    let context = format!("{} at {addr:#x}", sim.disassemble(inst));
    ctx.test_assert_eq(expected, sim.read_register(rd as usize), Some(&context));
}

fn jal<C: SimulatedCore>(sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let prefix = ctx.random(0, MAX_PREFIX);
    let addr = prefix * 4;
    let offset = random_offset(ctx, 21);
    let rd = ctx.random_reg();
    let inst = encode::jal(rd, offset);
    ctx.test_assert_eq(offset, oracle::jal_offset(inst), Some("jal offset reassembly"));

    nops(sim, prefix);
    sim.write_word(addr, inst);
    sim.reset();
    sim.do_cycles(retire_cycles(prefix));

    let context = format!("{} at {addr:#x}", sim.disassemble(inst));
    ctx.test_assert_eq(
        addr.wrapping_add(oracle::jal_offset(inst)),
        sim.read_program_counter(),
        Some(&format!("{context}, program counter")),
    );
    ctx.test_assert_eq(
        addr + 4,
        sim.read_register(rd as usize),
        Some(&format!("{context}, link register")),
    );
}

fn jalr<C: SimulatedCore>(sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let rs1 = ctx.random_reg();
    let rd = ctx.random_reg_exclude(&[rs1]);
    let base = ctx.random_u32();
    let imm = ctx.random(0, oracle::binary_ones(12));
    let inst = encode::jalr(rd, rs1, imm);

    sim.write_word(0, inst);
    sim.reset();
    sim.write_register(rs1 as usize, base);
    sim.do_cycles(FIRST_RETIRE);

    let target = base.wrapping_add(oracle::i_immediate(inst)) & !1;
    let context = sim.disassemble(inst);
    ctx.test_assert_eq(target, sim.read_program_counter(), Some(&context));
    ctx.test_assert_eq(4, sim.read_register(rd as usize), Some(&context));
}

fn x0_hardwired<C: SimulatedCore>(sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let imm = ctx.random(1, oracle::binary_ones(11));
    sim.write_word(0, encode::alu_imm(AluOp::Add, 0, 0, imm));
    sim.reset();
    sim.do_cycles(FIRST_RETIRE);
    ctx.test_assert_eq(0, sim.read_register(0), Some("addi x0"));
}

fn alu_register<C: SimulatedCore>(op: AluOp, sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let rs1 = ctx.random_reg();
    let rs2 = ctx.random_reg_exclude(&[rs1]);
    let rd = ctx.random_reg_exclude(&[rs1, rs2]);
    let a = ctx.random_u32();
    let b = ctx.random_u32();
    let inst = encode::alu_reg(op, rd, rs1, rs2);

    sim.write_word(0, inst);
    sim.reset();
    sim.write_register(rs1 as usize, a);
    sim.write_register(rs2 as usize, b);
    sim.do_cycles(FIRST_RETIRE);

    let context = format!("{} with {a:#010x}, {b:#010x}", sim.disassemble(inst));
    ctx.test_assert_eq(op.expected(a, b), sim.read_register(rd as usize), Some(&context));
}

fn alu_immediate<C: SimulatedCore>(op: AluOp, sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let rs1 = ctx.random_reg();
    let rd = ctx.random_reg_exclude(&[rs1]);
    let a = ctx.random_u32();
    let imm = if op.is_shift() {
        ctx.random(0, oracle::SHAMT_MASK)
    } else {
        ctx.random(0, oracle::binary_ones(12))
    };
    let inst = encode::alu_imm(op, rd, rs1, imm);

    sim.write_word(0, inst);
    sim.reset();
    sim.write_register(rs1 as usize, a);
    sim.do_cycles(FIRST_RETIRE);

    let b = if op.is_shift() { imm } else { oracle::i_immediate(inst) };
    let context = format!("{} with {a:#010x}", sim.disassemble(inst));
    ctx.test_assert_eq(op.expected(a, b), sim.read_register(rd as usize), Some(&context));
}

fn store_load<C: SimulatedCore>(sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let base_reg = ctx.random_reg();
    let value_reg = ctx.random_reg_exclude(&[base_reg]);
    let rd = ctx.random_reg_exclude(&[base_reg, value_reg]);
    // Word-aligned, far enough inside RAM that any 12-bit offset stays there.
    let base = ctx.random(0x400, 0x3BFF) * 4;
    let offset = random_offset(ctx, 12);
    let value = ctx.random_u32();
    let store = encode::sw(base_reg, value_reg, offset);
    let load = encode::lw(rd, base_reg, offset);

    sim.write_words(0, [store, load]);
    sim.reset();
    sim.write_register(base_reg as usize, base);
    sim.write_register(value_reg as usize, value);
    sim.do_cycles(MEMORY_RETIRE);

    let addr = base.wrapping_add(oracle::s_immediate(store));
    let context = format!("{} with base {base:#x}", sim.disassemble(store));
    ctx.test_assert_eq(value, sim.read_word(addr), Some(&context));

    sim.do_cycles(MEMORY_RETIRE - 1);
    let context = sim.disassemble(load);
    ctx.test_assert_eq(value, sim.read_register(rd as usize), Some(&context));
}

fn branch<C: SimulatedCore>(f3: u32, sim: &mut DesignHarness<C>, ctx: &mut TestContext) {
    let rs1 = ctx.random_reg();
    let rs2 = ctx.random_reg_exclude(&[rs1]);
    let a = ctx.random_u32();
    // One trial in four compares equal operands so BEQ/BGE/BGEU see their taken edge.
    let b = if ctx.random(0, 3) == 0 { a } else { ctx.random_u32() };
    let offset = random_offset(ctx, 13);
    let inst = encode::b_type(f3, rs1, rs2, offset);

    sim.write_word(0, inst);
    sim.reset();
    sim.write_register(rs1 as usize, a);
    sim.write_register(rs2 as usize, b);
    sim.do_cycles(FIRST_RETIRE);

    let taken = oracle::branch_taken(f3, a, b) == Some(true);
    let expected = if taken { oracle::b_offset(inst) } else { 4 };
    let context = format!("{} with {a:#010x}, {b:#010x}", sim.disassemble(inst));
    ctx.test_assert_eq(expected, sim.read_program_counter(), Some(&context));
}
