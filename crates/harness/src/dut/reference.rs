//! Behavioural RV32E reference core.
//!
//! A non-pipelined multi-cycle core that drives the same AHB-Lite master pins a generated RTL
//! model would. All state changes happen on the rising clock edge detected inside `eval`:
//!
//! 1. **Boot:** Drive the address phase of the first fetch.
//! 2. **Fetch:** When the addressed slave is ready, latch the instruction and idle the bus.
//! 3. **Execute:** Retire non-memory instructions and drive the next fetch, or drive the
//!    address phase of a load/store.
//! 4. **Load/Store:** Retire when the data phase completes, then drive the next fetch.
//!
//! The first instruction is latched two cycles after reset and retires on the third; each
//! further instruction takes two cycles, or three for a load or store. Anything outside the
//! supported subset (including the all-zero word) halts the core.

use tracing::{debug, trace, warn};

use crate::dut::decode::{Decoded, decode};
use crate::dut::gpr::Gpr;
use crate::dut::{ResetPolarity, SimulatedCore};
use crate::isa::disasm;
use crate::isa::rv32i::{funct3, funct7, opcodes};
use crate::soc::{BusPins, Response, TransferType};

/// Address of the first instruction fetched after reset.
pub const RESET_VECTOR: u32 = 0;

const REGISTERS: usize = 16;

/// Control state advanced on every rising clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Boot,
    Fetch,
    Execute,
    Load { rd: usize },
    Store,
    Halted,
}

/// Software stand-in for the RTL core, exposing the `SimulatedCore` interface.
#[derive(Debug)]
pub struct ReferenceCore {
    clock: bool,
    last_clock: bool,
    reset_line: bool,
    phase: Phase,
    pc: u32,
    instruction: u32,
    regs: Gpr<REGISTERS>,
    pins: BusPins,
    /// Slot whose data phase completes at the next rising edge.
    data_slot: Option<usize>,
    retired: u64,
}

impl Default for ReferenceCore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceCore {
    /// Creates a core with every register and pin low, waiting for reset.
    pub fn new() -> Self {
        Self {
            clock: false,
            last_clock: false,
            reset_line: Self::RESET_POLARITY.asserted(),
            phase: Phase::Boot,
            pc: RESET_VECTOR,
            instruction: 0,
            regs: Gpr::new(),
            pins: BusPins::new(Self::DEVICE_COUNT),
            data_slot: None,
            retired: 0,
        }
    }

    /// Number of instructions retired since construction.
    pub const fn retired(&self) -> u64 {
        self.retired
    }

    /// Returns `true` once the core has stopped on an unsupported instruction or bus error.
    pub fn is_halted(&self) -> bool {
        self.phase == Phase::Halted
    }

    /// The register file, for dumps.
    pub const fn registers(&self) -> &Gpr<REGISTERS> {
        &self.regs
    }

    fn in_reset(&self) -> bool {
        self.reset_line == Self::RESET_POLARITY.asserted()
    }

    fn rising_edge(&mut self) {
        if self.in_reset() {
            self.phase = Phase::Boot;
            self.pc = RESET_VECTOR;
            self.data_slot = None;
            self.pins.master_ready = true;
            self.idle();
            return;
        }

        let ready = self.data_slot.is_none_or(|slot| self.pins.slave_ready[slot]);
        self.pins.master_ready = ready;
        if !ready {
            return;
        }

        let data = match self.data_slot.take() {
            Some(slot) if self.pins.response[slot] == Response::Error => {
                warn!(slot, pc = format_args!("{:#010x}", self.pc), "bus error response");
                self.halt();
                return;
            }
            Some(slot) => self.pins.read_data[slot],
            None => 0,
        };

        match self.phase {
            Phase::Boot => {
                self.request(self.pc, false, 0);
                self.phase = Phase::Fetch;
            }
            Phase::Fetch => {
                self.instruction = data;
                self.phase = Phase::Execute;
                self.idle();
            }
            Phase::Execute => self.execute(),
            Phase::Load { rd } => self.retire(rd, data, self.pc.wrapping_add(4)),
            Phase::Store => self.retire(0, 0, self.pc.wrapping_add(4)),
            Phase::Halted => self.idle(),
        }
    }

    fn execute(&mut self) {
        let d = decode(self.instruction);
        if !registers_in_range(&d) {
            self.halt();
            return;
        }

        let rs1 = self.regs.read(d.rs1);
        let rs2 = if uses_rs2(d.opcode) { self.regs.read(d.rs2) } else { 0 };
        let imm = d.imm as u32;
        let pc = self.pc;
        let next = pc.wrapping_add(4);

        match d.opcode {
            opcodes::OP_LUI => self.retire(d.rd, imm, next),
            opcodes::OP_AUIPC => self.retire(d.rd, pc.wrapping_add(imm), next),
            opcodes::OP_JAL => self.retire(d.rd, next, pc.wrapping_add(imm)),
            opcodes::OP_JALR if d.funct3 == funct3::JALR => {
                self.retire(d.rd, next, rs1.wrapping_add(imm) & !1);
            }
            opcodes::OP_BRANCH => match compare(d.funct3, rs1, rs2) {
                Some(true) => self.retire(0, 0, pc.wrapping_add(imm)),
                Some(false) => self.retire(0, 0, next),
                None => self.halt(),
            },
            opcodes::OP_IMM => {
                let alt = d.funct3 == funct3::SRL_SRA && d.funct7 == funct7::ALT;
                match alu(d.funct3, alt, rs1, imm) {
                    Some(value) => self.retire(d.rd, value, next),
                    None => self.halt(),
                }
            }
            opcodes::OP_REG => {
                let alt = d.funct7 == funct7::ALT;
                let legal = d.funct7 == funct7::DEFAULT
                    || (alt && matches!(d.funct3, funct3::ADD_SUB | funct3::SRL_SRA));
                match alu(d.funct3, alt, rs1, rs2).filter(|_| legal) {
                    Some(value) => self.retire(d.rd, value, next),
                    None => self.halt(),
                }
            }
            opcodes::OP_LOAD if d.funct3 == funct3::LW => {
                self.request(rs1.wrapping_add(imm), false, 0);
                self.phase = Phase::Load { rd: d.rd };
            }
            opcodes::OP_STORE if d.funct3 == funct3::SW => {
                self.request(rs1.wrapping_add(imm), true, rs2);
                self.phase = Phase::Store;
            }
            _ => self.halt(),
        }
    }

    /// Writes back `value` to `rd` (x0 discards it), moves to `next_pc` and starts its fetch.
    fn retire(&mut self, rd: usize, value: u32, next_pc: u32) {
        self.regs.write(rd, value);
        self.retired += 1;
        trace!(
            pc = format_args!("{:#010x}", self.pc),
            inst = %disasm::disassemble(self.instruction),
            rd,
            value = format_args!("{value:#010x}"),
            "retired"
        );
        self.pc = next_pc;
        self.request(next_pc, false, 0);
        self.phase = Phase::Fetch;
    }

    fn halt(&mut self) {
        warn!(
            pc = format_args!("{:#010x}", self.pc),
            inst = format_args!("{:#010x}", self.instruction),
            "core halted"
        );
        self.phase = Phase::Halted;
        self.idle();
    }

    /// Drives the address phase of a single word transfer.
    fn request(&mut self, addr: u32, write: bool, data: u32) {
        let slot = Self::ADDRESS_MAP
            .iter()
            .position(|&upper| addr < upper)
            .unwrap_or(Self::ADDRESS_MAP.len());
        self.pins.select.fill(false);
        self.pins.select[slot] = true;
        self.pins.addr = addr;
        self.pins.write = write;
        self.pins.write_data = data;
        self.pins.trans = TransferType::NonSeq;
        self.data_slot = Some(slot);
    }

    fn idle(&mut self) {
        self.pins.select.fill(false);
        self.pins.drive_idle();
    }
}

fn uses_rs2(opcode: u32) -> bool {
    matches!(opcode, opcodes::OP_REG | opcodes::OP_STORE | opcodes::OP_BRANCH)
}

fn registers_in_range(d: &Decoded) -> bool {
    d.rd < REGISTERS && d.rs1 < REGISTERS && (!uses_rs2(d.opcode) || d.rs2 < REGISTERS)
}

fn alu(f3: u32, alt: bool, a: u32, b: u32) -> Option<u32> {
    let shamt = b & 0x1F;
    let value = match (f3, alt) {
        (funct3::ADD_SUB, false) => a.wrapping_add(b),
        (funct3::ADD_SUB, true) => a.wrapping_sub(b),
        (funct3::SLL, _) => a << shamt,
        (funct3::SLT, _) => u32::from((a as i32) < (b as i32)),
        (funct3::SLTU, _) => u32::from(a < b),
        (funct3::XOR, _) => a ^ b,
        (funct3::SRL_SRA, false) => a >> shamt,
        (funct3::SRL_SRA, true) => ((a as i32) >> shamt) as u32,
        (funct3::OR, _) => a | b,
        (funct3::AND, _) => a & b,
        _ => return None,
    };
    Some(value)
}

fn compare(f3: u32, a: u32, b: u32) -> Option<bool> {
    let taken = match f3 {
        funct3::BEQ => a == b,
        funct3::BNE => a != b,
        funct3::BLT => (a as i32) < (b as i32),
        funct3::BGE => (a as i32) >= (b as i32),
        funct3::BLTU => a < b,
        funct3::BGEU => a >= b,
        _ => return None,
    };
    Some(taken)
}

impl SimulatedCore for ReferenceCore {
    const DEVICE_COUNT: usize = 2;
    const ADDRESS_MAP: &'static [u32] = &[0x0001_0000];
    const REGISTER_COUNT: usize = REGISTERS;
    const RESET_POLARITY: ResetPolarity = ResetPolarity::ActiveLow;

    fn set_clock(&mut self, level: bool) {
        self.clock = level;
    }

    fn set_reset(&mut self, level: bool) {
        self.reset_line = level;
    }

    fn eval(&mut self) {
        if self.clock && !self.last_clock {
            self.rising_edge();
        }
        self.last_clock = self.clock;
    }

    fn finalize(&mut self) {
        debug!(retired = self.retired, "reference core finalized");
    }

    fn bus(&self) -> &BusPins {
        &self.pins
    }

    fn bus_mut(&mut self) -> &mut BusPins {
        &mut self.pins
    }

    fn read_register(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    fn write_register(&mut self, idx: usize, value: u32) {
        self.regs.write(idx, value);
    }

    fn read_instruction(&self) -> u32 {
        self.instruction
    }

    fn read_program_counter(&self) -> u32 {
        self.pc
    }

    fn disassemble(&self, word: u32) -> Option<String> {
        Some(disasm::disassemble(word))
    }
}
