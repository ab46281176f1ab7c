//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 processor
//! state and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: packed NV-BDIZC byte (`Status`)
//! - **Cycle counters**: `clockticks` (monotonic) and `clockgoal` (budget
//!   target for `execute`)
//!
//! ## Execution Model
//!
//! - `step()`: execute exactly one instruction (what the debugger uses)
//! - `execute(tickcount)`: run instructions until a cycle budget is reached
//!
//! `step()` never blocks and never fails: undefined opcodes execute as NOPs
//! (or as the undocumented composites with the `undocumented` feature), and
//! memory accesses always succeed with 16-bit wraparound.

use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;
use crate::status::Status;
use log::trace;

/// Bottom of the fixed stack page.
pub(crate) const STACK_BASE: u16 = 0x0100;

/// Reset vector location (0xFFFC/0xFFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// NMI vector location (0xFFFA/0xFFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// IRQ/BRK vector location (0xFFFE/0xFFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// A resolved addressing-mode operand.
///
/// Produced once per instruction by `Cpu::resolve_operand` and consumed by
/// the instruction handlers; the page-cross flag feeds the cycle penalty
/// accounting in `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// Implicit mode: the instruction operates on registers only.
    None,

    /// The operand is the accumulator itself.
    Accumulator,

    /// A resolved effective address, with the page-cross flag from the
    /// indexed computation.
    Address { ea: u16, page_crossed: bool },

    /// Sign-extended branch displacement, applied to the post-operand PC.
    Relative { offset: u16 },
}

impl Operand {
    pub(crate) fn page_crossed(&self) -> bool {
        matches!(
            self,
            Operand::Address {
                page_crossed: true,
                ..
            }
        )
    }
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its memory backend and is generic over it via the
/// `MemoryBus` trait, which makes memory-mapped I/O test doubles trivial.
///
/// # Examples
///
/// ```
/// use dbg6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // reset vector -> 0x8000
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0xA9); // LDA #$05
/// memory.write(0x8001, 0x05);
///
/// let mut cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// cpu.step();
/// assert_eq!(cpu.a(), 0x05);
/// assert_eq!(cpu.pc(), 0x8002);
/// ```
pub struct Cpu<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives the full stack address)
    pub(crate) sp: u8,

    /// Packed status register
    pub(crate) status: Status,

    /// Total CPU cycles executed
    pub(crate) clockticks: u64,

    /// Cycle target used by `execute`
    pub(crate) clockgoal: u64,

    /// Total instructions executed
    pub(crate) instructions: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a new CPU over the given memory bus in power-on reset state.
    ///
    /// The PC is loaded from the reset vector at 0xFFFC/0xFFFD, SP is set to
    /// 0xFD, A/X/Y are zeroed and the always-set status bit is forced.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            status: Status::power_on(),
            clockticks: 0,
            clockgoal: 0,
            instructions: 0,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Resets the CPU: PC from the reset vector, SP = 0xFD, A = X = Y = 0,
    /// always-set status bit forced. No other side effects.
    pub fn reset(&mut self) {
        self.pc = self.memory.read_u16(RESET_VECTOR);
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.status.insert(Status::UNUSED);
    }

    /// Executes exactly one instruction.
    ///
    /// Fetches the opcode at PC (post-incrementing), resolves the addressing
    /// mode (which may consume 0-2 more bytes), executes the instruction's
    /// semantic effect, and accrues the cycle cost: base cycles plus one
    /// when the opcode is penalty-eligible and the address computation
    /// crossed a page boundary.
    pub fn step(&mut self) {
        self.step_inner();
        self.clockgoal = self.clockticks;
    }

    /// Runs instructions until `tickcount` more cycles have elapsed.
    ///
    /// Used for coarse-grained scheduling; the debugger's instruction-level
    /// stepping always uses `step` instead. The final instruction may
    /// overshoot the goal by its own cost.
    pub fn execute(&mut self, tickcount: u64) {
        self.clockgoal += tickcount;
        while self.clockticks < self.clockgoal {
            self.step_inner();
        }
    }

    fn step_inner(&mut self) {
        let opcode = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        self.status.insert(Status::UNUSED);

        let meta = &OPCODE_TABLE[opcode as usize];
        let operand = self.resolve_operand(meta.addressing_mode);
        trace!(
            "step: {:04X} {} ({:02X})",
            self.pc.wrapping_sub(1),
            meta.mnemonic,
            opcode
        );

        instructions::dispatch(self, meta.op, &operand);

        self.clockticks += meta.base_cycles as u64;
        if meta.penalty_eligible && operand.page_crossed() {
            self.clockticks += 1;
        }
        self.instructions += 1;
    }

    /// Delivers a hardware IRQ: pushes PC (high byte first) and status,
    /// sets the interrupt-disable flag and vectors through 0xFFFE/0xFFFF.
    ///
    /// This is the mechanism by which the host delivers a keystroke to the
    /// emulated program.
    pub fn irq(&mut self) {
        self.push16(self.pc);
        self.push8(self.status.bits());
        self.status.insert(Status::IRQ_DISABLE);
        self.pc = self.memory.read_u16(IRQ_VECTOR);
    }

    /// Delivers a non-maskable interrupt, vectoring through 0xFFFA/0xFFFB.
    pub fn nmi(&mut self) {
        self.push16(self.pc);
        self.push8(self.status.bits());
        self.status.insert(Status::IRQ_DISABLE);
        self.pc = self.memory.read_u16(NMI_VECTOR);
    }

    // ========== Addressing-mode resolution ==========

    pub(crate) fn resolve_operand(&mut self, mode: crate::AddressingMode) -> Operand {
        use crate::AddressingMode::*;
        match mode {
            Implicit => Operand::None,
            Accumulator => Operand::Accumulator,
            Immediate => {
                let ea = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Address {
                    ea,
                    page_crossed: false,
                }
            }
            ZeroPage => {
                let ea = self.fetch8() as u16;
                Operand::Address {
                    ea,
                    page_crossed: false,
                }
            }
            ZeroPageX => {
                // Indexing wraps within the zero page
                let ea = (self.fetch8().wrapping_add(self.x)) as u16;
                Operand::Address {
                    ea,
                    page_crossed: false,
                }
            }
            ZeroPageY => {
                let ea = (self.fetch8().wrapping_add(self.y)) as u16;
                Operand::Address {
                    ea,
                    page_crossed: false,
                }
            }
            Relative => {
                let mut offset = self.fetch8() as u16;
                if offset & 0x80 != 0 {
                    offset |= 0xFF00; // sign-extend
                }
                Operand::Relative { offset }
            }
            Absolute => {
                let ea = self.fetch16();
                Operand::Address {
                    ea,
                    page_crossed: false,
                }
            }
            AbsoluteX => {
                let base = self.fetch16();
                let ea = base.wrapping_add(self.x as u16);
                Operand::Address {
                    ea,
                    page_crossed: base & 0xFF00 != ea & 0xFF00,
                }
            }
            AbsoluteY => {
                let base = self.fetch16();
                let ea = base.wrapping_add(self.y as u16);
                Operand::Address {
                    ea,
                    page_crossed: base & 0xFF00 != ea & 0xFF00,
                }
            }
            Indirect => {
                let ptr = self.fetch16();
                // NMOS wraparound bug: the high pointer byte is fetched
                // from the same page, not from ptr + 1
                let ptr_hi = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let ea =
                    self.memory.read(ptr) as u16 | ((self.memory.read(ptr_hi) as u16) << 8);
                Operand::Address {
                    ea,
                    page_crossed: false,
                }
            }
            IndirectX => {
                // Pointer lookup wraps within the zero page; the final
                // address does not
                let zp = self.fetch8().wrapping_add(self.x);
                let lo = self.memory.read(zp as u16) as u16;
                let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
                Operand::Address {
                    ea: (hi << 8) | lo,
                    page_crossed: false,
                }
            }
            IndirectY => {
                let zp = self.fetch8();
                let lo = self.memory.read(zp as u16) as u16;
                let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                let ea = base.wrapping_add(self.y as u16);
                Operand::Address {
                    ea,
                    page_crossed: base & 0xFF00 != ea & 0xFF00,
                }
            }
        }
    }

    fn fetch8(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8() as u16;
        let hi = self.fetch8() as u16;
        (hi << 8) | lo
    }

    /// Reads the operand value: accumulator for accumulator mode, memory
    /// at the effective address otherwise.
    pub(crate) fn fetch_value(&self, operand: &Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Address { ea, .. } => self.memory.read(*ea),
            Operand::None | Operand::Relative { .. } => 0,
        }
    }

    /// Writes the operand value back: accumulator or memory.
    pub(crate) fn store_value(&mut self, operand: &Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Address { ea, .. } => self.memory.write(*ea, value),
            Operand::None | Operand::Relative { .. } => {}
        }
    }

    // ========== Stack helpers ==========

    pub(crate) fn push8(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE + self.sp as u16)
    }

    pub(crate) fn push16(&mut self, value: u16) {
        self.memory
            .write(STACK_BASE + self.sp as u16, (value >> 8) as u8);
        self.memory.write(
            STACK_BASE + self.sp.wrapping_sub(1) as u16,
            (value & 0xFF) as u8,
        );
        self.sp = self.sp.wrapping_sub(2);
    }

    pub(crate) fn pull16(&mut self) -> u16 {
        let lo = self.memory.read(STACK_BASE + self.sp.wrapping_add(1) as u16) as u16;
        let hi = self.memory.read(STACK_BASE + self.sp.wrapping_add(2) as u16) as u16;
        self.sp = self.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    // ========== Register access ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP; the stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the packed status register.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the total number of CPU cycles executed.
    pub fn cycles(&self) -> u64 {
        self.clockticks
    }

    /// Returns the total number of instructions executed.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the packed status register.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Shared read access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> Cpu<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        Cpu::new(memory)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert!(cpu.status().contains(Status::UNUSED));
    }

    #[test]
    fn test_reset_reloads_vector_and_clears_registers() {
        let mut cpu = setup_cpu();
        cpu.set_a(0x42);
        cpu.set_x(0x43);
        cpu.set_y(0x44);
        cpu.set_pc(0x1234);
        cpu.memory_mut().write(0xFFFC, 0x00);
        cpu.memory_mut().write(0xFFFD, 0x90);

        cpu.reset();

        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert!(cpu.status().contains(Status::UNUSED));
    }

    #[test]
    fn test_stack_push_pull_round_trip() {
        let mut cpu = setup_cpu();
        let sp_before = cpu.sp();

        cpu.push16(0xBEEF);
        assert_eq!(cpu.sp(), sp_before.wrapping_sub(2));
        assert_eq!(cpu.pull16(), 0xBEEF);
        assert_eq!(cpu.sp(), sp_before);

        cpu.push8(0x5A);
        assert_eq!(cpu.pull8(), 0x5A);
        assert_eq!(cpu.sp(), sp_before);
    }

    #[test]
    fn test_irq_pushes_state_and_vectors() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0xFFFE, 0x00);
        cpu.memory_mut().write(0xFFFF, 0x20);
        cpu.set_pc(0x1234);
        let status_before = cpu.status();

        cpu.irq();

        assert_eq!(cpu.pc(), 0x2000);
        assert!(cpu.status().contains(Status::IRQ_DISABLE));
        // Stack holds PC high, PC low, then status
        assert_eq!(cpu.memory().read(0x01FD), 0x12);
        assert_eq!(cpu.memory().read(0x01FC), 0x34);
        assert_eq!(cpu.memory().read(0x01FB), status_before.bits());
    }

    #[test]
    fn test_nmi_uses_its_own_vector() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0xFFFA, 0x00);
        cpu.memory_mut().write(0xFFFB, 0x30);

        cpu.nmi();

        assert_eq!(cpu.pc(), 0x3000);
        assert!(cpu.status().contains(Status::IRQ_DISABLE));
    }

    #[test]
    fn test_execute_runs_to_cycle_goal() {
        let mut cpu = setup_cpu();
        // Fill with NOPs (2 cycles each)
        for addr in 0x8000u16..0x8020 {
            cpu.memory_mut().write(addr, 0xEA);
        }

        cpu.execute(10);

        assert_eq!(cpu.cycles(), 10);
        assert_eq!(cpu.instructions(), 5);
    }

    #[test]
    fn test_unused_flag_forced_on_every_fetch() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xEA);
        cpu.set_status(Status::empty());

        cpu.step();

        assert!(cpu.status().contains(Status::UNUSED));
    }
}
