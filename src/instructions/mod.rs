//! # Instruction Implementations
//!
//! This module contains the semantic implementations of all 6502
//! instructions, organized by category:
//!
//! - `load_store`: LDA, LDX, LDY, STA, STX, STY
//! - `transfer`: TAX, TAY, TXA, TYA, TXS, TSX
//! - `stack`: PHA, PHP, PLA, PLP
//! - `alu`: ADC, SBC, CMP, CPX, CPY, AND, ORA, EOR, BIT
//! - `inc_dec`: INC, DEC, INX, INY, DEX, DEY
//! - `shifts`: ASL, LSR, ROL, ROR
//! - `branches`: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - `control`: JMP, JSR, RTS, BRK, RTI, NOP
//! - `flags`: CLC, SEC, CLI, SEI, CLV, CLD, SED
//!
//! Handlers receive the CPU and the pre-resolved operand; cycle accounting
//! for the base cost and page-cross penalties lives in `Cpu::step`, while
//! data-dependent extra cycles (taken branches, decimal adjust) are accrued
//! by the handlers themselves.
//!
//! The undocumented composite opcodes (LAX, SAX, DCP, ISB, SLO, RLA, SRE,
//! RRA) are built from pairs of documented handlers and are only active
//! with the `undocumented` cargo feature; without it their slots execute
//! as NOPs.

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;
use crate::opcodes::Op;

/// Routes a decoded instruction to its handler.
pub(crate) fn dispatch<M: MemoryBus>(cpu: &mut Cpu<M>, op: Op, operand: &Operand) {
    match op {
        // Load/store
        Op::Lda => load_store::lda(cpu, operand),
        Op::Ldx => load_store::ldx(cpu, operand),
        Op::Ldy => load_store::ldy(cpu, operand),
        Op::Sta => load_store::sta(cpu, operand),
        Op::Stx => load_store::stx(cpu, operand),
        Op::Sty => load_store::sty(cpu, operand),

        // Register transfers
        Op::Tax => transfer::tax(cpu),
        Op::Tay => transfer::tay(cpu),
        Op::Txa => transfer::txa(cpu),
        Op::Tya => transfer::tya(cpu),
        Op::Txs => transfer::txs(cpu),
        Op::Tsx => transfer::tsx(cpu),

        // Stack
        Op::Pha => stack::pha(cpu),
        Op::Php => stack::php(cpu),
        Op::Pla => stack::pla(cpu),
        Op::Plp => stack::plp(cpu),

        // Arithmetic and logic
        Op::Adc => alu::adc(cpu, operand),
        Op::Sbc => alu::sbc(cpu, operand),
        Op::Cmp => alu::cmp(cpu, operand),
        Op::Cpx => alu::cpx(cpu, operand),
        Op::Cpy => alu::cpy(cpu, operand),
        Op::And => alu::and(cpu, operand),
        Op::Ora => alu::ora(cpu, operand),
        Op::Eor => alu::eor(cpu, operand),
        Op::Bit => alu::bit(cpu, operand),

        // Increments and decrements
        Op::Inc => inc_dec::inc(cpu, operand),
        Op::Dec => inc_dec::dec(cpu, operand),
        Op::Inx => inc_dec::inx(cpu),
        Op::Iny => inc_dec::iny(cpu),
        Op::Dex => inc_dec::dex(cpu),
        Op::Dey => inc_dec::dey(cpu),

        // Shifts and rotates
        Op::Asl => shifts::asl(cpu, operand),
        Op::Lsr => shifts::lsr(cpu, operand),
        Op::Rol => shifts::rol(cpu, operand),
        Op::Ror => shifts::ror(cpu, operand),

        // Branches
        Op::Bcc => branches::bcc(cpu, operand),
        Op::Bcs => branches::bcs(cpu, operand),
        Op::Beq => branches::beq(cpu, operand),
        Op::Bne => branches::bne(cpu, operand),
        Op::Bmi => branches::bmi(cpu, operand),
        Op::Bpl => branches::bpl(cpu, operand),
        Op::Bvc => branches::bvc(cpu, operand),
        Op::Bvs => branches::bvs(cpu, operand),

        // Control flow
        Op::Jmp => control::jmp(cpu, operand),
        Op::Jsr => control::jsr(cpu, operand),
        Op::Rts => control::rts(cpu),
        Op::Brk => control::brk(cpu),
        Op::Rti => control::rti(cpu),
        Op::Nop => control::nop(),

        // Flag manipulation
        Op::Clc => flags::clc(cpu),
        Op::Sec => flags::sec(cpu),
        Op::Cli => flags::cli(cpu),
        Op::Sei => flags::sei(cpu),
        Op::Clv => flags::clv(cpu),
        Op::Cld => flags::cld(cpu),
        Op::Sed => flags::sed(cpu),

        // Undocumented composites, each a pair of documented operations
        // on the same operand
        Op::Lax => {
            if cfg!(feature = "undocumented") {
                load_store::lda(cpu, operand);
                load_store::ldx(cpu, operand);
            }
        }
        Op::Sax => {
            if cfg!(feature = "undocumented") {
                let value = cpu.a() & cpu.x();
                cpu.store_value(operand, value);
            }
        }
        Op::Dcp => {
            if cfg!(feature = "undocumented") {
                inc_dec::dec(cpu, operand);
                alu::cmp(cpu, operand);
            }
        }
        Op::Isb => {
            if cfg!(feature = "undocumented") {
                inc_dec::inc(cpu, operand);
                alu::sbc(cpu, operand);
            }
        }
        Op::Slo => {
            if cfg!(feature = "undocumented") {
                shifts::asl(cpu, operand);
                alu::ora(cpu, operand);
            }
        }
        Op::Rla => {
            if cfg!(feature = "undocumented") {
                shifts::rol(cpu, operand);
                alu::and(cpu, operand);
            }
        }
        Op::Sre => {
            if cfg!(feature = "undocumented") {
                shifts::lsr(cpu, operand);
                alu::eor(cpu, operand);
            }
        }
        Op::Rra => {
            if cfg!(feature = "undocumented") {
                shifts::ror(cpu, operand);
                alu::adc(cpu, operand);
            }
        }
    }
}
