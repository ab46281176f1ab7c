//! # Load and Store Instructions
//!
//! LDA, LDX, LDY set the zero and negative flags from the loaded value;
//! STA, STX, STY affect no flags.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;

pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let value = cpu.fetch_value(operand);
    cpu.status.set_zero(value as u16);
    cpu.status.set_negative(value as u16);
    cpu.a = value;
}

pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let value = cpu.fetch_value(operand);
    cpu.status.set_zero(value as u16);
    cpu.status.set_negative(value as u16);
    cpu.x = value;
}

pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let value = cpu.fetch_value(operand);
    cpu.status.set_zero(value as u16);
    cpu.status.set_negative(value as u16);
    cpu.y = value;
}

pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    cpu.store_value(operand, cpu.a);
}

pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    cpu.store_value(operand, cpu.x);
}

pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    cpu.store_value(operand, cpu.y);
}
