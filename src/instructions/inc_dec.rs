//! # Increment and Decrement Instructions
//!
//! INC/DEC operate on memory; INX/INY/DEX/DEY operate on the index
//! registers. All wrap at the byte boundary and set zero and negative.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;

pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let result = cpu.fetch_value(operand).wrapping_add(1);
    cpu.status.set_zero(result as u16);
    cpu.status.set_negative(result as u16);
    cpu.store_value(operand, result);
}

pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let result = cpu.fetch_value(operand).wrapping_sub(1);
    cpu.status.set_zero(result as u16);
    cpu.status.set_negative(result as u16);
    cpu.store_value(operand, result);
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zero(cpu.x as u16);
    cpu.status.set_negative(cpu.x as u16);
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zero(cpu.y as u16);
    cpu.status.set_negative(cpu.y as u16);
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zero(cpu.x as u16);
    cpu.status.set_negative(cpu.x as u16);
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zero(cpu.y as u16);
    cpu.status.set_negative(cpu.y as u16);
}
