//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX set zero and negative from the copied value;
//! TXS affects no flags.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.a;
    cpu.status.set_zero(cpu.x as u16);
    cpu.status.set_negative(cpu.x as u16);
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.y = cpu.a;
    cpu.status.set_zero(cpu.y as u16);
    cpu.status.set_negative(cpu.y as u16);
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.x;
    cpu.status.set_zero(cpu.a as u16);
    cpu.status.set_negative(cpu.a as u16);
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.y;
    cpu.status.set_zero(cpu.a as u16);
    cpu.status.set_negative(cpu.a as u16);
}

pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.sp = cpu.x;
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.x = cpu.sp;
    cpu.status.set_zero(cpu.x as u16);
    cpu.status.set_negative(cpu.x as u16);
}
