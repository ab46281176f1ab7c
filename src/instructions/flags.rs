//! # Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD, SED. Each sets or clears exactly one
//! status bit; nothing else is touched.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::status::Status;

pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.remove(Status::CARRY);
}

pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.insert(Status::CARRY);
}

pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.remove(Status::IRQ_DISABLE);
}

pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.insert(Status::IRQ_DISABLE);
}

pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.remove(Status::OVERFLOW);
}

pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.remove(Status::DECIMAL);
}

pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.status.insert(Status::DECIMAL);
}
