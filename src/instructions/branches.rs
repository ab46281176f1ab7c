//! # Branch Instructions
//!
//! All eight conditional branches share one helper: when the condition
//! holds, the sign-extended displacement is added to the post-operand PC
//! and the branch costs one extra cycle, or two when the target lands on
//! a different page.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;
use crate::status::Status;

fn branch_if<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand, taken: bool) {
    if !taken {
        return;
    }
    let Operand::Relative { offset } = operand else {
        return;
    };
    let old_pc = cpu.pc;
    cpu.pc = cpu.pc.wrapping_add(*offset);
    cpu.clockticks += if old_pc & 0xFF00 != cpu.pc & 0xFF00 {
        2
    } else {
        1
    };
}

pub(crate) fn bcc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    branch_if(cpu, operand, !cpu.status.contains(Status::CARRY));
}

pub(crate) fn bcs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    branch_if(cpu, operand, cpu.status.contains(Status::CARRY));
}

pub(crate) fn beq<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    branch_if(cpu, operand, cpu.status.contains(Status::ZERO));
}

pub(crate) fn bne<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    branch_if(cpu, operand, !cpu.status.contains(Status::ZERO));
}

pub(crate) fn bmi<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    branch_if(cpu, operand, cpu.status.contains(Status::NEGATIVE));
}

pub(crate) fn bpl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    branch_if(cpu, operand, !cpu.status.contains(Status::NEGATIVE));
}

pub(crate) fn bvc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    branch_if(cpu, operand, !cpu.status.contains(Status::OVERFLOW));
}

pub(crate) fn bvs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    branch_if(cpu, operand, cpu.status.contains(Status::OVERFLOW));
}
