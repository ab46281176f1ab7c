//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, BRK, RTI, NOP.
//!
//! JSR pushes the address of its own last byte (PC - 1); RTS pulls it and
//! adds one. BRK pushes the address of the byte after its padding byte,
//! sets break and interrupt-disable, and vectors through 0xFFFE/0xFFFF.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;
use crate::status::Status;

pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    if let Operand::Address { ea, .. } = operand {
        cpu.pc = *ea;
    }
}

pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    if let Operand::Address { ea, .. } = operand {
        cpu.push16(cpu.pc.wrapping_sub(1));
        cpu.pc = *ea;
    }
}

pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.pc = cpu.pull16().wrapping_add(1);
}

pub(crate) fn brk<M: MemoryBus>(cpu: &mut Cpu<M>) {
    // The byte after the opcode is padding; the pushed return address
    // skips it
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push16(cpu.pc);
    cpu.push8((cpu.status | Status::BREAK).bits());
    cpu.status.insert(Status::IRQ_DISABLE);
    cpu.pc = cpu.memory.read_u16(crate::cpu::IRQ_VECTOR);
}

pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let bits = cpu.pull8();
    cpu.status = Status::from_bits_retain(bits) | Status::UNUSED;
    cpu.pc = cpu.pull16();
}

pub(crate) fn nop() {
    // Includes the undefined-opcode slots when the undocumented feature
    // is disabled
}
