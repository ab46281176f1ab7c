//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP. PHP pushes the status with the break bit set; PLP
//! restores the status with the always-set bit forced on.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::status::Status;

pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.push8(cpu.a);
}

pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let bits = (cpu.status | Status::BREAK).bits();
    cpu.push8(bits);
}

pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.a = cpu.pull8();
    cpu.status.set_zero(cpu.a as u16);
    cpu.status.set_negative(cpu.a as u16);
}

pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let bits = cpu.pull8();
    cpu.status = Status::from_bits_retain(bits) | Status::UNUSED;
}
