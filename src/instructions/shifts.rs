//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. All four work either on the accumulator or on
//! memory via read-modify-write, set carry from the bit shifted out, and
//! set zero and negative from the result.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;
use crate::status::Status;

pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let result = (cpu.fetch_value(operand) as u16) << 1;
    cpu.status.set_carry_from(result);
    cpu.status.set_zero(result);
    cpu.status.set_negative(result);
    cpu.store_value(operand, (result & 0x00FF) as u8);
}

pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let value = cpu.fetch_value(operand);
    let result = value >> 1;
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    cpu.status.set_zero(result as u16);
    cpu.status.set_negative(result as u16);
    cpu.store_value(operand, result);
}

pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let carry_in = cpu.status.contains(Status::CARRY) as u16;
    let result = ((cpu.fetch_value(operand) as u16) << 1) | carry_in;
    cpu.status.set_carry_from(result);
    cpu.status.set_zero(result);
    cpu.status.set_negative(result);
    cpu.store_value(operand, (result & 0x00FF) as u8);
}

pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let value = cpu.fetch_value(operand);
    let carry_in = (cpu.status.contains(Status::CARRY) as u8) << 7;
    let result = (value >> 1) | carry_in;
    cpu.status.set(Status::CARRY, value & 0x01 != 0);
    cpu.status.set_zero(result as u16);
    cpu.status.set_negative(result as u16);
    cpu.store_value(operand, result);
}
