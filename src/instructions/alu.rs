//! # Arithmetic and Logic Instructions
//!
//! ADC, SBC, CMP, CPX, CPY, AND, ORA, EOR, BIT.
//!
//! ADC and SBC share one binary adder path: SBC feeds the one's complement
//! of the operand into the same addition, so a set carry acts as "no
//! borrow". In decimal mode a BCD correction step runs after the binary
//! add, but only the carry flag observes it; the value stored back into
//! the accumulator is always the binary result. Decimal adjustment also
//! costs one extra cycle.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;
use crate::status::Status;

pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let value = cpu.fetch_value(operand) as u16;
    add_to_accumulator(cpu, value);
}

pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    // One's complement turns the adder into a subtractor; carry = no borrow
    let value = cpu.fetch_value(operand) as u16 ^ 0x00FF;
    sub_from_accumulator(cpu, value);
}

fn add_to_accumulator<M: MemoryBus>(cpu: &mut Cpu<M>, value: u16) {
    let carry_in = cpu.status.contains(Status::CARRY) as u16;
    let result = cpu.a as u16 + value + carry_in;

    cpu.status.set_carry_from(result);
    cpu.status.set_zero(result);
    cpu.status.set_overflow_from(result, cpu.a, value);
    cpu.status.set_negative(result);

    if cpu.status.contains(Status::DECIMAL) {
        // BCD correction runs on a scratch copy of A; only the carry-out
        // survives, the stored result stays binary
        cpu.status.remove(Status::CARRY);
        let mut scratch = cpu.a;
        if scratch & 0x0F > 0x09 {
            scratch = scratch.wrapping_add(0x06);
        }
        if scratch & 0xF0 > 0x90 {
            cpu.status.insert(Status::CARRY);
        }
        cpu.clockticks += 1;
    }

    cpu.a = (result & 0x00FF) as u8;
}

fn sub_from_accumulator<M: MemoryBus>(cpu: &mut Cpu<M>, value: u16) {
    let carry_in = cpu.status.contains(Status::CARRY) as u16;
    let result = cpu.a as u16 + value + carry_in;

    cpu.status.set_carry_from(result);
    cpu.status.set_zero(result);
    cpu.status.set_overflow_from(result, cpu.a, value);
    cpu.status.set_negative(result);

    if cpu.status.contains(Status::DECIMAL) {
        cpu.status.remove(Status::CARRY);
        let mut scratch = cpu.a.wrapping_sub(0x66);
        if scratch & 0x0F > 0x09 {
            scratch = scratch.wrapping_add(0x06);
        }
        if scratch & 0xF0 > 0x90 {
            cpu.status.insert(Status::CARRY);
        }
        cpu.clockticks += 1;
    }

    cpu.a = (result & 0x00FF) as u8;
}

pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    compare(cpu, cpu.a, operand);
}

pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    compare(cpu, cpu.x, operand);
}

pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    compare(cpu, cpu.y, operand);
}

fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, operand: &Operand) {
    let value = cpu.fetch_value(operand) as u16;
    let result = (register as u16).wrapping_sub(value);

    cpu.status.set(Status::CARRY, register as u16 >= value);
    cpu.status.set(Status::ZERO, register as u16 == value);
    cpu.status.set_negative(result);
}

pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let result = cpu.a & cpu.fetch_value(operand);
    cpu.status.set_zero(result as u16);
    cpu.status.set_negative(result as u16);
    cpu.a = result;
}

pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let result = cpu.a | cpu.fetch_value(operand);
    cpu.status.set_zero(result as u16);
    cpu.status.set_negative(result as u16);
    cpu.a = result;
}

pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let result = cpu.a ^ cpu.fetch_value(operand);
    cpu.status.set_zero(result as u16);
    cpu.status.set_negative(result as u16);
    cpu.a = result;
}

pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, operand: &Operand) {
    let value = cpu.fetch_value(operand);
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    // N and V come straight from bits 7 and 6 of the operand
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
}
