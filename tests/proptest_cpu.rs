//! Property-based tests for CPU invariants.

use dbg6502::{AddressingMode, Cpu, FlatMemory, MemoryBus, Status, OPCODE_TABLE};
use proptest::prelude::*;

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    Cpu::new(memory)
}

/// Opcodes whose PC effect is purely linear: everything except branches
/// and control-flow transfers.
fn straight_line_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            m.addressing_mode != AddressingMode::Relative
                && !matches!(m.mnemonic, "JMP" | "JSR" | "RTS" | "RTI" | "BRK")
        })
        .map(|(i, _)| i as u8)
        .collect()
}

proptest! {
    /// Straight-line instructions advance the PC by exactly their size.
    #[test]
    fn test_pc_advances_by_instruction_size(
        opcode_index in 0usize..straight_line_opcodes().len(),
        operand_lo: u8,
        operand_hi: u8,
        a: u8,
        x: u8,
        y: u8,
    ) {
        let opcode = straight_line_opcodes()[opcode_index];
        let meta = &OPCODE_TABLE[opcode as usize];
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.memory_mut().write(0x8000, opcode);
        cpu.memory_mut().write(0x8001, operand_lo);
        cpu.memory_mut().write(0x8002, operand_hi);

        cpu.step();

        prop_assert_eq!(cpu.pc(), 0x8000 + meta.size_bytes as u16);
    }

    /// Every instruction costs at least its base cycles and at most two
    /// more (page-cross or decimal adjust), and always makes progress.
    #[test]
    fn test_cycle_cost_is_base_plus_bounded_extras(
        opcode: u8,
        operand_lo: u8,
        operand_hi: u8,
        x: u8,
        y: u8,
    ) {
        let meta = &OPCODE_TABLE[opcode as usize];
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.memory_mut().write(0x8000, opcode);
        cpu.memory_mut().write(0x8001, operand_lo);
        cpu.memory_mut().write(0x8002, operand_hi);

        cpu.step();

        let cost = cpu.cycles();
        prop_assert!(cost >= meta.base_cycles as u64);
        prop_assert!(cost <= meta.base_cycles as u64 + 2);
        prop_assert_eq!(cpu.instructions(), 1);
    }

    /// PHA then PLA restores the accumulator and leaves the stack
    /// pointer where it started, with Z and N matching the value.
    #[test]
    fn test_stack_round_trip_preserves_accumulator(value: u8) {
        let mut cpu = setup_cpu();
        // LDA #value; PHA; LDA #$55; PLA
        for (i, byte) in [0xA9, value, 0x48, 0xA9, 0x55, 0x68].into_iter().enumerate() {
            cpu.memory_mut().write(0x8000 + i as u16, byte);
        }
        let sp_before = cpu.sp();

        for _ in 0..4 {
            cpu.step();
        }

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.sp(), sp_before);
        prop_assert_eq!(cpu.status().contains(Status::ZERO), value == 0);
        prop_assert_eq!(cpu.status().contains(Status::NEGATIVE), value & 0x80 != 0);
    }

    /// In binary mode, adding then subtracting the same operand restores
    /// the accumulator.
    #[test]
    fn test_adc_sbc_inverse_in_binary_mode(initial: u8, operand: u8) {
        let mut cpu = setup_cpu();
        // CLC; LDA #initial; ADC #operand; SEC; SBC #operand
        for (i, byte) in [0x18, 0xA9, initial, 0x69, operand, 0x38, 0xE9, operand]
            .into_iter()
            .enumerate()
        {
            cpu.memory_mut().write(0x8000 + i as u16, byte);
        }

        for _ in 0..5 {
            cpu.step();
        }

        prop_assert_eq!(cpu.a(), initial);
    }

    /// Loads set Z exactly when the value is zero and N from bit 7, and
    /// never disturb the always-set status bit.
    #[test]
    fn test_lda_flag_contract(value: u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xA9);
        cpu.memory_mut().write(0x8001, value);

        cpu.step();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.status().contains(Status::ZERO), value == 0);
        prop_assert_eq!(cpu.status().contains(Status::NEGATIVE), value & 0x80 != 0);
        prop_assert!(cpu.status().contains(Status::UNUSED));
    }
}
