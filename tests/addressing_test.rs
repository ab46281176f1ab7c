//! Addressing-mode resolution: wraparound rules and page-cross cycle
//! penalties, observed through loads and stores.

mod common;

use common::{cpu_with_program, step_n};
use dbg6502::MemoryBus;

#[test]
fn test_absolute_indexed_page_cross_costs_extra_cycle() {
    // LDX #$01; LDA $12FF,X -> effective address 0x1300 crosses a page
    let mut cpu = cpu_with_program(0x0200, &[0xA2, 0x01, 0xBD, 0xFF, 0x12]);
    cpu.memory_mut().write(0x1300, 0x42);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.a(), 0x42);
    // LDX 2 + LDA 4+1
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_absolute_indexed_same_page_no_penalty() {
    // LDX #$01; LDA $1200,X
    let mut cpu = cpu_with_program(0x0200, &[0xA2, 0x01, 0xBD, 0x00, 0x12]);
    cpu.memory_mut().write(0x1201, 0x42);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_indexed_store_has_fixed_cost() {
    // LDA #$AA; LDX #$01; STA $12FF,X
    // Stores always pay the worst-case cost; crossing changes nothing.
    let mut cpu = cpu_with_program(0x0200, &[0xA9, 0xAA, 0xA2, 0x01, 0x9D, 0xFF, 0x12]);
    step_n(&mut cpu, 3);

    assert_eq!(cpu.memory().read(0x1300), 0xAA);
    // LDA 2 + LDX 2 + STA 5
    assert_eq!(cpu.cycles(), 9);
}

#[test]
fn test_zero_page_indexed_wraps_in_page() {
    // LDX #$10; LDA $F8,X -> wraps to 0x0008, never 0x0108
    let mut cpu = cpu_with_program(0x0200, &[0xA2, 0x10, 0xB5, 0xF8]);
    cpu.memory_mut().write(0x0008, 0x77);
    cpu.memory_mut().write(0x0108, 0x55);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_indirect_x_pointer_wraps_in_zero_page() {
    // LDX #$FF; LDA ($00,X) -> pointer bytes at 0x00FF and 0x0000
    let mut cpu = cpu_with_program(0x0200, &[0xA2, 0xFF, 0xA1, 0x00]);
    cpu.memory_mut().write(0x00FF, 0x34);
    cpu.memory_mut().write(0x0000, 0x12);
    cpu.memory_mut().write(0x1234, 0x99);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_indirect_y_page_cross_penalty() {
    // LDY #$01; LDA ($40),Y with pointer 0x12FF -> 0x1300, one extra cycle
    let mut cpu = cpu_with_program(0x0200, &[0xA0, 0x01, 0xB1, 0x40]);
    cpu.memory_mut().write(0x0040, 0xFF);
    cpu.memory_mut().write(0x0041, 0x12);
    cpu.memory_mut().write(0x1300, 0x5A);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.a(), 0x5A);
    // LDY 2 + LDA 5+1
    assert_eq!(cpu.cycles(), 8);
}

#[test]
fn test_zero_page_y_for_ldx() {
    // LDY #$05; LDX $20,Y
    let mut cpu = cpu_with_program(0x0200, &[0xA0, 0x05, 0xB6, 0x20]);
    cpu.memory_mut().write(0x0025, 0x3C);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.x(), 0x3C);
}
