//! Branch instruction targets and cycle costs.

mod common;

use common::{cpu_with_program, step_n};

#[test]
fn test_branch_not_taken_base_cycles() {
    // LDA #$00 sets zero; BNE +2 falls through
    let mut cpu = cpu_with_program(0x0200, &[0xA9, 0x00, 0xD0, 0x02]);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.pc(), 0x0204);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_branch_taken_same_page_one_extra_cycle() {
    // LDA #$01 clears zero; BNE +2
    let mut cpu = cpu_with_program(0x0200, &[0xA9, 0x01, 0xD0, 0x02]);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.pc(), 0x0206);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_branch_taken_across_page_two_extra_cycles() {
    // Branch from 0x02F2 with +0x20 lands at 0x0314, a different page
    let mut cpu = cpu_with_program(0x02F0, &[0xA9, 0x01, 0xD0, 0x20]);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.pc(), 0x0314);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_branch_backward() {
    // LDA #$01; BNE -4 -> back to the LDA
    let mut cpu = cpu_with_program(0x0200, &[0xA9, 0x01, 0xD0, 0xFC]);
    step_n(&mut cpu, 2);

    assert_eq!(cpu.pc(), 0x0200);
}

#[test]
fn test_carry_and_overflow_branches() {
    // SEC; BCS +2
    let mut cpu = cpu_with_program(0x0200, &[0x38, 0xB0, 0x02]);
    step_n(&mut cpu, 2);
    assert_eq!(cpu.pc(), 0x0205);

    // CLC; BCC +2
    let mut cpu = cpu_with_program(0x0200, &[0x18, 0x90, 0x02]);
    step_n(&mut cpu, 2);
    assert_eq!(cpu.pc(), 0x0205);

    // BVC taken on power-on (overflow clear)
    let mut cpu = cpu_with_program(0x0200, &[0x50, 0x02]);
    cpu.step();
    assert_eq!(cpu.pc(), 0x0204);
}

#[test]
fn test_negative_branches() {
    // LDA #$80; BMI +2
    let mut cpu = cpu_with_program(0x0200, &[0xA9, 0x80, 0x30, 0x02]);
    step_n(&mut cpu, 2);
    assert_eq!(cpu.pc(), 0x0206);

    // LDA #$01; BPL +2
    let mut cpu = cpu_with_program(0x0200, &[0xA9, 0x01, 0x10, 0x02]);
    step_n(&mut cpu, 2);
    assert_eq!(cpu.pc(), 0x0206);
}
