//! Loading a raw memory image from disk and running it.

use dbg6502::{Cpu, FlatMemory, MemoryBus};
use std::fs;

/// Builds a full 64 KiB image with a program at `origin` and the reset
/// vector pointing there.
fn image_with_program(origin: u16, program: &[u8]) -> Vec<u8> {
    let mut image = vec![0u8; 0x10000];
    image[origin as usize..origin as usize + program.len()].copy_from_slice(program);
    image[0xFFFC] = (origin & 0xFF) as u8;
    image[0xFFFD] = (origin >> 8) as u8;
    image
}

#[test]
fn test_load_image_and_execute() {
    // LDA #$05; STA $0400
    let image = image_with_program(0x0200, &[0xA9, 0x05, 0x8D, 0x00, 0x04]);
    let mut memory = FlatMemory::new();
    memory.load_image(&image);
    let mut cpu = Cpu::new(memory);

    assert_eq!(cpu.pc(), 0x0200);
    cpu.step();
    cpu.step();

    assert_eq!(cpu.memory().read(0x0400), 0x05);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_from_file_round_trip() {
    let image = image_with_program(0x8000, &[0xA9, 0x2A]);
    let path = std::env::temp_dir().join("dbg6502_loader_test.bin");
    fs::write(&path, &image).unwrap();

    let memory = FlatMemory::from_file(&path).unwrap();
    fs::remove_file(&path).ok();
    let mut cpu = Cpu::new(memory);

    cpu.step();
    assert_eq!(cpu.a(), 0x2A);
}

#[test]
fn test_from_file_missing_path_is_an_error() {
    let path = std::env::temp_dir().join("dbg6502_no_such_image.bin");
    assert!(FlatMemory::from_file(&path).is_err());
}

#[test]
fn test_partial_image_leaves_rest_zeroed() {
    // A short image covers only the bottom of memory
    let mut memory = FlatMemory::new();
    memory.load_image(&[0x11, 0x22, 0x33]);

    assert_eq!(memory.read(0x0000), 0x11);
    assert_eq!(memory.read(0x0002), 0x33);
    assert_eq!(memory.read(0x0003), 0x00);
    assert_eq!(memory.read(0xFFFC), 0x00);
}
