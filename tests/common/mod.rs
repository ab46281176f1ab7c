#![allow(dead_code)]

use dbg6502::{Cpu, FlatMemory, MemoryBus};

/// Builds a CPU with `program` placed at `origin` and the reset vector
/// pointing there.
pub fn cpu_with_program(origin: u16, program: &[u8]) -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    for (i, byte) in program.iter().enumerate() {
        memory.write(origin.wrapping_add(i as u16), *byte);
    }
    memory.write(0xFFFC, (origin & 0xFF) as u8);
    memory.write(0xFFFD, (origin >> 8) as u8);
    Cpu::new(memory)
}

/// Steps the CPU `n` times.
pub fn step_n(cpu: &mut Cpu<FlatMemory>, n: usize) {
    for _ in 0..n {
        cpu.step();
    }
}
