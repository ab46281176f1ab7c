//! # dbg6502
//!
//! A cycle-accurate MOS 6502 interpreter with an interactive,
//! breakpoint-capable debugger.
//!
//! ## Features
//!
//! - Full documented instruction set with accurate cycle counting,
//!   including page-cross penalties, decimal mode, and the hardware's
//!   `(indirect)` page-wraparound bug
//! - Optional undocumented composite opcodes behind the `undocumented`
//!   cargo feature
//! - Pluggable memory via the [`MemoryBus`] trait, with [`FlatMemory`]
//!   as the stock 64 KiB backend
//! - A disassembler that decodes straight out of live memory
//! - A debugger with breakpoints (by address or symbol), stepping,
//!   continuous execution with Ctrl-C cancellation, and memory-mapped
//!   UART I/O to the emulated program
//!
//! ## Quick Start
//!
//! ```
//! use dbg6502::{Cpu, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00); // reset vector -> 0x8000
//! memory.write(0xFFFD, 0x80);
//! memory.write(0x8000, 0xA9); // LDA #$05
//! memory.write(0x8001, 0x05);
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.step();
//! assert_eq!(cpu.a(), 0x05);
//! assert_eq!(cpu.cycles(), 2);
//! ```
//!
//! Debugging a loaded program:
//!
//! ```no_run
//! use dbg6502::debugger::{ConsoleUi, Debugger, SymbolTable};
//! use dbg6502::{Cpu, FlatMemory};
//!
//! let memory = FlatMemory::from_file("program.bin")?;
//! let mut debugger = Debugger::new(Cpu::new(memory), SymbolTable::new(), ConsoleUi::new());
//! debugger.run();
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod addressing;
pub mod bridge;
pub mod cpu;
pub mod debugger;
pub mod disassembler;
pub(crate) mod instructions;
pub mod memory;
pub mod opcodes;
pub mod status;

pub use addressing::AddressingMode;
pub use bridge::{HostIo, IoBridge, Signal};
pub use cpu::Cpu;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Op, OpcodeMetadata, OPCODE_TABLE};
pub use status::Status;

/// Initializes logging from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; later calls are no-ops.
pub fn enable_logging() {
    let _ = env_logger::builder().format_timestamp(None).try_init();
}
