//! # 6502 Disassembler
//!
//! Decodes instructions in place from a `MemoryBus`, which lets the
//! debugger list code around the live program counter without copying
//! memory out first.
//!
//! Formatting follows the usual 6502 conventions: `#$nn` immediates,
//! `$nnnn` absolute addresses, `A` for accumulator mode, and branch
//! targets rendered as absolute addresses. Undefined opcode slots decode
//! with the `???` mnemonic and a one-byte length.
//!
//! # Examples
//!
//! ```
//! use dbg6502::{disassembler, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0x0600, 0xA9); // LDA #$2A
//! memory.write(0x0601, 0x2A);
//!
//! let instr = disassembler::decode_at(&memory, 0x0600);
//! assert_eq!(instr.to_string(), "LDA #$2A");
//! assert_eq!(instr.size_bytes, 2);
//! ```

use crate::addressing::AddressingMode;
use crate::memory::MemoryBus;
use crate::opcodes::OPCODE_TABLE;
use std::fmt;

/// A single decoded instruction with its location and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value
    pub opcode: u8,

    /// Instruction mnemonic ("LDA", "JMP", "???" for undefined slots)
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Raw operand bytes following the opcode (0-2 of them)
    pub operand_bytes: [u8; 2],

    /// Total size in bytes (opcode + operands)
    pub size_bytes: u8,
}

impl Instruction {
    /// Little-endian 16-bit operand; meaningful for two-byte operands.
    fn operand_u16(&self) -> u16 {
        u16::from_le_bytes(self.operand_bytes)
    }

    /// Branch target for relative mode: instruction end plus the
    /// sign-extended displacement.
    fn branch_target(&self) -> u16 {
        let offset = self.operand_bytes[0] as i8;
        self.address
            .wrapping_add(self.size_bytes as u16)
            .wrapping_add(offset as u16)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AddressingMode::*;
        match self.addressing_mode {
            Implicit => write!(f, "{}", self.mnemonic),
            Accumulator => write!(f, "{} A", self.mnemonic),
            Immediate => write!(f, "{} #${:02X}", self.mnemonic, self.operand_bytes[0]),
            ZeroPage => write!(f, "{} ${:02X}", self.mnemonic, self.operand_bytes[0]),
            ZeroPageX => write!(f, "{} ${:02X},X", self.mnemonic, self.operand_bytes[0]),
            ZeroPageY => write!(f, "{} ${:02X},Y", self.mnemonic, self.operand_bytes[0]),
            Relative => write!(f, "{} ${:04X}", self.mnemonic, self.branch_target()),
            Absolute => write!(f, "{} ${:04X}", self.mnemonic, self.operand_u16()),
            AbsoluteX => write!(f, "{} ${:04X},X", self.mnemonic, self.operand_u16()),
            AbsoluteY => write!(f, "{} ${:04X},Y", self.mnemonic, self.operand_u16()),
            Indirect => write!(f, "{} (${:04X})", self.mnemonic, self.operand_u16()),
            IndirectX => write!(f, "{} (${:02X},X)", self.mnemonic, self.operand_bytes[0]),
            IndirectY => write!(f, "{} (${:02X}),Y", self.mnemonic, self.operand_bytes[0]),
        }
    }
}

/// Decodes the instruction starting at `address`.
///
/// Operand reads wrap around the top of the address space, matching what
/// execution would do.
pub fn decode_at<M: MemoryBus>(memory: &M, address: u16) -> Instruction {
    let opcode = memory.read(address);
    let meta = &OPCODE_TABLE[opcode as usize];

    let mut operand_bytes = [0u8; 2];
    for (i, byte) in operand_bytes
        .iter_mut()
        .take(meta.size_bytes as usize - 1)
        .enumerate()
    {
        *byte = memory.read(address.wrapping_add(1 + i as u16));
    }

    Instruction {
        address,
        opcode,
        mnemonic: meta.mnemonic,
        addressing_mode: meta.addressing_mode,
        operand_bytes,
        size_bytes: meta.size_bytes,
    }
}

/// Decodes `count` consecutive instructions starting at `address`.
///
/// Used by the debugger's listing view; decoding is sequential, so a
/// misaligned start address desynchronizes the listing the same way it
/// would on real hardware.
pub fn decode_range<M: MemoryBus>(memory: &M, address: u16, count: usize) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(count);
    let mut pc = address;
    for _ in 0..count {
        let instr = decode_at(memory, pc);
        pc = pc.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }
    instructions
}
