//! # Opcode Descriptor Table
//!
//! This module contains the complete 256-entry opcode descriptor table that
//! serves as the single source of truth for all 6502 instruction metadata.
//!
//! The table covers:
//! - **151 documented instructions** - official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - mapped to their NOP/composite behavior
//!
//! Each entry carries the mnemonic, the `Op` dispatch variant, the addressing
//! mode, the base cycle cost and whether the opcode is eligible for the +1
//! page-crossing cycle penalty. Instruction length is derived from the
//! addressing mode, so the stepper, the breakpoint containment check and the
//! disassembler always agree on how many bytes an instruction spans.
//!
//! Cycle costs for indexed stores (STA $nnnn,X = 5, STA ($nn),Y = 6, ...)
//! already include the fixed extra cycle real hardware charges; the
//! conditional penalty applies only to penalty-eligible read operations.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode as AM;

/// Instruction dispatch variant.
///
/// The CPU executes instructions by matching on this enum rather than
/// through indirect calls, so the dispatch is inspectable and exhaustive.
///
/// The composite variants (`Lax`, `Sax`, `Dcp`, `Isb`, `Slo`, `Rla`, `Sre`,
/// `Rra`) cover the undocumented NMOS opcodes; without the `undocumented`
/// cargo feature they execute as NOPs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    // Undocumented composites
    Lax, Sax, Dcp, Isb, Slo, Rla, Sre, Rra,
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use dbg6502::{AddressingMode, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("LDA", "STA", "???" for undocumented
    /// composites).
    pub mnemonic: &'static str,

    /// Dispatch variant executed for this opcode.
    pub op: Op,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before the conditional page-crossing penalty).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands, 1-3).
    pub size_bytes: u8,

    /// Whether a page-crossing address computation adds one cycle.
    ///
    /// True for the read-class operations (loads, ALU reads, the
    /// undocumented absolute,X NOPs and LAX); stores and read-modify-write
    /// operations have the crossing cost folded into `base_cycles`.
    pub penalty_eligible: bool,
}

const fn op(
    mnemonic: &'static str,
    op: Op,
    mode: AddressingMode,
    base_cycles: u8,
    penalty_eligible: bool,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        op,
        addressing_mode: mode,
        base_cycles,
        size_bytes: 1 + mode.operand_bytes(),
        penalty_eligible,
    }
}

/// Complete 256-entry opcode descriptor table indexed by opcode byte value.
///
/// Undocumented composite slots carry the "???" mnemonic; undocumented NOP
/// slots keep the "NOP" mnemonic together with their real addressing mode so
/// multi-byte NOPs disassemble and step with the correct length.
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op("BRK", Op::Brk, AM::Implicit, 7, false), // 0x00
    op("ORA", Op::Ora, AM::IndirectX, 6, true), // 0x01
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x02
    op("???", Op::Slo, AM::IndirectX, 8, false), // 0x03
    op("NOP", Op::Nop, AM::ZeroPage, 3, false), // 0x04
    op("ORA", Op::Ora, AM::ZeroPage, 3, true), // 0x05
    op("ASL", Op::Asl, AM::ZeroPage, 5, false), // 0x06
    op("???", Op::Slo, AM::ZeroPage, 5, false), // 0x07
    op("PHP", Op::Php, AM::Implicit, 3, false), // 0x08
    op("ORA", Op::Ora, AM::Immediate, 2, true), // 0x09
    op("ASL", Op::Asl, AM::Accumulator, 2, false), // 0x0A
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0x0B
    op("NOP", Op::Nop, AM::Absolute, 4, false), // 0x0C
    op("ORA", Op::Ora, AM::Absolute, 4, true), // 0x0D
    op("ASL", Op::Asl, AM::Absolute, 6, false), // 0x0E
    op("???", Op::Slo, AM::Absolute, 6, false), // 0x0F
    op("BPL", Op::Bpl, AM::Relative, 2, false), // 0x10
    op("ORA", Op::Ora, AM::IndirectY, 5, true), // 0x11
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x12
    op("???", Op::Slo, AM::IndirectY, 8, false), // 0x13
    op("NOP", Op::Nop, AM::ZeroPageX, 4, false), // 0x14
    op("ORA", Op::Ora, AM::ZeroPageX, 4, true), // 0x15
    op("ASL", Op::Asl, AM::ZeroPageX, 6, false), // 0x16
    op("???", Op::Slo, AM::ZeroPageX, 6, false), // 0x17
    op("CLC", Op::Clc, AM::Implicit, 2, false), // 0x18
    op("ORA", Op::Ora, AM::AbsoluteY, 4, true), // 0x19
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x1A
    op("???", Op::Slo, AM::AbsoluteY, 7, false), // 0x1B
    op("NOP", Op::Nop, AM::AbsoluteX, 4, true), // 0x1C
    op("ORA", Op::Ora, AM::AbsoluteX, 4, true), // 0x1D
    op("ASL", Op::Asl, AM::AbsoluteX, 7, false), // 0x1E
    op("???", Op::Slo, AM::AbsoluteX, 7, false), // 0x1F
    op("JSR", Op::Jsr, AM::Absolute, 6, false), // 0x20
    op("AND", Op::And, AM::IndirectX, 6, true), // 0x21
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x22
    op("???", Op::Rla, AM::IndirectX, 8, false), // 0x23
    op("BIT", Op::Bit, AM::ZeroPage, 3, false), // 0x24
    op("AND", Op::And, AM::ZeroPage, 3, true), // 0x25
    op("ROL", Op::Rol, AM::ZeroPage, 5, false), // 0x26
    op("???", Op::Rla, AM::ZeroPage, 5, false), // 0x27
    op("PLP", Op::Plp, AM::Implicit, 4, false), // 0x28
    op("AND", Op::And, AM::Immediate, 2, true), // 0x29
    op("ROL", Op::Rol, AM::Accumulator, 2, false), // 0x2A
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0x2B
    op("BIT", Op::Bit, AM::Absolute, 4, false), // 0x2C
    op("AND", Op::And, AM::Absolute, 4, true), // 0x2D
    op("ROL", Op::Rol, AM::Absolute, 6, false), // 0x2E
    op("???", Op::Rla, AM::Absolute, 6, false), // 0x2F
    op("BMI", Op::Bmi, AM::Relative, 2, false), // 0x30
    op("AND", Op::And, AM::IndirectY, 5, true), // 0x31
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x32
    op("???", Op::Rla, AM::IndirectY, 8, false), // 0x33
    op("NOP", Op::Nop, AM::ZeroPageX, 4, false), // 0x34
    op("AND", Op::And, AM::ZeroPageX, 4, true), // 0x35
    op("ROL", Op::Rol, AM::ZeroPageX, 6, false), // 0x36
    op("???", Op::Rla, AM::ZeroPageX, 6, false), // 0x37
    op("SEC", Op::Sec, AM::Implicit, 2, false), // 0x38
    op("AND", Op::And, AM::AbsoluteY, 4, true), // 0x39
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x3A
    op("???", Op::Rla, AM::AbsoluteY, 7, false), // 0x3B
    op("NOP", Op::Nop, AM::AbsoluteX, 4, true), // 0x3C
    op("AND", Op::And, AM::AbsoluteX, 4, true), // 0x3D
    op("ROL", Op::Rol, AM::AbsoluteX, 7, false), // 0x3E
    op("???", Op::Rla, AM::AbsoluteX, 7, false), // 0x3F
    op("RTI", Op::Rti, AM::Implicit, 6, false), // 0x40
    op("EOR", Op::Eor, AM::IndirectX, 6, true), // 0x41
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x42
    op("???", Op::Sre, AM::IndirectX, 8, false), // 0x43
    op("NOP", Op::Nop, AM::ZeroPage, 3, false), // 0x44
    op("EOR", Op::Eor, AM::ZeroPage, 3, true), // 0x45
    op("LSR", Op::Lsr, AM::ZeroPage, 5, false), // 0x46
    op("???", Op::Sre, AM::ZeroPage, 5, false), // 0x47
    op("PHA", Op::Pha, AM::Implicit, 3, false), // 0x48
    op("EOR", Op::Eor, AM::Immediate, 2, true), // 0x49
    op("LSR", Op::Lsr, AM::Accumulator, 2, false), // 0x4A
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0x4B
    op("JMP", Op::Jmp, AM::Absolute, 3, false), // 0x4C
    op("EOR", Op::Eor, AM::Absolute, 4, true), // 0x4D
    op("LSR", Op::Lsr, AM::Absolute, 6, false), // 0x4E
    op("???", Op::Sre, AM::Absolute, 6, false), // 0x4F
    op("BVC", Op::Bvc, AM::Relative, 2, false), // 0x50
    op("EOR", Op::Eor, AM::IndirectY, 5, true), // 0x51
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x52
    op("???", Op::Sre, AM::IndirectY, 8, false), // 0x53
    op("NOP", Op::Nop, AM::ZeroPageX, 4, false), // 0x54
    op("EOR", Op::Eor, AM::ZeroPageX, 4, true), // 0x55
    op("LSR", Op::Lsr, AM::ZeroPageX, 6, false), // 0x56
    op("???", Op::Sre, AM::ZeroPageX, 6, false), // 0x57
    op("CLI", Op::Cli, AM::Implicit, 2, false), // 0x58
    op("EOR", Op::Eor, AM::AbsoluteY, 4, true), // 0x59
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x5A
    op("???", Op::Sre, AM::AbsoluteY, 7, false), // 0x5B
    op("NOP", Op::Nop, AM::AbsoluteX, 4, true), // 0x5C
    op("EOR", Op::Eor, AM::AbsoluteX, 4, true), // 0x5D
    op("LSR", Op::Lsr, AM::AbsoluteX, 7, false), // 0x5E
    op("???", Op::Sre, AM::AbsoluteX, 7, false), // 0x5F
    op("RTS", Op::Rts, AM::Implicit, 6, false), // 0x60
    op("ADC", Op::Adc, AM::IndirectX, 6, true), // 0x61
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x62
    op("???", Op::Rra, AM::IndirectX, 8, false), // 0x63
    op("NOP", Op::Nop, AM::ZeroPage, 3, false), // 0x64
    op("ADC", Op::Adc, AM::ZeroPage, 3, true), // 0x65
    op("ROR", Op::Ror, AM::ZeroPage, 5, false), // 0x66
    op("???", Op::Rra, AM::ZeroPage, 5, false), // 0x67
    op("PLA", Op::Pla, AM::Implicit, 4, false), // 0x68
    op("ADC", Op::Adc, AM::Immediate, 2, true), // 0x69
    op("ROR", Op::Ror, AM::Accumulator, 2, false), // 0x6A
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0x6B
    op("JMP", Op::Jmp, AM::Indirect, 5, false), // 0x6C
    op("ADC", Op::Adc, AM::Absolute, 4, true), // 0x6D
    op("ROR", Op::Ror, AM::Absolute, 6, false), // 0x6E
    op("???", Op::Rra, AM::Absolute, 6, false), // 0x6F
    op("BVS", Op::Bvs, AM::Relative, 2, false), // 0x70
    op("ADC", Op::Adc, AM::IndirectY, 5, true), // 0x71
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x72
    op("???", Op::Rra, AM::IndirectY, 8, false), // 0x73
    op("NOP", Op::Nop, AM::ZeroPageX, 4, false), // 0x74
    op("ADC", Op::Adc, AM::ZeroPageX, 4, true), // 0x75
    op("ROR", Op::Ror, AM::ZeroPageX, 6, false), // 0x76
    op("???", Op::Rra, AM::ZeroPageX, 6, false), // 0x77
    op("SEI", Op::Sei, AM::Implicit, 2, false), // 0x78
    op("ADC", Op::Adc, AM::AbsoluteY, 4, true), // 0x79
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x7A
    op("???", Op::Rra, AM::AbsoluteY, 7, false), // 0x7B
    op("NOP", Op::Nop, AM::AbsoluteX, 4, true), // 0x7C
    op("ADC", Op::Adc, AM::AbsoluteX, 4, true), // 0x7D
    op("ROR", Op::Ror, AM::AbsoluteX, 7, false), // 0x7E
    op("???", Op::Rra, AM::AbsoluteX, 7, false), // 0x7F
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0x80
    op("STA", Op::Sta, AM::IndirectX, 6, false), // 0x81
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0x82
    op("???", Op::Sax, AM::IndirectX, 6, false), // 0x83
    op("STY", Op::Sty, AM::ZeroPage, 3, false), // 0x84
    op("STA", Op::Sta, AM::ZeroPage, 3, false), // 0x85
    op("STX", Op::Stx, AM::ZeroPage, 3, false), // 0x86
    op("???", Op::Sax, AM::ZeroPage, 3, false), // 0x87
    op("DEY", Op::Dey, AM::Implicit, 2, false), // 0x88
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0x89
    op("TXA", Op::Txa, AM::Implicit, 2, false), // 0x8A
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0x8B
    op("STY", Op::Sty, AM::Absolute, 4, false), // 0x8C
    op("STA", Op::Sta, AM::Absolute, 4, false), // 0x8D
    op("STX", Op::Stx, AM::Absolute, 4, false), // 0x8E
    op("???", Op::Sax, AM::Absolute, 4, false), // 0x8F
    op("BCC", Op::Bcc, AM::Relative, 2, false), // 0x90
    op("STA", Op::Sta, AM::IndirectY, 6, false), // 0x91
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0x92
    op("NOP", Op::Nop, AM::IndirectY, 6, false), // 0x93
    op("STY", Op::Sty, AM::ZeroPageX, 4, false), // 0x94
    op("STA", Op::Sta, AM::ZeroPageX, 4, false), // 0x95
    op("STX", Op::Stx, AM::ZeroPageY, 4, false), // 0x96
    op("???", Op::Sax, AM::ZeroPageY, 4, false), // 0x97
    op("TYA", Op::Tya, AM::Implicit, 2, false), // 0x98
    op("STA", Op::Sta, AM::AbsoluteY, 5, false), // 0x99
    op("TXS", Op::Txs, AM::Implicit, 2, false), // 0x9A
    op("NOP", Op::Nop, AM::AbsoluteY, 5, false), // 0x9B
    op("NOP", Op::Nop, AM::AbsoluteX, 5, false), // 0x9C
    op("STA", Op::Sta, AM::AbsoluteX, 5, false), // 0x9D
    op("NOP", Op::Nop, AM::AbsoluteY, 5, false), // 0x9E
    op("NOP", Op::Nop, AM::AbsoluteY, 5, false), // 0x9F
    op("LDY", Op::Ldy, AM::Immediate, 2, true), // 0xA0
    op("LDA", Op::Lda, AM::IndirectX, 6, true), // 0xA1
    op("LDX", Op::Ldx, AM::Immediate, 2, true), // 0xA2
    op("???", Op::Lax, AM::IndirectX, 6, true), // 0xA3
    op("LDY", Op::Ldy, AM::ZeroPage, 3, true), // 0xA4
    op("LDA", Op::Lda, AM::ZeroPage, 3, true), // 0xA5
    op("LDX", Op::Ldx, AM::ZeroPage, 3, true), // 0xA6
    op("???", Op::Lax, AM::ZeroPage, 3, true), // 0xA7
    op("TAY", Op::Tay, AM::Implicit, 2, false), // 0xA8
    op("LDA", Op::Lda, AM::Immediate, 2, true), // 0xA9
    op("TAX", Op::Tax, AM::Implicit, 2, false), // 0xAA
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0xAB
    op("LDY", Op::Ldy, AM::Absolute, 4, true), // 0xAC
    op("LDA", Op::Lda, AM::Absolute, 4, true), // 0xAD
    op("LDX", Op::Ldx, AM::Absolute, 4, true), // 0xAE
    op("???", Op::Lax, AM::Absolute, 4, true), // 0xAF
    op("BCS", Op::Bcs, AM::Relative, 2, false), // 0xB0
    op("LDA", Op::Lda, AM::IndirectY, 5, true), // 0xB1
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0xB2
    op("???", Op::Lax, AM::IndirectY, 5, true), // 0xB3
    op("LDY", Op::Ldy, AM::ZeroPageX, 4, true), // 0xB4
    op("LDA", Op::Lda, AM::ZeroPageX, 4, true), // 0xB5
    op("LDX", Op::Ldx, AM::ZeroPageY, 4, true), // 0xB6
    op("???", Op::Lax, AM::ZeroPageY, 4, true), // 0xB7
    op("CLV", Op::Clv, AM::Implicit, 2, false), // 0xB8
    op("LDA", Op::Lda, AM::AbsoluteY, 4, true), // 0xB9
    op("TSX", Op::Tsx, AM::Implicit, 2, false), // 0xBA
    op("???", Op::Lax, AM::AbsoluteY, 4, true), // 0xBB
    op("LDY", Op::Ldy, AM::AbsoluteX, 4, true), // 0xBC
    op("LDA", Op::Lda, AM::AbsoluteX, 4, true), // 0xBD
    op("LDX", Op::Ldx, AM::AbsoluteY, 4, true), // 0xBE
    op("???", Op::Lax, AM::AbsoluteY, 4, true), // 0xBF
    op("CPY", Op::Cpy, AM::Immediate, 2, false), // 0xC0
    op("CMP", Op::Cmp, AM::IndirectX, 6, true), // 0xC1
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0xC2
    op("???", Op::Dcp, AM::IndirectX, 8, false), // 0xC3
    op("CPY", Op::Cpy, AM::ZeroPage, 3, false), // 0xC4
    op("CMP", Op::Cmp, AM::ZeroPage, 3, true), // 0xC5
    op("DEC", Op::Dec, AM::ZeroPage, 5, false), // 0xC6
    op("???", Op::Dcp, AM::ZeroPage, 5, false), // 0xC7
    op("INY", Op::Iny, AM::Implicit, 2, false), // 0xC8
    op("CMP", Op::Cmp, AM::Immediate, 2, true), // 0xC9
    op("DEX", Op::Dex, AM::Implicit, 2, false), // 0xCA
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0xCB
    op("CPY", Op::Cpy, AM::Absolute, 4, false), // 0xCC
    op("CMP", Op::Cmp, AM::Absolute, 4, true), // 0xCD
    op("DEC", Op::Dec, AM::Absolute, 6, false), // 0xCE
    op("???", Op::Dcp, AM::Absolute, 6, false), // 0xCF
    op("BNE", Op::Bne, AM::Relative, 2, false), // 0xD0
    op("CMP", Op::Cmp, AM::IndirectY, 5, true), // 0xD1
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0xD2
    op("???", Op::Dcp, AM::IndirectY, 8, false), // 0xD3
    op("NOP", Op::Nop, AM::ZeroPageX, 4, false), // 0xD4
    op("CMP", Op::Cmp, AM::ZeroPageX, 4, true), // 0xD5
    op("DEC", Op::Dec, AM::ZeroPageX, 6, false), // 0xD6
    op("???", Op::Dcp, AM::ZeroPageX, 6, false), // 0xD7
    op("CLD", Op::Cld, AM::Implicit, 2, false), // 0xD8
    op("CMP", Op::Cmp, AM::AbsoluteY, 4, true), // 0xD9
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0xDA
    op("???", Op::Dcp, AM::AbsoluteY, 7, false), // 0xDB
    op("NOP", Op::Nop, AM::AbsoluteX, 4, true), // 0xDC
    op("CMP", Op::Cmp, AM::AbsoluteX, 4, true), // 0xDD
    op("DEC", Op::Dec, AM::AbsoluteX, 7, false), // 0xDE
    op("???", Op::Dcp, AM::AbsoluteX, 7, false), // 0xDF
    op("CPX", Op::Cpx, AM::Immediate, 2, false), // 0xE0
    op("SBC", Op::Sbc, AM::IndirectX, 6, true), // 0xE1
    op("NOP", Op::Nop, AM::Immediate, 2, false), // 0xE2
    op("???", Op::Isb, AM::IndirectX, 8, false), // 0xE3
    op("CPX", Op::Cpx, AM::ZeroPage, 3, false), // 0xE4
    op("SBC", Op::Sbc, AM::ZeroPage, 3, true), // 0xE5
    op("INC", Op::Inc, AM::ZeroPage, 5, false), // 0xE6
    op("???", Op::Isb, AM::ZeroPage, 5, false), // 0xE7
    op("INX", Op::Inx, AM::Implicit, 2, false), // 0xE8
    op("SBC", Op::Sbc, AM::Immediate, 2, true), // 0xE9
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0xEA
    op("SBC", Op::Sbc, AM::Immediate, 2, true), // 0xEB
    op("CPX", Op::Cpx, AM::Absolute, 4, false), // 0xEC
    op("SBC", Op::Sbc, AM::Absolute, 4, true), // 0xED
    op("INC", Op::Inc, AM::Absolute, 6, false), // 0xEE
    op("???", Op::Isb, AM::Absolute, 6, false), // 0xEF
    op("BEQ", Op::Beq, AM::Relative, 2, false), // 0xF0
    op("SBC", Op::Sbc, AM::IndirectY, 5, true), // 0xF1
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0xF2
    op("???", Op::Isb, AM::IndirectY, 8, false), // 0xF3
    op("NOP", Op::Nop, AM::ZeroPageX, 4, false), // 0xF4
    op("SBC", Op::Sbc, AM::ZeroPageX, 4, true), // 0xF5
    op("INC", Op::Inc, AM::ZeroPageX, 6, false), // 0xF6
    op("???", Op::Isb, AM::ZeroPageX, 6, false), // 0xF7
    op("SED", Op::Sed, AM::Implicit, 2, false), // 0xF8
    op("SBC", Op::Sbc, AM::AbsoluteY, 4, true), // 0xF9
    op("NOP", Op::Nop, AM::Implicit, 2, false), // 0xFA
    op("???", Op::Isb, AM::AbsoluteY, 7, false), // 0xFB
    op("NOP", Op::Nop, AM::AbsoluteX, 4, true), // 0xFC
    op("SBC", Op::Sbc, AM::AbsoluteX, 4, true), // 0xFD
    op("INC", Op::Inc, AM::AbsoluteX, 7, false), // 0xFE
    op("???", Op::Isb, AM::AbsoluteX, 7, false), // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_follows_addressing_mode() {
        for (i, meta) in OPCODE_TABLE.iter().enumerate() {
            assert_eq!(
                meta.size_bytes,
                1 + meta.addressing_mode.operand_bytes(),
                "size mismatch at opcode 0x{:02X}",
                i
            );
        }
    }

    #[test]
    fn test_documented_spot_checks() {
        let brk = &OPCODE_TABLE[0x00];
        assert_eq!(brk.mnemonic, "BRK");
        assert_eq!(brk.base_cycles, 7);
        assert_eq!(brk.size_bytes, 1);

        let jmp_ind = &OPCODE_TABLE[0x6C];
        assert_eq!(jmp_ind.mnemonic, "JMP");
        assert_eq!(jmp_ind.addressing_mode, AddressingMode::Indirect);
        assert_eq!(jmp_ind.base_cycles, 5);

        let sta_absx = &OPCODE_TABLE[0x9D];
        assert_eq!(sta_absx.mnemonic, "STA");
        assert_eq!(sta_absx.base_cycles, 5);
        assert!(!sta_absx.penalty_eligible);

        let lda_absx = &OPCODE_TABLE[0xBD];
        assert_eq!(lda_absx.base_cycles, 4);
        assert!(lda_absx.penalty_eligible);
    }

    #[test]
    fn test_penalty_set_matches_read_class() {
        // Every penalty-eligible opcode is a read-class operation.
        for (i, meta) in OPCODE_TABLE.iter().enumerate() {
            if meta.penalty_eligible {
                assert!(
                    matches!(
                        meta.op,
                        Op::Adc
                            | Op::And
                            | Op::Cmp
                            | Op::Eor
                            | Op::Lda
                            | Op::Ldx
                            | Op::Ldy
                            | Op::Ora
                            | Op::Sbc
                            | Op::Lax
                            | Op::Nop
                    ),
                    "unexpected penalty-eligible opcode 0x{:02X}",
                    i
                );
            }
        }
        // The six undocumented absolute,X NOPs are the only penalized NOPs.
        for i in [0x1Cusize, 0x3C, 0x5C, 0x7C, 0xDC, 0xFC] {
            assert!(OPCODE_TABLE[i].penalty_eligible);
        }
        assert!(!OPCODE_TABLE[0xEA].penalty_eligible);
    }

    #[test]
    fn test_relative_mode_only_on_branches() {
        for meta in OPCODE_TABLE.iter() {
            if meta.addressing_mode == AddressingMode::Relative {
                assert!(matches!(
                    meta.op,
                    Op::Bcc | Op::Bcs | Op::Beq | Op::Bmi | Op::Bne | Op::Bpl | Op::Bvc | Op::Bvs
                ));
            }
        }
    }
}
