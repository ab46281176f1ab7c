//! # Status Register
//!
//! Packed 8-bit processor status register (NV-BDIZC). Bit 5 has no hardware
//! function and always reads as 1; `Cpu` forces it set on reset and on every
//! instruction fetch.

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status flags.
    ///
    /// Bit layout:
    ///
    /// | Bit | Flag | Meaning |
    /// |-----|------|---------|
    /// | 7   | N    | Negative (mirror of result bit 7) |
    /// | 6   | V    | Overflow (signed overflow on ADC/SBC) |
    /// | 5   | -    | Unused, always 1 |
    /// | 4   | B    | Break (set on the pushed copy by BRK/PHP) |
    /// | 3   | D    | Decimal mode |
    /// | 2   | I    | Interrupt disable |
    /// | 1   | Z    | Zero |
    /// | 0   | C    | Carry |
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u8 {
        const CARRY = 0x01;
        const ZERO = 0x02;
        const IRQ_DISABLE = 0x04;
        const DECIMAL = 0x08;
        const BREAK = 0x10;
        const UNUSED = 0x20;
        const OVERFLOW = 0x40;
        const NEGATIVE = 0x80;
    }
}

impl Status {
    /// Power-on value: only the always-set bit.
    pub fn power_on() -> Self {
        Status::UNUSED
    }

    /// Sets Zero from the low 8 bits of an intermediate result.
    pub(crate) fn set_zero(&mut self, result: u16) {
        self.set(Status::ZERO, result & 0x00FF == 0);
    }

    /// Sets Negative from bit 7 of an intermediate result.
    pub(crate) fn set_negative(&mut self, result: u16) {
        self.set(Status::NEGATIVE, result & 0x0080 != 0);
    }

    /// Sets Carry when an arithmetic result exceeds 8 bits.
    pub(crate) fn set_carry_from(&mut self, result: u16) {
        self.set(Status::CARRY, result & 0xFF00 != 0);
    }

    /// Sets Overflow from the sign bits of both addends versus the result
    /// (standard two's-complement overflow detection, ADC/SBC only).
    pub(crate) fn set_overflow_from(&mut self, result: u16, acc: u8, operand: u16) {
        let v = (result ^ acc as u16) & (result ^ operand) & 0x0080;
        self.set(Status::OVERFLOW, v != 0);
    }
}

impl From<u8> for Status {
    fn from(bits: u8) -> Self {
        Status::from_bits_retain(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_has_unused_set() {
        let status = Status::power_on();
        assert!(status.contains(Status::UNUSED));
        assert_eq!(status.bits(), 0x20);
    }

    #[test]
    fn test_zero_and_negative_from_result() {
        let mut status = Status::power_on();

        status.set_zero(0x0100); // low byte is zero
        assert!(status.contains(Status::ZERO));

        status.set_negative(0x0080);
        assert!(status.contains(Status::NEGATIVE));

        status.set_zero(0x0001);
        status.set_negative(0x0001);
        assert!(!status.contains(Status::ZERO));
        assert!(!status.contains(Status::NEGATIVE));
    }

    #[test]
    fn test_carry_from_ninth_bit() {
        let mut status = Status::power_on();
        status.set_carry_from(0x01FF);
        assert!(status.contains(Status::CARRY));
        status.set_carry_from(0x00FF);
        assert!(!status.contains(Status::CARRY));
    }

    #[test]
    fn test_overflow_positive_plus_positive() {
        // 0x50 + 0x50 = 0xA0: two positives yielding a negative
        let mut status = Status::power_on();
        status.set_overflow_from(0x00A0, 0x50, 0x0050);
        assert!(status.contains(Status::OVERFLOW));
    }

    #[test]
    fn test_from_bits_round_trip() {
        let status = Status::from(0xFF);
        assert_eq!(status.bits(), 0xFF);
    }
}
