//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from
//! specific memory implementations, plus the `FlatMemory` 64KB address space
//! used by the debugger and its raw-image loader.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Addresses always wrap to 16 bits; there is no segmentation
//! - Writes to unmapped regions may be ignored by implementations

use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Memory bus trait for CPU byte reads and writes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM and memory-mapped I/O registers)
/// through this abstraction, which also makes test doubles for the
/// memory-mapped interface-register protocol trivial to build.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use dbg6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Unmapped addresses may return garbage
    /// (matching 6502 hardware behavior).
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Writes to read-only regions may be
    /// silently ignored.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// Used for vectors and the metadata pointer words; the second byte
    /// wraps around the top of the address space like the hardware does.
    fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to a single contiguous RAM array. The
/// host loader has exclusive write access before execution starts; the CPU
/// has exclusive access during execution (single-threaded handoff).
///
/// # Examples
///
/// ```
/// use dbg6502::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // reset vector low byte
/// memory.write(0xFFFD, 0x80); // reset vector high byte
/// assert_eq!(memory.read_u16(0xFFFC), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Loads a raw flat byte dump starting at address 0x0000.
    ///
    /// There is no header and no relocation: load order is sequential
    /// file-offset-to-address. Images larger than 64KB are truncated to fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbg6502::{FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load_image(&[0xA9, 0x05]); // LDA #$05
    /// assert_eq!(memory.read(0x0000), 0xA9);
    /// assert_eq!(memory.read(0x0001), 0x05);
    /// ```
    pub fn load_image(&mut self, image: &[u8]) {
        let len = image.len().min(self.data.len());
        self.data[..len].copy_from_slice(&image[..len]);
        info!("loaded {} byte image at 0x0000", len);
    }

    /// Reads a binary image from disk into a fresh 64KB address space.
    ///
    /// Failure to open or read the file is fatal at startup; the caller is
    /// expected to print the error and exit with a nonzero status.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let image = fs::read(path)?;
        let mut memory = Self::new();
        memory.load_image(&image);
        Ok(memory)
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbors unchanged
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_read_u16_little_endian() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x34);
        mem.write(0xFFFD, 0x12);
        assert_eq!(mem.read_u16(0xFFFC), 0x1234);
    }

    #[test]
    fn test_read_u16_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0xCD);
        mem.write(0x0000, 0xAB);
        assert_eq!(mem.read_u16(0xFFFF), 0xABCD);
    }

    #[test]
    fn test_load_image_at_zero() {
        let mut mem = FlatMemory::new();
        mem.load_image(&[0x01, 0x02, 0x03]);
        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x0002), 0x03);
        assert_eq!(mem.read(0x0003), 0x00);
    }

    #[test]
    fn test_load_image_truncates_to_64k() {
        let mut mem = FlatMemory::new();
        let mut image = vec![0x11; 0x10000];
        image.push(0x99);
        mem.load_image(&image);
        assert_eq!(mem.read(0xFFFF), 0x11);
        // The 65537th byte is dropped, not wrapped onto page zero
        assert_eq!(mem.read(0x0000), 0x11);
    }
}
