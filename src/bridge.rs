//! # Host I/O Bridge
//!
//! Mediates between the host debugger and the emulated program over a
//! small memory-mapped signaling protocol.
//!
//! The loaded program advertises three register locations through a fixed
//! metadata convention near the top of memory:
//!
//! | Metadata word | Register                        |
//! |---------------|---------------------------------|
//! | 0xFFEA/0xFFEB | UART input (host -> program)    |
//! | 0xFFEC/0xFFED | UART output (program -> host)   |
//! | 0xFFEE/0xFFEF | interface status (IX) register  |
//!
//! The IX register is a one-way flag byte from program to host, with one
//! host-owned handshake bit for keyboard input:
//!
//! - bit 7: program requests exit
//! - bit 6: program returns control to the debugger without exiting
//! - bit 5: video output request
//! - bit 1: input busy; the host sets it when delivering a keystroke and
//!   the program's IRQ handler clears it once consumed
//! - bit 0: a byte is waiting in the UART output register
//!
//! Everything here runs on the single emulation thread, between CPU
//! steps. The input-busy wait in `deliver_key` relies on that: the
//! program's own instruction stream is the only thing that clears the
//! bit, and the host never calls in while it is still set in practice.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use log::{debug, warn};

/// Metadata word holding the UART input register address.
pub const UART_IN_METADATA: u16 = 0xFFEA;

/// Metadata word holding the UART output register address.
pub const UART_OUT_METADATA: u16 = 0xFFEC;

/// Metadata word holding the IX register address.
pub const IX_METADATA: u16 = 0xFFEE;

/// IX bit: program requests exit.
pub const IX_EXIT: u8 = 0x80;

/// IX bit: program hands control back to the debugger.
pub const IX_CONTROL_RETURN: u8 = 0x40;

/// IX bit: video output request.
pub const IX_VIDEO_OUT: u8 = 0x20;

/// IX bit: keyboard input busy (host-owned handshake).
pub const IX_INPUT_BUSY: u8 = 0x02;

/// IX bit: UART output byte ready.
pub const IX_OUTPUT_READY: u8 = 0x01;

/// A condition observed on the IX register, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// No flag bits set; execution continues undisturbed.
    None,

    /// The program requested exit.
    Exited,

    /// The program handed control back to the debugger.
    ControlReturned,

    /// The program produced an output byte, already drained from the
    /// UART output register.
    TextOut(u8),

    /// The program raised a video output request.
    VideoOut,
}

/// The discovered register locations for one loaded program.
///
/// Built once after reset by [`IoBridge::discover`]; the addresses never
/// change while the program runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoBridge {
    uart_in: u16,
    uart_out: u16,
    ix: u16,
}

impl IoBridge {
    /// Reads the metadata words and returns the bridge, or `None` when
    /// all three words are zero, which marks a program that does not
    /// speak the protocol.
    pub fn discover<M: MemoryBus>(memory: &M) -> Option<Self> {
        let uart_in = memory.read_u16(UART_IN_METADATA);
        let uart_out = memory.read_u16(UART_OUT_METADATA);
        let ix = memory.read_u16(IX_METADATA);

        if uart_in == 0 && uart_out == 0 && ix == 0 {
            debug!("no I/O metadata found; host I/O disabled");
            return None;
        }

        debug!(
            "I/O bridge: uart_in={:04X} uart_out={:04X} ix={:04X}",
            uart_in, uart_out, ix
        );
        Some(Self {
            uart_in,
            uart_out,
            ix,
        })
    }

    /// The IX register address.
    pub fn ix_address(&self) -> u16 {
        self.ix
    }

    /// Delivers one keystroke: waits for the input-busy bit to clear,
    /// sets it, writes the byte into the UART input register and raises
    /// an IRQ so the program's handler picks it up.
    pub fn deliver_key<M: MemoryBus>(&self, cpu: &mut Cpu<M>, key: u8) {
        while cpu.memory().read(self.ix) & IX_INPUT_BUSY != 0 {
            // Cooperative hand-off: only the program clears this, and it
            // only runs between host calls, so a set bit here means the
            // previous key has not been consumed yet
            std::hint::spin_loop();
        }

        let flags = cpu.memory().read(self.ix);
        cpu.memory_mut().write(self.ix, flags | IX_INPUT_BUSY);
        cpu.memory_mut().write(self.uart_in, key);
        cpu.irq();
    }

    /// If the output-ready bit is set, reads the pending byte from the
    /// UART output register, clears the bit and returns the byte.
    pub fn drain_output_if_ready<M: MemoryBus>(&self, memory: &mut M) -> Option<u8> {
        let flags = memory.read(self.ix);
        if flags & IX_OUTPUT_READY == 0 {
            return None;
        }
        let byte = memory.read(self.uart_out);
        memory.write(self.ix, flags & !IX_OUTPUT_READY);
        Some(byte)
    }

    /// Checks the IX register once and reports the highest-priority
    /// condition. Output and video bits are consumed here; the exit and
    /// control-return bits are left for the caller, which clears the
    /// whole register when it resumes the program.
    pub fn poll<M: MemoryBus>(&self, memory: &mut M) -> Signal {
        let flags = memory.read(self.ix);

        if flags & IX_EXIT != 0 {
            return Signal::Exited;
        }
        if flags & IX_CONTROL_RETURN != 0 {
            return Signal::ControlReturned;
        }
        if let Some(byte) = self.drain_output_if_ready(memory) {
            return Signal::TextOut(byte);
        }
        if flags & IX_VIDEO_OUT != 0 {
            memory.write(self.ix, flags & !IX_VIDEO_OUT);
            return Signal::VideoOut;
        }

        Signal::None
    }

    /// Clears every IX flag. Called when execution resumes so stale exit
    /// or return bits from the previous stop do not fire immediately.
    pub fn acknowledge<M: MemoryBus>(&self, memory: &mut M) {
        memory.write(self.ix, 0x00);
    }
}

/// A bridge that may be absent when the program carries no metadata.
///
/// Keystrokes to an absent bridge are dropped with a warning; polls
/// report no signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostIo {
    bridge: Option<IoBridge>,
}

impl HostIo {
    pub fn discover<M: MemoryBus>(memory: &M) -> Self {
        Self {
            bridge: IoBridge::discover(memory),
        }
    }

    pub fn deliver_key<M: MemoryBus>(&self, cpu: &mut Cpu<M>, key: u8) {
        match self.bridge {
            Some(bridge) => bridge.deliver_key(cpu, key),
            None => warn!("dropping keystroke {:02X}: program has no I/O registers", key),
        }
    }

    pub fn poll<M: MemoryBus>(&self, memory: &mut M) -> Signal {
        match self.bridge {
            Some(bridge) => bridge.poll(memory),
            None => Signal::None,
        }
    }

    pub fn acknowledge<M: MemoryBus>(&self, memory: &mut M) {
        if let Some(bridge) = self.bridge {
            bridge.acknowledge(memory);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cpu, FlatMemory};

    const UART_IN: u16 = 0xD010;
    const UART_OUT: u16 = 0xD012;
    const IX: u16 = 0xD014;

    fn memory_with_protocol() -> FlatMemory {
        let mut memory = FlatMemory::new();
        memory.write(UART_IN_METADATA, (UART_IN & 0xFF) as u8);
        memory.write(UART_IN_METADATA + 1, (UART_IN >> 8) as u8);
        memory.write(UART_OUT_METADATA, (UART_OUT & 0xFF) as u8);
        memory.write(UART_OUT_METADATA + 1, (UART_OUT >> 8) as u8);
        memory.write(IX_METADATA, (IX & 0xFF) as u8);
        memory.write(IX_METADATA + 1, (IX >> 8) as u8);
        memory
    }

    #[test]
    fn test_discover_reads_metadata_words() {
        let memory = memory_with_protocol();
        let bridge = IoBridge::discover(&memory).unwrap();

        assert_eq!(bridge.ix_address(), IX);
    }

    #[test]
    fn test_discover_returns_none_without_metadata() {
        let memory = FlatMemory::new();
        assert!(IoBridge::discover(&memory).is_none());
    }

    #[test]
    fn test_poll_priority_exit_wins() {
        let mut memory = memory_with_protocol();
        memory.write(IX, IX_EXIT | IX_CONTROL_RETURN | IX_OUTPUT_READY);
        let bridge = IoBridge::discover(&memory).unwrap();

        assert_eq!(bridge.poll(&mut memory), Signal::Exited);
        // Exit bit stays set until acknowledged
        assert_eq!(bridge.poll(&mut memory), Signal::Exited);
    }

    #[test]
    fn test_poll_drains_output_and_clears_ready_bit() {
        let mut memory = memory_with_protocol();
        memory.write(UART_OUT, b'A');
        memory.write(IX, IX_OUTPUT_READY);
        let bridge = IoBridge::discover(&memory).unwrap();

        assert_eq!(bridge.poll(&mut memory), Signal::TextOut(b'A'));
        assert_eq!(memory.read(IX) & IX_OUTPUT_READY, 0);
        assert_eq!(bridge.poll(&mut memory), Signal::None);
    }

    #[test]
    fn test_deliver_key_sets_busy_writes_byte_and_raises_irq() {
        let mut memory = memory_with_protocol();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        memory.write(0xFFFE, 0x00); // IRQ handler at 0x9000
        memory.write(0xFFFF, 0x90);
        let bridge = IoBridge::discover(&memory).unwrap();
        let mut cpu = Cpu::new(memory);

        bridge.deliver_key(&mut cpu, b'x');

        assert_eq!(cpu.memory().read(UART_IN), b'x');
        assert_ne!(cpu.memory().read(IX) & IX_INPUT_BUSY, 0);
        assert_eq!(cpu.pc(), 0x9000);
    }

    #[test]
    fn test_acknowledge_clears_all_flags() {
        let mut memory = memory_with_protocol();
        memory.write(IX, IX_EXIT | IX_VIDEO_OUT);
        let bridge = IoBridge::discover(&memory).unwrap();

        bridge.acknowledge(&mut memory);

        assert_eq!(memory.read(IX), 0x00);
    }

    #[test]
    fn test_absent_bridge_drops_keys_and_reports_nothing() {
        let mut memory = FlatMemory::new();
        memory.write(0xFFFC, 0x00);
        memory.write(0xFFFD, 0x80);
        let host_io = HostIo::discover(&memory);
        let mut cpu = Cpu::new(memory);
        let pc_before = cpu.pc();

        host_io.deliver_key(&mut cpu, b'q');

        assert_eq!(cpu.pc(), pc_before);
        assert_eq!(host_io.poll(cpu.memory_mut()), Signal::None);
    }
}
