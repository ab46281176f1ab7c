//! Breakpoint-aware execution control.
//!
//! The controller drives the CPU one instruction at a time and decides
//! when to stop: a breakpoint inside the instruction about to execute, an
//! exit or control-return signal from the program, a host interrupt, or
//! an exhausted step count. None of these are errors; every stop is a
//! [`StopReason`] returned to the command loop.
//!
//! The one piece of state carried between calls is the at-breakpoint
//! latch. When execution halts on a breakpoint, the very next step must
//! run that instruction without re-testing it, otherwise stepping at a
//! breakpoint address would halt on the same spot forever.

use crate::bridge::{HostIo, Signal};
use crate::cpu::Cpu;
use crate::debugger::breakpoints::BreakpointSet;
use crate::debugger::ui::{DebuggerUi, Event};
use crate::disassembler;
use crate::memory::MemoryBus;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why execution stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of steps finished.
    Completed,

    /// Halted before the instruction containing this breakpoint.
    Breakpoint(usize),

    /// The program set the exit bit.
    Exited,

    /// The program set the control-return bit.
    ControlReturned,

    /// Continuous execution was cancelled by the host interrupt flag.
    Interrupted,
}

/// The execution state machine shared by the step and continue commands.
pub struct ExecutionController {
    at_breakpoint: bool,
    interrupt: Arc<AtomicBool>,
}

impl Default for ExecutionController {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionController {
    pub fn new() -> Self {
        Self {
            at_breakpoint: false,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The cancellation flag for continuous execution. The host installs
    /// a Ctrl-C handler that stores `true` here; the run loop checks it
    /// once per instruction boundary, so cancellation never lands
    /// mid-instruction.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// Clears the at-breakpoint latch, for use after a reset.
    pub fn clear_latch(&mut self) {
        self.at_breakpoint = false;
    }

    /// Executes up to `count` instructions, reporting each one, stopping
    /// early on a breakpoint or program signal.
    pub fn step_many<M: MemoryBus, U: DebuggerUi>(
        &mut self,
        cpu: &mut Cpu<M>,
        io: &HostIo,
        breakpoints: &BreakpointSet,
        ui: &mut U,
        count: u64,
    ) -> StopReason {
        io.acknowledge(cpu.memory_mut());

        for _ in 0..count {
            let instr = disassembler::decode_at(cpu.memory(), cpu.pc());

            if self.at_breakpoint {
                // Run through the halted-on instruction without
                // re-triggering the same breakpoint
                self.at_breakpoint = false;
                ui.report(&Event::SteppingThroughBreakpoint { address: cpu.pc() });
                ui.report(&Event::Instruction {
                    address: instr.address,
                    text: instr.to_string(),
                });
                cpu.step();
                if let Some(stop) = self.drain_signals(cpu, io, ui) {
                    return stop;
                }
                continue;
            }

            if let Some(index) = breakpoints.hit_in_range(cpu.pc(), instr.size_bytes) {
                self.at_breakpoint = true;
                self.report_hit(breakpoints, index, &instr, ui);
                return StopReason::Breakpoint(index);
            }

            ui.report(&Event::Instruction {
                address: instr.address,
                text: instr.to_string(),
            });
            cpu.step();
            if let Some(stop) = self.drain_signals(cpu, io, ui) {
                return stop;
            }
        }

        StopReason::Completed
    }

    /// Runs until a breakpoint, program signal or host interrupt.
    ///
    /// Each iteration checks the interrupt flag, drains program signals,
    /// forwards one pending keystroke if any, then executes the next
    /// instruction unless a breakpoint halts first.
    pub fn run_continuous<M: MemoryBus, U: DebuggerUi>(
        &mut self,
        cpu: &mut Cpu<M>,
        io: &HostIo,
        breakpoints: &BreakpointSet,
        ui: &mut U,
    ) -> StopReason {
        self.interrupt.store(false, Ordering::SeqCst);
        io.acknowledge(cpu.memory_mut());
        debug!("entering continuous execution at {:04X}", cpu.pc());

        loop {
            if self.interrupt.swap(false, Ordering::SeqCst) {
                debug!("continuous execution interrupted at {:04X}", cpu.pc());
                return StopReason::Interrupted;
            }

            if let Some(stop) = self.drain_signals(cpu, io, ui) {
                return stop;
            }

            if let Some(key) = ui.poll_key() {
                io.deliver_key(cpu, key);
            }

            if self.at_breakpoint {
                self.at_breakpoint = false;
                cpu.step();
                continue;
            }

            let instr = disassembler::decode_at(cpu.memory(), cpu.pc());
            if let Some(index) = breakpoints.hit_in_range(cpu.pc(), instr.size_bytes) {
                self.at_breakpoint = true;
                self.report_hit(breakpoints, index, &instr, ui);
                return StopReason::Breakpoint(index);
            }

            cpu.step();
        }
    }

    /// Polls the program's flag register until it is quiet, forwarding
    /// output bytes and video requests to the UI. Returns the stop reason
    /// when the program exited or returned control.
    fn drain_signals<M: MemoryBus, U: DebuggerUi>(
        &mut self,
        cpu: &mut Cpu<M>,
        io: &HostIo,
        ui: &mut U,
    ) -> Option<StopReason> {
        loop {
            match io.poll(cpu.memory_mut()) {
                Signal::None => return None,
                Signal::Exited => return Some(StopReason::Exited),
                Signal::ControlReturned => return Some(StopReason::ControlReturned),
                Signal::TextOut(byte) => ui.put_output(byte),
                Signal::VideoOut => ui.report(&Event::VideoRequested),
            }
        }
    }

    fn report_hit<U: DebuggerUi>(
        &self,
        breakpoints: &BreakpointSet,
        index: usize,
        instr: &disassembler::Instruction,
        ui: &mut U,
    ) {
        let symbol = breakpoints.get(index).and_then(|bp| bp.symbol.clone());
        ui.report(&Event::BreakpointHit {
            index,
            address: instr.address,
            symbol,
            text: instr.to_string(),
        });
    }
}
