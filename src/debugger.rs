//! # Interactive Debugger
//!
//! A breakpoint-capable monitor over a running 6502 program: step,
//! continue, breakpoints by address or symbol, disassembly, memory and
//! register inspection, and routing of the program's UART output and the
//! host's keystrokes through the I/O bridge.
//!
//! The debugger core is front-end agnostic: it talks to any
//! [`DebuggerUi`] implementation through structured [`Event`]s and parsed
//! [`Command`]s. [`ConsoleUi`] is the bundled stdin/stdout front end.
//!
//! # Examples
//!
//! ```no_run
//! use dbg6502::debugger::{ConsoleUi, Debugger, SymbolTable};
//! use dbg6502::{Cpu, FlatMemory};
//!
//! let memory = FlatMemory::from_file("program.bin")?;
//! let symbols = SymbolTable::from_file("program.sym")?;
//! let mut debugger = Debugger::new(Cpu::new(memory), symbols, ConsoleUi::new());
//! debugger.run();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod breakpoints;
pub mod commands;
pub mod console;
pub mod controller;
pub mod symbols;
pub mod ui;

pub use breakpoints::{Breakpoint, BreakpointSet};
pub use commands::{BreakTarget, Command};
pub use console::ConsoleUi;
pub use controller::{ExecutionController, StopReason};
pub use symbols::{SymbolError, SymbolTable};
pub use ui::{BreakpointView, DebuggerUi, Event};

use crate::bridge::HostIo;
use crate::cpu::Cpu;
use crate::disassembler;
use crate::memory::MemoryBus;
use log::info;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// The debugger: CPU, I/O bridge, breakpoints, symbols and the command
/// loop over them.
pub struct Debugger<M: MemoryBus, U: DebuggerUi> {
    cpu: Cpu<M>,
    host_io: HostIo,
    breakpoints: BreakpointSet,
    symbols: SymbolTable,
    controller: ExecutionController,
    ui: U,
    running: bool,
}

impl<M: MemoryBus, U: DebuggerUi> Debugger<M, U> {
    /// Builds a debugger around a freshly reset CPU. The I/O register
    /// locations are discovered from the loaded program's metadata words
    /// and the program's flag register is cleared.
    pub fn new(mut cpu: Cpu<M>, symbols: SymbolTable, ui: U) -> Self {
        let host_io = HostIo::discover(cpu.memory());
        host_io.acknowledge(cpu.memory_mut());
        Self {
            cpu,
            host_io,
            breakpoints: BreakpointSet::new(),
            symbols,
            controller: ExecutionController::new(),
            ui,
            running: false,
        }
    }

    /// The cancellation flag for continuous execution; hook this to a
    /// Ctrl-C handler.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.controller.interrupt_flag()
    }

    /// The CPU under debug.
    pub fn cpu(&self) -> &Cpu<M> {
        &self.cpu
    }

    /// The front end, for scripted drivers that inspect what was shown.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu<M> {
        &mut self.cpu
    }

    /// Resets the CPU and clears the program's flag register, as after a
    /// restart request. Breakpoints and symbols survive the reset.
    pub fn reset(&mut self) {
        info!("resetting program");
        self.cpu.reset();
        self.host_io.acknowledge(self.cpu.memory_mut());
        self.controller.clear_latch();
    }

    /// Runs the command loop until quit or a declined restart.
    pub fn run(&mut self) {
        self.running = true;
        while self.running {
            let command = self.ui.read_command();
            self.execute_command(command);
        }
    }

    /// Executes a single command; public so scripted front ends and tests
    /// can drive the debugger without the blocking loop.
    pub fn execute_command(&mut self, command: Command) {
        match command {
            Command::Break(target) => self.add_breakpoint(target),
            Command::RemoveBreak(target) => self.remove_breakpoint(target),
            Command::ListBreakpoints => self.list_breakpoints(),
            Command::Continue => {
                let stop = self.controller.run_continuous(
                    &mut self.cpu,
                    &self.host_io,
                    &self.breakpoints,
                    &mut self.ui,
                );
                self.handle_stop(stop);
            }
            Command::Step(count) => {
                let stop = self.controller.step_many(
                    &mut self.cpu,
                    &self.host_io,
                    &self.breakpoints,
                    &mut self.ui,
                    count.unwrap_or(1),
                );
                self.handle_stop(stop);
            }
            Command::Disassemble(count) => self.disassemble(count.unwrap_or(5)),
            Command::Memory { start, end } => self.dump_memory(start, end),
            Command::Registers => self.show_registers(),
            Command::Help => self.ui.report(&Event::Help),
            Command::Quit => self.running = false,
            Command::Nothing => {}
            Command::Invalid(message) => self.ui.report(&Event::CommandError(message)),
        }
    }

    fn handle_stop(&mut self, stop: StopReason) {
        match stop {
            StopReason::Exited => {
                self.ui.report(&Event::ProgramExited);
                if self.ui.confirm_restart() {
                    self.reset();
                } else {
                    self.running = false;
                }
            }
            StopReason::ControlReturned => self.ui.report(&Event::ControlReturned),
            StopReason::Interrupted => self.ui.report(&Event::Interrupted),
            // Breakpoint hits are reported by the controller at the
            // moment of the halt
            StopReason::Breakpoint(_) | StopReason::Completed => {}
        }
    }

    fn resolve_target(&self, target: &BreakTarget) -> Option<(u16, Option<String>)> {
        match target {
            BreakTarget::Address(address) => Some((*address, None)),
            BreakTarget::Symbol(name) => self
                .symbols
                .resolve(name)
                .map(|address| (address, Some(name.clone()))),
        }
    }

    fn add_breakpoint(&mut self, target: Option<BreakTarget>) {
        let resolved = match &target {
            None => Some((self.cpu.pc(), None)),
            Some(target) => self.resolve_target(target),
        };
        match resolved {
            Some((address, symbol)) => {
                let index = self.breakpoints.add(address, symbol.clone());
                self.ui.report(&Event::BreakpointAdded {
                    index,
                    address,
                    symbol,
                });
            }
            None => self.report_unknown_symbol(target),
        }
    }

    fn remove_breakpoint(&mut self, target: BreakTarget) {
        match self.resolve_target(&target) {
            Some((address, _)) => {
                if self.breakpoints.remove(address) {
                    self.ui.report(&Event::BreakpointRemoved { address });
                } else {
                    self.ui.report(&Event::CommandError(format!(
                        "no breakpoint at 0x{:04x}",
                        address
                    )));
                }
            }
            None => self.report_unknown_symbol(Some(target)),
        }
    }

    fn report_unknown_symbol(&mut self, target: Option<BreakTarget>) {
        let name = match target {
            Some(BreakTarget::Symbol(name)) => name,
            _ => return,
        };
        self.ui
            .report(&Event::CommandError(format!("unknown symbol '{}'", name)));
    }

    fn list_breakpoints(&mut self) {
        let views = self
            .breakpoints
            .iter()
            .enumerate()
            .map(|(index, bp)| BreakpointView {
                index,
                address: bp.address,
                symbol: bp.symbol.clone(),
                text: disassembler::decode_at(self.cpu.memory(), bp.address).to_string(),
            })
            .collect();
        self.ui.report(&Event::BreakpointListing(views));
    }

    fn disassemble(&mut self, count: usize) {
        for instr in disassembler::decode_range(self.cpu.memory(), self.cpu.pc(), count) {
            self.ui.report(&Event::Instruction {
                address: instr.address,
                text: instr.to_string(),
            });
        }
    }

    fn dump_memory(&mut self, start: u16, end: u16) {
        if end < start {
            self.ui.report(&Event::CommandError(
                "memory: end address before start".to_string(),
            ));
            return;
        }
        let bytes = (start..=end)
            .map(|address| self.cpu.memory().read(address))
            .collect();
        self.ui.report(&Event::Memory { start, bytes });
    }

    fn show_registers(&mut self) {
        self.ui.report(&Event::Registers {
            pc: self.cpu.pc(),
            sp: self.cpu.sp(),
            a: self.cpu.a(),
            x: self.cpu.x(),
            y: self.cpu.y(),
            status: self.cpu.status().bits(),
        });
    }
}
