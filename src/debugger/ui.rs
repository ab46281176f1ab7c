//! The seam between the debugger core and whatever front end displays it.
//!
//! The core never prints or reads terminals directly; it hands structured
//! [`Event`]s to a [`DebuggerUi`] implementation and asks it for commands
//! and keystrokes. This keeps display toolkits out of the core and makes
//! the whole command loop scriptable in tests.

use crate::debugger::commands::Command;

/// A snapshot of one breakpoint for listing, with its disassembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointView {
    pub index: usize,
    pub address: u16,
    pub symbol: Option<String>,
    pub text: String,
}

/// Something the debugger wants shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One disassembled instruction, from stepping or a listing command.
    Instruction { address: u16, text: String },

    /// Register contents in response to the registers command.
    Registers {
        pc: u16,
        sp: u8,
        a: u8,
        x: u8,
        y: u8,
        status: u8,
    },

    /// A breakpoint was set.
    BreakpointAdded {
        index: usize,
        address: u16,
        symbol: Option<String>,
    },

    /// All breakpoints at an address were removed.
    BreakpointRemoved { address: u16 },

    /// Execution halted on a breakpoint, before the instruction ran.
    BreakpointHit {
        index: usize,
        address: u16,
        symbol: Option<String>,
        text: String,
    },

    /// The next step executes through the breakpoint just halted on.
    SteppingThroughBreakpoint { address: u16 },

    /// The full breakpoint list; empty when none are set.
    BreakpointListing(Vec<BreakpointView>),

    /// A memory dump, `bytes[i]` holding the value at `start + i`.
    Memory { start: u16, bytes: Vec<u8> },

    /// The program raised a video output request.
    VideoRequested,

    /// The program set the exit bit.
    ProgramExited,

    /// The program handed control back to the debugger.
    ControlReturned,

    /// Continuous execution was cancelled from the host (Ctrl-C).
    Interrupted,

    /// Command help was requested.
    Help,

    /// A command failed to parse or referenced something unknown.
    CommandError(String),
}

/// A debugger front end.
///
/// `read_command` may block; everything else must return promptly because
/// `poll_key` and `put_output` are called between CPU instructions during
/// continuous execution.
pub trait DebuggerUi {
    /// Prompts for and returns the next command.
    fn read_command(&mut self) -> Command;

    /// Displays a structured event.
    fn report(&mut self, event: &Event);

    /// Non-blocking keyboard poll during continuous execution; `None`
    /// means no key is pending, which is the normal case.
    fn poll_key(&mut self) -> Option<u8>;

    /// Displays one byte of program output.
    fn put_output(&mut self, byte: u8);

    /// Asks whether to restart after the program exited; `false` quits.
    fn confirm_restart(&mut self) -> bool;
}
