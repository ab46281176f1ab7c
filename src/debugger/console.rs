//! A plain line-oriented console front end.
//!
//! Reads commands from stdin and prints events to stdout. Because stdin
//! is line buffered, `poll_key` always reports no input; forwarding live
//! keystrokes during continuous execution needs a raw-terminal front end
//! on top of the same trait.

use crate::debugger::commands::{self, Command};
use crate::debugger::ui::{DebuggerUi, Event};
use std::io::{self, BufRead, Write};

/// Stdin/stdout implementation of [`DebuggerUi`].
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> String {
        let mut line = String::new();
        print!("(dbg) ");
        let _ = io::stdout().flush();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return "quit".to_string();
        }
        if line.is_empty() {
            // EOF on stdin
            return "quit".to_string();
        }
        line
    }
}

impl DebuggerUi for ConsoleUi {
    fn read_command(&mut self) -> Command {
        commands::parse(&self.read_line())
    }

    fn report(&mut self, event: &Event) {
        match event {
            Event::Instruction { address, text } => {
                println!("\t{:04x}\t{}", address, text);
            }
            Event::Registers {
                pc,
                sp,
                a,
                x,
                y,
                status,
            } => {
                println!(
                    "PC={:04x} SP={:02x} A={:02x} X={:02x} Y={:02x} status={:02x}",
                    pc, sp, a, x, y, status
                );
            }
            Event::BreakpointAdded {
                index,
                address,
                symbol,
            } => match symbol {
                Some(name) => println!(
                    "  Breakpoint [{}] set at {} (0x{:04x})",
                    index, name, address
                ),
                None => println!("  Breakpoint [{}] set at 0x{:04x}", index, address),
            },
            Event::BreakpointRemoved { address } => {
                println!("  Removed breakpoint at 0x{:04x}", address);
            }
            Event::BreakpointHit {
                index,
                address,
                symbol,
                text,
            } => {
                println!(
                    "  At breakpoint [{}] {}: {:04x}   {}",
                    index,
                    symbol.as_deref().unwrap_or(""),
                    address,
                    text
                );
            }
            Event::SteppingThroughBreakpoint { .. } => {
                println!("  Stepping through breakpoint...");
            }
            Event::BreakpointListing(views) => {
                if views.is_empty() {
                    println!("\tNo breakpoints set");
                }
                for view in views {
                    match &view.symbol {
                        Some(name) => println!(
                            "\t[{}] {}: 0x{:04x}\t{}",
                            view.index, name, view.address, view.text
                        ),
                        None => println!(
                            "\t[{}] 0x{:04x}\t{}",
                            view.index, view.address, view.text
                        ),
                    }
                }
            }
            Event::Memory { start, bytes } => {
                for (row, chunk) in bytes.chunks(16).enumerate() {
                    let address = start.wrapping_add(row as u16 * 16);
                    print!("{:04x}:", address);
                    for byte in chunk {
                        print!(" {:02x}", byte);
                    }
                    println!();
                }
            }
            Event::VideoRequested => {}
            Event::ProgramExited => println!("\n\tProgram exited."),
            Event::ControlReturned => println!("\n\tBack into debugger"),
            Event::Interrupted => println!("\n\tInterrupted"),
            Event::Help => {
                println!("Help : -");
                println!("b [addr/symbol]: Set a breakpoint at the PC, an address, or a symbol");
                println!("rb <addr/symbol>: Remove a breakpoint");
                println!("l: List all breakpoints");
                println!("c: Continue the program from the current state");
                println!("s [n]: Step the program by one or n instructions");
                println!("d [n]: Disassemble the next 5 or n instructions");
                println!("m <start> <end>: Display memory contents over a range");
                println!("r: Display the register contents");
                println!("h: Display this help");
                println!("q: Quit");
            }
            Event::CommandError(message) => println!("  {}", message),
        }
    }

    fn poll_key(&mut self) -> Option<u8> {
        None
    }

    fn put_output(&mut self, byte: u8) {
        print!("{}", byte as char);
        let _ = io::stdout().flush();
    }

    fn confirm_restart(&mut self) -> bool {
        print!("\tRestart or exit? [r/E]: ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        line.trim().eq_ignore_ascii_case("r")
    }
}
