//! Command parsing for the debugger prompt.
//!
//! Commands are a single mnemonic with optional arguments, separated by
//! whitespace. Most commands accept several aliases (`b`, `bp`, `break`,
//! `breakpoint` all set a breakpoint). Addresses are hexadecimal and may
//! be written with a `0x` or `$` prefix or bare.

/// Where a breakpoint command points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakTarget {
    Address(u16),
    Symbol(String),
}

/// One parsed debugger command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a breakpoint; `None` means at the current PC.
    Break(Option<BreakTarget>),

    /// Remove a breakpoint by address or symbol.
    RemoveBreak(BreakTarget),

    /// List active breakpoints.
    ListBreakpoints,

    /// Run until a breakpoint, signal or interrupt.
    Continue,

    /// Execute `n` instructions; `None` means one.
    Step(Option<u64>),

    /// Disassemble `n` instructions from the PC; `None` means five.
    Disassemble(Option<usize>),

    /// Dump a memory range, inclusive of both ends.
    Memory { start: u16, end: u16 },

    /// Show the register contents.
    Registers,

    /// Show command help.
    Help,

    /// Leave the debugger.
    Quit,

    /// Empty input; ignored.
    Nothing,

    /// Anything that failed to parse, with a message for display.
    Invalid(String),
}

/// Parses a hexadecimal address with an optional `0x` or `$` prefix.
pub(crate) fn parse_address(token: &str) -> Option<u16> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .or_else(|| token.strip_prefix('$'))
        .unwrap_or(token);
    u16::from_str_radix(digits, 16).ok()
}

fn parse_break_target(token: &str) -> BreakTarget {
    // A token with a prefix or made only of hex digits is an address;
    // anything else is looked up as a symbol
    let looks_numeric = token.starts_with("0x")
        || token.starts_with("0X")
        || token.starts_with('$')
        || token.chars().all(|c| c.is_ascii_hexdigit());
    if looks_numeric {
        if let Some(address) = parse_address(token) {
            return BreakTarget::Address(address);
        }
    }
    BreakTarget::Symbol(token.to_string())
}

/// Parses one line of debugger input.
pub fn parse(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Command::Nothing;
    };
    let arg = tokens.next();

    match head {
        "b" | "bp" | "break" | "breakpoint" => {
            Command::Break(arg.map(parse_break_target))
        }
        "rb" | "rbp" | "rmb" | "rmbp" | "remb" | "rembp" | "remove" | "removebp" => match arg {
            Some(token) => Command::RemoveBreak(parse_break_target(token)),
            None => Command::Invalid("remove: expected an address or symbol".to_string()),
        },
        "l" | "ls" | "list" | "lbp" | "listbp" => Command::ListBreakpoints,
        "c" | "cont" | "continue" => Command::Continue,
        "s" | "step" => match arg {
            Some(token) => match token.parse::<u64>() {
                Ok(n) => Command::Step(Some(n)),
                Err(_) => Command::Invalid(format!("step: bad count '{}'", token)),
            },
            None => Command::Step(None),
        },
        "d" | "dis" | "disas" | "disassemble" => match arg {
            Some(token) => match token.parse::<usize>() {
                Ok(n) => Command::Disassemble(Some(n)),
                Err(_) => Command::Invalid(format!("disassemble: bad count '{}'", token)),
            },
            None => Command::Disassemble(None),
        },
        "m" | "mem" | "memory" => {
            let (Some(start), Some(end)) = (arg.and_then(parse_address), tokens.next().and_then(parse_address))
            else {
                return Command::Invalid("memory: expected start and end addresses".to_string());
            };
            Command::Memory { start, end }
        }
        "r" | "reg" | "regis" | "register" | "registers" => Command::Registers,
        "h" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command '{}'", other)),
    }
}
