//! Debug symbol table.
//!
//! Symbols come from an assembler-produced listing with one
//! `name address` pair per line; addresses are hexadecimal with an
//! optional `0x` or `$` prefix. Blank lines and lines starting with `#`
//! or `;` are ignored.

use crate::debugger::commands::parse_address;
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Failure to load a symbol file.
#[derive(Debug)]
pub enum SymbolError {
    /// The file could not be read.
    Io(io::Error),

    /// A line was not a `name address` pair.
    Parse { line: usize, text: String },
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolError::Io(err) => write!(f, "cannot read symbol file: {}", err),
            SymbolError::Parse { line, text } => {
                write!(f, "bad symbol entry on line {}: '{}'", line, text)
            }
        }
    }
}

impl Error for SymbolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SymbolError::Io(err) => Some(err),
            SymbolError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for SymbolError {
    fn from(err: io::Error) -> Self {
        SymbolError::Io(err)
    }
}

/// Maps symbol names to addresses for breakpoint commands.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a symbol table from a listing file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dbg6502::debugger::SymbolTable;
    ///
    /// let symbols = SymbolTable::from_file("program.sym")?;
    /// assert_eq!(symbols.resolve("main"), Some(0x0200));
    /// # Ok::<(), dbg6502::debugger::SymbolError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SymbolError> {
        let text = fs::read_to_string(&path)?;
        let mut table = Self::new();

        for (number, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }
            let mut fields = trimmed.split_whitespace();
            let entry = fields
                .next()
                .zip(fields.next().and_then(parse_address));
            match entry {
                Some((name, address)) => table.insert(name, address),
                None => {
                    return Err(SymbolError::Parse {
                        line: number + 1,
                        text: trimmed.to_string(),
                    })
                }
            }
        }

        info!(
            "loaded {} symbols from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    pub fn insert(&mut self, name: &str, address: u16) {
        self.symbols.insert(name.to_string(), address);
    }

    /// Looks a symbol up by name.
    pub fn resolve(&self, name: &str) -> Option<u16> {
        self.symbols.get(name).copied()
    }

    /// Reverse lookup, for annotating addresses in listings.
    pub fn name_for(&self, address: u16) -> Option<&str> {
        self.symbols
            .iter()
            .find(|(_, &a)| a == address)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
