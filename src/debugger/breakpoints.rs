//! Breakpoint storage and hit testing.
//!
//! Breakpoints live in a growable list in insertion order and are removed
//! outright. Duplicate addresses are allowed; they just produce redundant
//! hits.

use std::fmt;

/// A single breakpoint, optionally carrying the symbol it was set from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub address: u16,
    pub symbol: Option<String>,
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{}: ${:04X}", symbol, self.address),
            None => write!(f, "${:04X}", self.address),
        }
    }
}

/// The debugger's active breakpoints.
#[derive(Debug, Default)]
pub struct BreakpointSet {
    breakpoints: Vec<Breakpoint>,
}

impl BreakpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a breakpoint and returns its index.
    pub fn add(&mut self, address: u16, symbol: Option<String>) -> usize {
        self.breakpoints.push(Breakpoint { address, symbol });
        self.breakpoints.len() - 1
    }

    /// Removes every breakpoint at `address`. Returns true when at least
    /// one was removed.
    pub fn remove(&mut self, address: u16) -> bool {
        let before = self.breakpoints.len();
        self.breakpoints.retain(|bp| bp.address != address);
        self.breakpoints.len() != before
    }

    /// Tests whether any breakpoint falls inside the instruction spanning
    /// `[start, start + len)` and returns the first match's index.
    ///
    /// The half-open range means a breakpoint on any byte of a multi-byte
    /// instruction hits, not just one on its first byte.
    pub fn hit_in_range(&self, start: u16, len: u8) -> Option<usize> {
        let lo = start as u32;
        let hi = lo + len as u32;
        self.breakpoints
            .iter()
            .position(|bp| (lo..hi).contains(&(bp.address as u32)))
    }

    pub fn get(&self, index: usize) -> Option<&Breakpoint> {
        self.breakpoints.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.breakpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_returns_insertion_index() {
        let mut set = BreakpointSet::new();

        assert_eq!(set.add(0x0200, None), 0);
        assert_eq!(set.add(0x0300, Some("main".to_string())), 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_hit_on_any_byte_of_instruction() {
        let mut set = BreakpointSet::new();
        set.add(0x0201, None);

        // Three-byte instruction at 0x0200 spans 0x0200..0x0203
        assert_eq!(set.hit_in_range(0x0200, 3), Some(0));
        assert_eq!(set.hit_in_range(0x0201, 1), Some(0));
        // One past the end does not hit
        assert_eq!(set.hit_in_range(0x0202, 1), None);
        assert_eq!(set.hit_in_range(0x01FE, 2), None);
    }

    #[test]
    fn test_remove_deletes_outright() {
        let mut set = BreakpointSet::new();
        set.add(0x0200, None);
        set.add(0x0200, None);
        set.add(0x0300, None);

        assert!(set.remove(0x0200));
        assert_eq!(set.len(), 1);
        assert_eq!(set.hit_in_range(0x0200, 1), None);
        assert!(!set.remove(0x0200));
    }

    #[test]
    fn test_breakpoint_at_irq_vector_is_ordinary() {
        let mut set = BreakpointSet::new();
        set.add(0xFFFF, None);

        assert_eq!(set.hit_in_range(0xFFFF, 1), Some(0));
        assert!(set.remove(0xFFFF));
        assert!(set.is_empty());
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let mut set = BreakpointSet::new();
        set.add(0x0400, Some("loop".to_string()));
        set.add(0x0400, None);

        assert_eq!(set.hit_in_range(0x0400, 2), Some(0));
    }
}
