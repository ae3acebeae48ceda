//! The expansion stack

use crate::operand::Operand;

/// Structural position recorded on the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// An opening brace with no partner seen yet
    Open,
    /// A separator awaiting its next alternative
    Comma,
}

/// One stack entry: either structure or text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A structural marker
    Marker(Marker),
    /// Text data
    Operand(Operand),
}

impl Entry {
    /// Shorthand for an opening brace marker
    pub const OPEN: Entry = Entry::Marker(Marker::Open);
    /// Shorthand for a comma marker
    pub const COMMA: Entry = Entry::Marker(Marker::Comma);

    /// Whether this entry is an opening brace marker
    pub fn is_open(&self) -> bool {
        matches!(self, Entry::Marker(Marker::Open))
    }
}

impl From<Operand> for Entry {
    fn from(operand: Operand) -> Self {
        Entry::Operand(operand)
    }
}

/// Stack of partially built operands and markers for one expansion
///
/// Keeps a count of the [`Marker::Open`] entries it holds so callers can
/// ask whether any group is still unclosed without scanning.
#[derive(Debug, Default)]
pub struct Stack {
    entries: Vec<Entry>,
    open: usize,
}

impl Stack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an entry
    pub fn push(&mut self, entry: impl Into<Entry>) {
        let entry = entry.into();
        if entry.is_open() {
            self.open += 1;
        }
        self.entries.push(entry);
    }

    /// Pop the top entry, `None` when exhausted
    pub fn pop(&mut self) -> Option<Entry> {
        let entry = self.entries.pop()?;
        if entry.is_open() {
            self.open -= 1;
        }
        Some(entry)
    }

    /// Pop the top entry unless it is an opening brace
    pub fn pop_above_open(&mut self) -> Option<Entry> {
        match self.entries.last() {
            Some(top) if !top.is_open() => self.pop(),
            _ => None,
        }
    }

    /// Number of unclosed opening braces on the stack
    pub fn open_groups(&self) -> usize {
        self.open
    }

    /// Whether at least one opening brace is still unclosed
    pub fn in_group(&self) -> bool {
        self.open > 0
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the stack, yielding entries bottom to top
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
