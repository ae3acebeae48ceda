//! One-pass brace expansion over a tagged stack

use tracing::{debug, trace};

use crate::{
    operand::{combine, Operand},
    stack::{Entry, Marker, Stack},
};

/// Delimiter placed between expanded words unless configured otherwise
pub const DEFAULT_DELIMITER: &str = " ";

/// Expand `pattern` and join the words with `delimiter`
///
/// Never fails: braces that do not form a group are kept as literal text.
/// The output grows with the product of the alternative counts of all
/// groups, so a short pattern can yield a very large result.
///
/// ```
/// assert_eq!(
///     braces_core::expand("a{b,c}d{e,f}", " "),
///     "abde abdf acde acdf"
/// );
/// assert_eq!(braces_core::expand("foo{}bar", " "), "foo{}bar");
/// ```
pub fn expand(pattern: &str, delimiter: &str) -> String {
    expand_words(pattern).join(delimiter)
}

/// Expand `pattern` into its ordered list of words
pub fn expand_words(pattern: &str) -> Vec<String> {
    let mut scanner = BraceScanner::new();
    for ch in pattern.chars() {
        scanner.step(ch);
    }
    let words = scanner.finish();

    debug!(
        pattern_len = pattern.len(),
        words = words.len(),
        "expanded pattern"
    );
    words
}

/// Character-by-character expansion state
///
/// Feed the pattern with [`step`](Self::step) and collect the words with
/// [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct BraceScanner {
    stack: Stack,
}

impl BraceScanner {
    /// Create a scanner with an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one character of the pattern
    pub fn step(&mut self, ch: char) {
        match ch {
            '{' => self.open(),
            ',' if self.stack.in_group() => self.comma(),
            '}' => self.close(),
            _ => self.literal(ch),
        }
    }

    /// Number of groups opened but not yet closed
    pub fn depth(&self) -> usize {
        self.stack.open_groups()
    }

    fn open(&mut self) {
        trace!(depth = self.stack.open_groups(), "open brace");
        self.stack.push(Entry::OPEN);
    }

    fn comma(&mut self) {
        match self.stack.pop() {
            // Two separators in a row: the alternative between them is empty
            Some(Entry::Marker(Marker::Comma)) | None => self.stack.push(Operand::empty()),
            // Separator right after the brace: leading empty alternative
            Some(Entry::Marker(Marker::Open)) => {
                self.stack.push(Entry::OPEN);
                self.stack.push(Operand::empty());
            }
            Some(operand) => self.stack.push(operand),
        }
        self.stack.push(Entry::COMMA);
    }

    fn literal(&mut self, ch: char) {
        match self.stack.pop() {
            None | Some(Entry::Marker(Marker::Comma)) => self.stack.push(Operand::from_char(ch)),
            Some(Entry::Marker(Marker::Open)) => {
                self.stack.push(Entry::OPEN);
                self.stack.push(Operand::from_char(ch));
            }
            Some(Entry::Operand(Operand::Literal(mut text))) => {
                text.push(ch);
                self.stack.push(Operand::Literal(text));
            }
            Some(Entry::Operand(Operand::Group(mut words))) => {
                for word in &mut words {
                    word.push(ch);
                }
                self.stack.push(Operand::Group(words));
            }
        }
    }

    fn close(&mut self) {
        let mut alternatives = Vec::new();
        while let Some(entry) = self.stack.pop_above_open() {
            alternatives.push(entry);
        }
        alternatives.reverse();

        let opened = match self.stack.pop() {
            Some(entry) => {
                debug_assert!(entry.is_open());
                true
            }
            None => false,
        };

        let prefix = match self.stack.pop() {
            Some(Entry::Operand(operand)) => operand,
            // The group is itself the first alternative of an enclosing one
            Some(Entry::Marker(Marker::Open)) => {
                self.stack.push(Entry::OPEN);
                Operand::empty()
            }
            // The group starts a fresh alternative after a separator
            Some(Entry::Marker(Marker::Comma)) | None => Operand::empty(),
        };

        trace!(
            alternatives = alternatives.len(),
            opened,
            depth = self.stack.open_groups(),
            "close brace"
        );

        let words = group_words(alternatives, opened);
        let expanded = combine(&prefix, &Operand::Group(words));
        self.stack.push(Operand::Group(expanded));
    }

    /// Collapse the stack into the ordered list of words
    ///
    /// Groups left open are rendered as the text they were read from.
    pub fn finish(self) -> Vec<String> {
        let mut operands = Vec::with_capacity(self.stack.len());
        let mut in_open_group = false;
        let mut needs_separator = false;

        for entry in self.stack.into_entries() {
            match entry {
                Entry::Marker(Marker::Open) => {
                    operands.push(Operand::from_char('{'));
                    in_open_group = true;
                    needs_separator = false;
                }
                Entry::Marker(Marker::Comma) => {
                    operands.push(Operand::from_char(','));
                    needs_separator = false;
                }
                Entry::Operand(operand) => {
                    if needs_separator {
                        operands.push(Operand::from_char(','));
                    }
                    operands.push(operand);
                    needs_separator = in_open_group;
                }
            }
        }

        operands
            .iter()
            .rev()
            .fold(vec![String::new()], |words, operand| {
                combine(operand, &Operand::Group(words))
            })
    }
}

/// Turn the entries collected between a pair of braces into words
///
/// A group with fewer than two alternatives is not a real group, so its
/// braces are put back as text.
fn group_words(entries: Vec<Entry>, opened: bool) -> Vec<String> {
    let mut operands: Vec<Operand> = entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Operand(operand) => operand,
            // Only a trailing separator is ever collected: "{a,}"
            Entry::Marker(_) => Operand::empty(),
        })
        .collect();

    if operands.len() > 1 {
        return operands.into_iter().flat_map(Operand::into_words).collect();
    }

    let only = operands.pop().unwrap_or_else(Operand::empty);
    let close = Operand::from_char('}');
    if opened {
        let wrapped = Operand::Group(combine(&Operand::from_char('{'), &only));
        combine(&wrapped, &close)
    } else {
        combine(&only, &close)
    }
}
