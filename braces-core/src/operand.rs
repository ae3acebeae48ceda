//! Operands and the Cartesian combiner

use core::fmt;

/// A value flowing through the expansion: one string or an ordered word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A single run of literal text
    Literal(String),
    /// The ordered result of an expanded group
    Group(Vec<String>),
}

impl Operand {
    /// Create an empty literal, the default operand for an exhausted stack
    pub fn empty() -> Self {
        Operand::Literal(String::new())
    }

    /// Create a literal holding a single character
    pub fn from_char(ch: char) -> Self {
        Operand::Literal(ch.to_string())
    }

    /// Number of words this operand stands for
    pub fn len(&self) -> usize {
        match self {
            Operand::Literal(_) => 1,
            Operand::Group(words) => words.len(),
        }
    }

    /// Whether this operand stands for no words at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into the ordered list of words
    pub fn into_words(self) -> Vec<String> {
        match self {
            Operand::Literal(text) => vec![text],
            Operand::Group(words) => words,
        }
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Literal(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Literal(text)
    }
}

impl From<Vec<String>> for Operand {
    fn from(words: Vec<String>) -> Self {
        Operand::Group(words)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(text) => write!(f, "{text:?}"),
            Operand::Group(words) => write!(f, "{words:?}"),
        }
    }
}

/// Concatenate every word of `left` with every word of `right`
///
/// The loop over `left` is the outer one, so the left operand varies
/// slowest in the result:
///
/// ```
/// use braces_core::{combine, Operand};
///
/// let left = Operand::Group(vec!["a".into(), "b".into()]);
/// let right = Operand::Group(vec!["c".into(), "d".into()]);
/// assert_eq!(combine(&left, &right), ["ac", "ad", "bc", "bd"]);
/// ```
pub fn combine(left: &Operand, right: &Operand) -> Vec<String> {
    match (left, right) {
        (Operand::Literal(l), Operand::Literal(r)) => vec![concat(l, r)],
        (Operand::Literal(l), Operand::Group(rs)) => rs.iter().map(|r| concat(l, r)).collect(),
        (Operand::Group(ls), Operand::Literal(r)) => ls.iter().map(|l| concat(l, r)).collect(),
        (Operand::Group(ls), Operand::Group(rs)) => {
            let mut result = Vec::with_capacity(ls.len() * rs.len());
            for l in ls {
                for r in rs {
                    result.push(concat(l, r));
                }
            }
            result
        }
    }
}

fn concat(left: &str, right: &str) -> String {
    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(left);
    joined.push_str(right);
    joined
}
