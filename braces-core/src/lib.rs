//! Stack-based brace expansion
//!
//! Expands shell-style brace groups such as `a{b,c}d` into every word they
//! stand for (`abd acd`), in left-to-right order with the leftmost group
//! varying slowest. Groups nest freely. Ranges (`{1..5}`), globs and escapes
//! are not interpreted.
//!
//! Malformed input never fails: a brace without a partner, an empty pair of
//! braces, or a pair without a comma between them is copied to the output
//! as literal text.
//!
//! # Algorithm
//!
//! The pattern is scanned once, left to right, over a single [`Stack`] of
//! [`Entry`] values: opening-brace and comma [`Marker`]s interleaved with
//! partially built [`Operand`]s. A closing brace collapses everything above
//! the nearest opening brace into one [`Operand::Group`]. At the end the
//! stack is folded with [`combine`] into the final word list.
//!
//! # Example
//!
//! ```rust
//! use braces_core::{expand, expand_words, DEFAULT_DELIMITER};
//!
//! assert_eq!(
//!     expand("this{foo,bar{baz,qux}}", DEFAULT_DELIMITER),
//!     "thisfoo thisbarbaz thisbarqux"
//! );
//! assert_eq!(expand_words("foo{,bar,}baz"), ["foobaz", "foobarbaz", "foobaz"]);
//! ```

#![warn(missing_docs)]

pub mod expander;
pub mod operand;
pub mod stack;

pub use expander::{expand, expand_words, BraceScanner, DEFAULT_DELIMITER};
pub use operand::{combine, Operand};
pub use stack::{Entry, Marker, Stack};
