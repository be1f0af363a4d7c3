//! Scanner module.
//!
//! The scanner is split by token family:
//! - `core` - Scanner struct, the dispatch loop, token and error plumbing
//! - `comment` - `#` line comments
//! - `operator` - one-or-two character operators
//! - `string` - string literals
//! - `number` - number literals
//! - `identifier` - identifiers and reserved words

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
