//! Message handling - SMS input parsing

pub mod parser;

pub use parser::{InputParser, ParsedInput};
