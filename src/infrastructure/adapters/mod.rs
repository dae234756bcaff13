//! Adapters - Where the conversation is shown

pub mod console;

pub use console::ConsoleAdapter;
