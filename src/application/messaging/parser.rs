//! Input parser - Normalizes raw SMS text before the command lookup

use crate::domain::entities::SmsCommand;

/// Result of parsing one SMS body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedInput {
    Command(SmsCommand),
    /// Normalized text that matched nothing in the table
    Unknown(String),
}

/// Parses raw SMS bodies into commands
#[derive(Debug, Default, Clone, Copy)]
pub struct InputParser;

impl InputParser {
    pub fn new() -> Self {
        Self
    }

    /// Trim and uppercase. Blank input yields `None` and is never sent.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_uppercase())
    }

    pub fn parse(&self, raw: &str) -> Option<ParsedInput> {
        let normalized = self.normalize(raw)?;
        Some(match SmsCommand::from_keyword(&normalized) {
            Some(cmd) => ParsedInput::Command(cmd),
            None => ParsedInput::Unknown(normalized),
        })
    }
}
