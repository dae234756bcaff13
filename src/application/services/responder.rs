use crate::application::messaging::{InputParser, ParsedInput};
use crate::domain::entities::{SmsCommand, FALLBACK_REPLY};

/// Maps an SMS body to its canned reply
///
/// Every input gets an answer: unknown commands receive [`FALLBACK_REPLY`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandResponder {
    parser: InputParser,
}

impl CommandResponder {
    pub fn new() -> Self {
        Self {
            parser: InputParser::new(),
        }
    }

    pub fn respond(&self, raw: &str) -> &'static str {
        match self.parser.parse(raw) {
            Some(ParsedInput::Command(cmd)) => {
                tracing::debug!("SMS command: {:?}", cmd);
                cmd.reply()
            }
            Some(ParsedInput::Unknown(text)) => {
                tracing::debug!("Unknown SMS command: {}", text);
                FALLBACK_REPLY
            }
            None => FALLBACK_REPLY,
        }
    }

    /// Commands offered as quick picks
    pub fn sample_commands(&self) -> impl Iterator<Item = &'static str> {
        SmsCommand::ALL.into_iter().map(|cmd| cmd.keyword())
    }

    pub fn parser(&self) -> &InputParser {
        &self.parser
    }
}
