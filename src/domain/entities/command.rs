use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Reply sent for anything outside the command table
pub const FALLBACK_REPLY: &str = "❓ Invalid command. Reply HELP GRMILES for available commands.";

/// The fixed set of SMS commands understood by the short code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmsCommand {
    BookRide,
    Status,
    Cancel,
    Help,
    Balance,
}

impl SmsCommand {
    /// In the order they are offered as quick picks
    pub const ALL: [SmsCommand; 5] = [
        SmsCommand::BookRide,
        SmsCommand::Status,
        SmsCommand::Cancel,
        SmsCommand::Help,
        SmsCommand::Balance,
    ];

    /// Normalized text the user has to send
    pub fn keyword(&self) -> &'static str {
        match self {
            SmsCommand::BookRide => "BOOK RIDE GRMILES123",
            SmsCommand::Status => "STATUS GRMILES123",
            SmsCommand::Cancel => "CANCEL GRMILES123",
            SmsCommand::Help => "HELP GRMILES",
            SmsCommand::Balance => "BALANCE GRMILES",
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            SmsCommand::BookRide => {
                "✅ Ride booked! Cart #247 will arrive at Dhaka Central Hub in 25 mins. Fare: ৳180. Booking ID: GM001. Reply CANCEL GM001 to cancel."
            }
            SmsCommand::Status => {
                "🚗 Your ride GM001: Cart #247 is 5 mins away from Dhaka Central Hub. Driver: Rahman (4.8⭐). Track: grmiles.co/track/GM001"
            }
            SmsCommand::Cancel => {
                "❌ Ride GM001 cancelled successfully. No charges applied. Book again anytime by texting BOOK RIDE GRMILES123."
            }
            SmsCommand::Help => {
                "📱 GrameenMiles SMS Commands:\n• BOOK RIDE - Book a ride\n• STATUS - Check ride status\n• CANCEL - Cancel booking\n• BALANCE - Check wallet\n• HELP - Show commands"
            }
            SmsCommand::Balance => {
                "💰 Your GrameenMiles balance: ৳450. Last ride: ৳180 on 15/01. Add money: Visit any hub or call 16247."
            }
        }
    }

    /// Exact lookup of an already-normalized command
    pub fn from_keyword(normalized: &str) -> Option<SmsCommand> {
        COMMAND_TABLE.get(normalized).copied()
    }
}

static COMMAND_TABLE: Lazy<HashMap<&'static str, SmsCommand>> = Lazy::new(|| {
    SmsCommand::ALL
        .iter()
        .map(|cmd| (cmd.keyword(), *cmd))
        .collect()
});
