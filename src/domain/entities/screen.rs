//! Screen routing as a finite-state machine

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Booking,
    Map,
    Driver,
    Sustainability,
    Sms,
}

/// User intent that may move the app to another screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(Screen),
    Back,
}

impl Screen {
    /// Screens reachable from the welcome menu
    pub const DESTINATIONS: [Screen; 5] = [
        Screen::Booking,
        Screen::Map,
        Screen::Driver,
        Screen::Sustainability,
        Screen::Sms,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Booking => "booking",
            Screen::Map => "map",
            Screen::Driver => "driver",
            Screen::Sustainability => "sustainability",
            Screen::Sms => "sms",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "GrameenMiles",
            Screen::Booking => "Book a Ride",
            Screen::Map => "Village Hubs",
            Screen::Driver => "Driver Dashboard",
            Screen::Sustainability => "Our Impact",
            Screen::Sms => "SMS Booking Demo",
        }
    }

    pub fn parse(s: &str) -> Option<Screen> {
        let s = s.trim();
        [Screen::Welcome]
            .into_iter()
            .chain(Screen::DESTINATIONS)
            .find(|screen| screen.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Next screen for `action` taken on `current`.
///
/// Destinations open only from the welcome menu; every other screen has a
/// single way out, back to welcome.
pub fn transition(current: Screen, action: Action) -> Screen {
    match (current, action) {
        (Screen::Welcome, Action::Open(next)) => next,
        (_, Action::Back) => Screen::Welcome,
        (screen, Action::Open(_)) => screen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_from_welcome() {
        for dest in Screen::DESTINATIONS {
            assert_eq!(transition(Screen::Welcome, Action::Open(dest)), dest);
        }
    }

    #[test]
    fn test_back_returns_to_welcome() {
        for dest in Screen::DESTINATIONS {
            assert_eq!(transition(dest, Action::Back), Screen::Welcome);
        }
        assert_eq!(transition(Screen::Welcome, Action::Back), Screen::Welcome);
    }

    #[test]
    fn test_open_ignored_off_welcome() {
        assert_eq!(transition(Screen::Sms, Action::Open(Screen::Map)), Screen::Sms);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Screen::parse(" SMS "), Some(Screen::Sms));
        assert_eq!(Screen::parse("welcome"), Some(Screen::Welcome));
        assert_eq!(Screen::parse("settings"), None);
    }
}
