use serde::Serialize;

use crate::application::errors::BookingError;
use crate::domain::entities::{Booking, BookingStatus, Earnings, DRIVER_EARNINGS};

/// State of the cart's solar charger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolarCharge {
    Charging,
    Full,
    Low,
}

impl SolarCharge {
    pub fn label(&self) -> &'static str {
        match self {
            SolarCharge::Charging => "Charging",
            SolarCharge::Full => "Full",
            SolarCharge::Low => "Low",
        }
    }
}

/// Driver's view of their queue, cart and earnings
#[derive(Debug, Clone, Serialize)]
pub struct DriverDashboard {
    bookings: Vec<Booking>,
    battery_level: u8,
    solar: SolarCharge,
    earnings: Earnings,
}

impl DriverDashboard {
    pub fn new() -> Self {
        Self {
            bookings: Booking::samples(),
            battery_level: 78,
            solar: SolarCharge::Charging,
            earnings: DRIVER_EARNINGS,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn with_status(&self, status: BookingStatus) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(move |b| b.status == status)
    }

    pub fn earnings(&self) -> &Earnings {
        &self.earnings
    }

    pub fn battery_level(&self) -> u8 {
        self.battery_level
    }

    pub fn solar(&self) -> SolarCharge {
        self.solar
    }

    pub fn battery_advisory(&self) -> &'static str {
        match self.battery_level {
            81..=u8::MAX => "Excellent range",
            51..=80 => "Good for local trips",
            _ => "Consider charging",
        }
    }

    /// pending → active
    pub fn accept(&mut self, id: &str) -> Result<&Booking, BookingError> {
        self.advance(id, BookingStatus::Pending, BookingStatus::Active, "accept")
    }

    /// active → completed
    pub fn complete(&mut self, id: &str) -> Result<&Booking, BookingError> {
        self.advance(id, BookingStatus::Active, BookingStatus::Completed, "complete")
    }

    fn advance(
        &mut self,
        id: &str,
        from: BookingStatus,
        to: BookingStatus,
        action: &'static str,
    ) -> Result<&Booking, BookingError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        if booking.status != from {
            return Err(BookingError::InvalidTransition {
                id: booking.id.clone(),
                from: booking.status,
                action,
            });
        }

        booking.status = to;
        tracing::info!("Booking {} {}: {} -> {}", booking.id, action, from, to);
        Ok(&*booking)
    }
}

impl Default for DriverDashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_then_complete() {
        let mut dash = DriverDashboard::new();
        assert_eq!(dash.accept("B002").unwrap().status, BookingStatus::Active);
        assert_eq!(dash.complete("b002").unwrap().status, BookingStatus::Completed);
        assert_eq!(dash.with_status(BookingStatus::Completed).count(), 1);
    }

    #[test]
    fn test_cannot_complete_pending() {
        let mut dash = DriverDashboard::new();
        let err = dash.complete("B003").unwrap_err();
        assert_eq!(
            err,
            BookingError::InvalidTransition {
                id: "B003".to_string(),
                from: BookingStatus::Pending,
                action: "complete",
            }
        );
        assert_eq!(err.to_string(), "Cannot complete booking B003 while it is pending");
    }

    #[test]
    fn test_cannot_accept_twice() {
        let mut dash = DriverDashboard::new();
        assert!(dash.accept("B001").is_err());
    }

    #[test]
    fn test_unknown_booking() {
        let mut dash = DriverDashboard::new();
        assert_eq!(dash.accept("B999").unwrap_err(), BookingError::NotFound("B999".to_string()));
    }

    #[test]
    fn test_battery_advisory() {
        let mut dash = DriverDashboard::new();
        assert_eq!(dash.battery_advisory(), "Good for local trips");
        dash.battery_level = 81;
        assert_eq!(dash.battery_advisory(), "Excellent range");
        dash.battery_level = 80;
        assert_eq!(dash.battery_advisory(), "Good for local trips");
        dash.battery_level = 50;
        assert_eq!(dash.battery_advisory(), "Consider charging");
    }

    #[test]
    fn test_initial_state() {
        let dash = DriverDashboard::new();
        assert_eq!(dash.solar(), SolarCharge::Charging);
        assert_eq!(dash.earnings().month, 18500);
        assert_eq!(dash.with_status(BookingStatus::Pending).count(), 2);
    }
}
