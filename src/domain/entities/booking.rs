//! Rides, ride types and driver-side bookings

use serde::Serialize;
use std::fmt;

/// What the rider wants to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    Passenger,
    Goods,
    Both,
}

impl RideType {
    pub const ALL: [RideType; 3] = [RideType::Passenger, RideType::Goods, RideType::Both];

    /// Flat part of the fare, in taka
    pub fn base_rate(&self) -> u32 {
        match self {
            RideType::Passenger => 15,
            RideType::Goods => 25,
            RideType::Both => 35,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RideType::Passenger => "Passenger",
            RideType::Goods => "Goods",
            RideType::Both => "Both",
        }
    }

    pub fn parse(s: &str) -> Option<RideType> {
        RideType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pickup and drop-off points offered on the booking page
pub const BOOKING_HUBS: [&str; 8] = [
    "Dhaka Central Hub",
    "Chittagong Port Hub",
    "Sylhet Tea Hub",
    "Rajshahi Silk Hub",
    "Khulna Shrimp Hub",
    "Barisal Rice Hub",
    "Rangpur Potato Hub",
    "Mymensingh Cotton Hub",
];

/// Canonical booking hub name for a case-insensitive match
pub fn find_booking_hub(name: &str) -> Option<&'static str> {
    let name = name.trim();
    BOOKING_HUBS
        .into_iter()
        .find(|hub| hub.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Active,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Passenger,
    Goods,
    Mixed,
}

/// A job in the driver's queue
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: String,
    pub kind: BookingKind,
    pub from: String,
    pub to: String,
    pub passengers: u8,
    pub fare: u32,
    pub status: BookingStatus,
    pub scheduled_time: String,
    /// Minutes
    pub estimated_duration: u32,
    pub customer_name: String,
    pub customer_rating: Option<f32>,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    fn fixture(
        id: &str,
        kind: BookingKind,
        from: &str,
        to: &str,
        passengers: u8,
        fare: u32,
        status: BookingStatus,
        scheduled_time: &str,
        estimated_duration: u32,
        customer_name: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            from: from.to_string(),
            to: to.to_string(),
            passengers,
            fare,
            status,
            scheduled_time: scheduled_time.to_string(),
            estimated_duration,
            customer_name: customer_name.to_string(),
            customer_rating: None,
        }
    }

    /// The driver's queue as the dashboard first shows it
    pub fn samples() -> Vec<Booking> {
        vec![
            Booking::fixture(
                "B001",
                BookingKind::Passenger,
                "Dhaka Central",
                "Chittagong Port",
                3,
                180,
                BookingStatus::Active,
                "2:30 PM",
                45,
                "Rahman Family",
            ),
            Booking::fixture(
                "B002",
                BookingKind::Goods,
                "Sylhet Tea Hub",
                "Dhaka Central",
                0,
                250,
                BookingStatus::Pending,
                "4:00 PM",
                60,
                "Tea Export Co.",
            ),
            Booking::fixture(
                "B003",
                BookingKind::Mixed,
                "Rajshahi Silk",
                "Khulna Shrimp",
                2,
                320,
                BookingStatus::Pending,
                "5:15 PM",
                75,
                "Silk Traders + Family",
            ),
        ]
    }
}

/// Driver earnings summary, in taka
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Earnings {
    pub today: u32,
    pub week: u32,
    pub month: u32,
    pub total_rides: u32,
    pub avg_rating: f32,
    /// Percent
    pub completion_rate: u8,
}

pub const DRIVER_EARNINGS: Earnings = Earnings {
    today: 850,
    week: 4200,
    month: 18500,
    total_rides: 127,
    avg_rating: 4.8,
    completion_rate: 96,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rates() {
        assert_eq!(RideType::Passenger.base_rate(), 15);
        assert_eq!(RideType::Goods.base_rate(), 25);
        assert_eq!(RideType::Both.base_rate(), 35);
    }

    #[test]
    fn test_parse_ride_type() {
        assert_eq!(RideType::parse(" goods "), Some(RideType::Goods));
        assert_eq!(RideType::parse("BOTH"), Some(RideType::Both));
        assert_eq!(RideType::parse("mixed"), None);
    }

    #[test]
    fn test_find_booking_hub() {
        assert_eq!(find_booking_hub("barisal rice hub"), Some("Barisal Rice Hub"));
        assert_eq!(find_booking_hub("Barisal"), None);
    }

    #[test]
    fn test_sample_queue() {
        let bookings = Booking::samples();
        assert_eq!(bookings.len(), 3);
        assert_eq!(bookings[0].status, BookingStatus::Active);
        assert!(bookings[1..].iter().all(|b| b.status == BookingStatus::Pending));
    }
}
