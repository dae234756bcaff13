use serde::Serialize;

use crate::domain::entities::booking::find_booking_hub;
use crate::domain::entities::RideType;
use crate::domain::traits::RandomSource;

/// Simulated trip length, in km
const DISTANCE_RANGE: std::ops::Range<u32> = 5..25;
/// Simulated pickup wait, in minutes
const ETA_RANGE: std::ops::Range<u32> = 15..45;
const PER_KM_RATE: u32 = 2;
/// Share of the fare a shared ride saves
const SHARING_DISCOUNT_PERCENT: u32 = 40;

/// Booking form selections; any of them may still be missing
#[derive(Debug, Clone, Default)]
pub struct RideRequest {
    pub ride_type: Option<RideType>,
    pub pickup: Option<String>,
    pub drop: Option<String>,
}

impl RideRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ride_type(mut self, ride_type: RideType) -> Self {
        self.ride_type = Some(ride_type);
        self
    }

    pub fn with_pickup(mut self, hub: impl Into<String>) -> Self {
        self.pickup = Some(hub.into());
        self
    }

    pub fn with_drop(mut self, hub: impl Into<String>) -> Self {
        self.drop = Some(hub.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareQuote {
    pub ride_type: RideType,
    pub pickup: &'static str,
    pub drop: &'static str,
    pub distance_km: u32,
    /// Taka
    pub fare: u32,
    pub eta_minutes: u32,
    pub sharing_savings: u32,
}

/// Prices rides from the base rate and a simulated distance
pub struct FareEstimator {
    rng: Box<dyn RandomSource>,
}

impl FareEstimator {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Quote a ride. `None` until ride type, pickup and drop are all chosen
    /// and both hubs are on the booking list.
    pub fn quote(&mut self, request: &RideRequest) -> Option<FareQuote> {
        let ride_type = request.ride_type?;
        let pickup = find_booking_hub(request.pickup.as_deref()?)?;
        let drop = find_booking_hub(request.drop.as_deref()?)?;

        let distance_km = self.rng.draw(DISTANCE_RANGE);
        let eta_minutes = self.rng.draw(ETA_RANGE);
        let fare = ride_type.base_rate() + distance_km * PER_KM_RATE;

        tracing::debug!("Fare {} -> {}: {} km, ৳{}", pickup, drop, distance_km, fare);

        Some(FareQuote {
            ride_type,
            pickup,
            drop,
            distance_km,
            fare,
            eta_minutes,
            sharing_savings: fare * SHARING_DISCOUNT_PERCENT / 100,
        })
    }
}
