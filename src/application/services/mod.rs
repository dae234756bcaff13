//! Application services - Business logic orchestration

pub mod driver_service;
pub mod fare_service;
pub mod impact_service;
pub mod responder;
pub mod sms_service;

pub use driver_service::{DriverDashboard, SolarCharge};
pub use fare_service::{FareEstimator, FareQuote, RideRequest};
pub use impact_service::{animate, CountUp, ImpactSection, ImpactStat, IMPACT_STATS};
pub use responder::CommandResponder;
pub use sms_service::{Exchange, SmsService, SmsTiming};
