//! Domain entities - Core business objects with no external dependencies

pub mod booking;
pub mod command;
pub mod hub;
pub mod message;
pub mod screen;

pub use booking::{Booking, BookingKind, BookingStatus, Earnings, RideType, BOOKING_HUBS, DRIVER_EARNINGS};
pub use command::{SmsCommand, FALLBACK_REPLY};
pub use hub::{Cart, CartKind, CartStatus, Hub, HubMap, Position, SolarStatus};
pub use message::{DeliveryState, Direction, MessageId, SmsMessage};
pub use screen::{transition, Action, Screen};
