//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (SmsMessage, SmsCommand, Hub, Booking, Screen)
//! - Traits: Abstractions for infrastructure (Channel, MessageLog, RandomSource)

pub mod entities;
pub mod traits;
