//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: SMS simulator, fare estimation, driver dashboard, impact figures
//! - Errors: Domain-specific errors
//! - Messaging: SMS input parsing

pub mod errors;
pub mod services;
pub mod messaging;
