//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: In-memory conversation log
//! - Adapters: Where the conversation is shown (console)
//! - Random: Generator behind simulated distances and ETAs

pub mod config;
pub mod storage;
pub mod adapters;
pub mod random;
