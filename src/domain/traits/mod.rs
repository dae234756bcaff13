//! Domain traits - Abstractions for infrastructure implementations

pub mod channel;
pub mod random;
pub mod store;

pub use channel::{Channel, ChannelInfo};
pub use random::RandomSource;
pub use store::MessageLog;
