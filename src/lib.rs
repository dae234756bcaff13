//! GrameenMiles - shared electric carts for rural hubs
//!
//! A console rendition of the rural ride-booking demo: SMS booking through a
//! simulated short code, fare quotes, the hub map, the driver dashboard and
//! the sustainability figures.

pub mod domain;
pub mod application;
pub mod infrastructure;
