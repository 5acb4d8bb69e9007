//! Shared types for the Tradewinds site backend
//!
//! Domain records (bookings, deals, tours, enquiries) and the money type,
//! used by the site server and by API clients.

pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use money::{Currency, Money};
