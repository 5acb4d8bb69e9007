//! Data models
//!
//! Shared between site-server and frontend (via API).
//! All timestamps are `i64` Unix millis; conversion to the business
//! timezone happens at presentation boundaries only.

pub mod booking;
pub mod deal;
pub mod enquiry;
pub mod tour;

// Re-exports
pub use booking::*;
pub use deal::*;
pub use enquiry::*;
pub use tour::*;
