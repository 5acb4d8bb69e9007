//! API routing modules
//!
//! # Structure
//!
//! Public site:
//! - [`health`] - liveness check
//! - [`auth`] - admin login
//! - [`tours`] - tour catalog
//! - [`deals`] - promotional deals with derived fields
//! - [`enquiries`] - contact form intake (POST is public, inbox is admin)
//!
//! Admin panel (JWT required):
//! - [`bookings`] - list/detail/update, CSV export, printable invoice
//! - [`customers`] - customer rows derived from bookings

pub mod auth;
pub mod bookings;
pub mod customers;
pub mod deals;
pub mod enquiries;
pub mod health;
pub mod tours;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
