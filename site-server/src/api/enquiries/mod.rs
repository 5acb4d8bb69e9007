//! Enquiry API module
//!
//! Submission is public (the contact form); the inbox is admin-only.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/enquiries", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create).get(handler::list))
}
