//! Booking API module (admin panel)
//!
//! List/detail/update plus the two export sinks. Everything here sits
//! behind [`require_auth`] (applied globally) and the admin gate.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub use handler::ListQuery;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/export", get(handler::export_csv))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/invoice", get(handler::invoice))
        .layer(middleware::from_fn(require_admin))
}
