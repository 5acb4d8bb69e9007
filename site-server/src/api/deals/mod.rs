//! Deal API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::DealView;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/deals", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}
