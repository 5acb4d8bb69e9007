//! Customer API module (admin panel)
//!
//! Customers are not stored records: they are derived on demand from the
//! booking collection, one row per distinct email.

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub use handler::CustomerView;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .layer(middleware::from_fn(require_admin))
}
