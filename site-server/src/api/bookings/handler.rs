//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use shared::models::{Booking, BookingUpdate};

use crate::core::ServerState;
use crate::export::{self, CSV_CONTENT_TYPE, InvoiceRenderer};
use crate::query::{self, BookingListState, DateRange, Page, SortKey};
use crate::utils::{AppError, AppResult};

/// Query params for the booking list; the export endpoint reuses them so
/// the file always matches what the list view shows
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub tour: Option<String>,
    pub range: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl ListQuery {
    /// Normalize wire values into query state
    ///
    /// Malformed values fall back to "no filter"/defaults; a bad query
    /// string narrows nothing and never errors.
    fn into_state(self) -> BookingListState {
        let mut state = BookingListState::new();
        if let Some(q) = self.q {
            state.set_query(q);
        }
        if let Some(s) = self.status {
            state.set_status(query::parse_status_filter(&s));
        }
        if let Some(t) = self.tour {
            state.set_tour(query::parse_tour_filter(&t));
        }
        if let Some(r) = self.range {
            state.set_range(DateRange::parse(&r));
        }
        if let Some(s) = self.sort {
            state.set_sort(SortKey::parse(&s));
        }
        if let Some(p) = self.page {
            state.set_page(p.parse().unwrap_or(1));
        }
        state
    }
}

/// GET /api/bookings - filtered, sorted, paged booking list
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Json<Page<Booking>>> {
    let now = state.now();
    let list_state = params.into_state();
    let bookings = state.store.bookings_snapshot();
    Ok(Json(state.pipeline.run(&bookings, &list_state, now)))
}

/// GET /api/bookings/{id} - single booking
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .store
        .booking(&id)
        .ok_or_else(|| AppError::not_found(format!("Booking {}", id)))?;
    Ok(Json(booking))
}

/// PUT /api/bookings/{id} - update status and/or notes
///
/// Status changes go through the transition table; anything else about
/// the booking is immutable here.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<Booking>> {
    let booking = state.store.update_booking(&id, payload, state.now())?;
    tracing::info!(booking = %id, status = booking.status.as_str(), "Booking updated");
    Ok(Json(booking))
}

/// GET /api/bookings/export - CSV of the current filtered result
///
/// Same query parameters as the list, no pagination: the file contains
/// every row the filters select, in on-screen order.
pub async fn export_csv(
    State(state): State<ServerState>,
    Query(params): Query<ListQuery>,
) -> AppResult<Response> {
    let now = state.now();
    let tz = state.config.business_timezone;
    let list_state = params.into_state();
    let bookings = state.store.bookings_snapshot();

    let rows = state.pipeline.run_unpaged(&bookings, &list_state, now);
    let bytes = export::bookings_to_csv(&rows, tz)?;
    let filename = export::export_filename(now, tz);

    Ok((
        [
            (http::header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                http::header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// GET /api/bookings/{id}/invoice - printable invoice document
pub async fn invoice(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let now = state.now();
    let booking = state
        .store
        .booking(&id)
        .ok_or_else(|| AppError::not_found(format!("Booking {}", id)))?;
    let tour = state.store.tour(&booking.tour_id);

    let renderer = InvoiceRenderer::new(state.config.business_timezone);
    Ok(Html(renderer.render(&booking, tour, now)))
}
