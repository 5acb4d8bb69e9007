//! Export sinks
//!
//! Converts the query pipeline's output (never the raw collection) into
//! portable formats: a machine-re-parseable CSV download and a printable
//! single-booking invoice document.

mod csv_export;
mod invoice;

pub use csv_export::{CSV_CONTENT_TYPE, CSV_HEADERS, bookings_to_csv, export_filename};
pub use invoice::{InvoiceRenderer, escape_html};
