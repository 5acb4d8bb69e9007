use std::sync::Arc;

use chrono::Utc;

use crate::auth::{AdminCredentials, JwtService};
use crate::core::Config;
use crate::query::Pipeline;
use crate::store::RecordStore;

/// Server state - shared singleton references
///
/// Cloning is shallow (`Arc` fields); one instance is shared by every
/// request handler.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Immutable configuration |
/// | store | In-memory record store (seeded at startup) |
/// | pipeline | Booking list pipeline (page size validated once) |
/// | jwt_service | Token issue/validation |
/// | credentials | Admin login credentials (hash only) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<RecordStore>,
    pub pipeline: Arc<Pipeline>,
    pub jwt_service: Arc<JwtService>,
    pub credentials: Arc<AdminCredentials>,
}

impl ServerState {
    /// Initialize server state
    ///
    /// Seeds the record store against the startup instant, validates the
    /// configured page size, and hashes the admin password.
    ///
    /// # Panics
    ///
    /// Misconfiguration (zero page size, unhashable password) is fatal at
    /// startup, never per request.
    pub fn initialize(config: &Config) -> Self {
        let now = Utc::now().timestamp_millis();

        let store = Arc::new(RecordStore::seeded(now));
        let pipeline = Arc::new(
            Pipeline::new(config.page_size, config.business_timezone)
                .expect("PAGE_SIZE must be positive"),
        );
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let credentials = Arc::new(
            AdminCredentials::new(&config.admin_username, &config.admin_password)
                .expect("Failed to hash admin password"),
        );

        tracing::info!(
            tours = store.tours().len(),
            deals = store.deals().len(),
            bookings = store.bookings_snapshot().len(),
            "Record store seeded"
        );

        Self {
            config: config.clone(),
            store,
            pipeline,
            jwt_service,
            credentials,
        }
    }

    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Current instant in Unix millis
    ///
    /// Captured once at the top of a request and threaded down, so every
    /// time-dependent computation in one pass sees the same clock.
    pub fn now(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
