use chrono_tz::Tz;

use crate::auth::JwtConfig;

/// Default page size for the booking list
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Default "ends soon" urgency threshold
pub const DEFAULT_ENDS_SOON_HOURS: i64 = 48;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | BUSINESS_TIMEZONE | Asia/Kuala_Lumpur | Timezone for date buckets and exports |
/// | PAGE_SIZE | 8 | Booking list page size |
/// | ENDS_SOON_HOURS | 48 | Deal urgency threshold |
/// | ADMIN_USERNAME | admin | Admin panel login |
/// | ADMIN_PASSWORD | (dev default) | Admin panel password |
/// | LOG_LEVEL | info | Log verbosity |
/// | LOG_DIR | (stdout only) | Daily-rolling log file directory |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 BUSINESS_TIMEZONE=Asia/Singapore cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Business timezone for "today"/date-bucket boundaries and export
    /// timestamps
    pub business_timezone: Tz,
    /// Booking list page size (validated at pipeline construction)
    pub page_size: usize,
    /// "Ends soon" threshold in hours
    pub ends_soon_hours: i64,
    /// Admin panel username
    pub admin_username: String,
    /// Admin panel password (hashed at startup, plaintext never retained)
    pub admin_password: String,
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            business_timezone: std::env::var("BUSINESS_TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::Asia::Kuala_Lumpur),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            ends_soon_hours: std::env::var("ENDS_SOON_HOURS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_ENDS_SOON_HOURS),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
                tracing::warn!("ADMIN_PASSWORD not set, using development default");
                "tradewinds-dev".into()
            }),
            jwt: JwtConfig::default(),
        }
    }

    /// Override selected values (test scenarios)
    pub fn with_overrides(http_port: u16, admin_password: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.admin_password = admin_password.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Ends-soon threshold in millis
    pub fn ends_soon_threshold_ms(&self) -> i64 {
        self.ends_soon_hours * 3_600_000
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
