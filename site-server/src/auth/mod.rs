//! Authentication
//!
//! JWT token service, Argon2 credential verification and the request
//! middleware. Access control lives server-side only: a client-held flag
//! is never treated as a security boundary.

mod credentials;
mod jwt;
mod middleware;

pub use credentials::{AdminCredentials, hash_password, verify_password};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
