//! Session authentication
//!
//! Clients obtain a short-lived session token from the public session route
//! and present it as `Authorization: Bearer <token>` on protected routes.

pub mod session;

pub use session::{
    DEFAULT_SESSION_TTL_SECS, GENERATED_SECRET_LEN, SessionClaims, SessionTokenService,
    SigningSecret, unix_now,
};
