//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `session` - Session token issuance
//! - `transcribe` - Multipart transcription endpoint (session-protected)
//! - `metadata` - Project metadata from the configured TOML file

pub mod api;
pub mod metadata;
pub mod session;
pub mod transcribe;

pub use api::health_check;
pub use metadata::get_metadata;
pub use session::{SessionResponse, create_session};
pub use transcribe::transcribe_handler;
