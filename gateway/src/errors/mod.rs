//! Error types shared by the gateway
//!
//! - `auth_error`: session token failures raised by the token service and auth middleware
//! - `app_error`: the client-facing error taxonomy and its JSON rendering

pub mod app_error;
pub mod auth_error;

pub use app_error::{AppError, AppResult, ErrorBody, ErrorCode, ErrorRecord};
pub use auth_error::{AuthError, AuthResult};
