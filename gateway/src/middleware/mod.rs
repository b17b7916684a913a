pub mod auth;
pub mod request_id;

// Re-export middleware functions
pub use auth::{auth_middleware, extract_token};
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
