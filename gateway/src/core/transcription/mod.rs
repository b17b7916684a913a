//! Request normalization between HTTP clients and the upstream provider
//!
//! - [`request`]: inbound request shape and validation into a `NormalizedRequest`
//! - [`service`]: single-attempt, time-bounded dispatch to a `TranscriptionProvider`
//! - [`format`]: mapping of the raw provider payload into `TranscriptionResult`

mod error;
pub mod format;
pub mod request;
pub mod service;

pub use error::TranscriptionError;
pub use format::{ResultMetadata, TranscriptionResult, WordTiming, format_response};
pub use request::{AudioSource, DEFAULT_MODEL, NormalizedRequest, TranscriptionRequest, UploadedFile};
pub use service::TranscriptionService;
