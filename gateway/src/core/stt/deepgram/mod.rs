//! Deepgram pre-recorded Speech-to-Text API integration.
//!
//! Sends a single `POST /v1/listen` request per transcription, either with a
//! JSON `{"url": ...}` body (Deepgram fetches the media) or with the raw audio
//! bytes. Smart formatting is always requested.
//!
//! - [`config`]: `DeepgramSTTConfig` (credentials, base URL, timeouts)
//! - [`messages`]: typed response and error payloads
//! - [`client`]: `DeepgramSTT`, the `TranscriptionProvider` implementation
//!
//! # API Reference
//!
//! - API Endpoint: `POST https://api.deepgram.com/v1/listen`
//! - Auth header: `Authorization: Token <api-key>`
//! - Documentation: <https://developers.deepgram.com/reference/speech-to-text-api/listen>

mod client;
mod config;
mod messages;


pub use client::DeepgramSTT;
pub use config::{DEEPGRAM_API_URL, DeepgramSTTConfig};
pub use messages::{
    Alternative, Channel, DeepgramErrorResponse, ListenMetadata, ListenResponse, ListenResults,
    UrlSource, Word,
};
