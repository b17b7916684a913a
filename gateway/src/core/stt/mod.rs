mod base;
pub mod deepgram;

// Re-export public types and traits
pub use base::{STTError, TranscriptionProvider};

// Re-export Deepgram implementation
pub use deepgram::{DEEPGRAM_API_URL, DeepgramSTT, DeepgramSTTConfig, ListenResponse};
