pub mod metadata;
pub mod stt;
pub mod transcription;

pub use metadata::{MetadataError, load_meta_section};
pub use stt::{DeepgramSTT, DeepgramSTTConfig, STTError, TranscriptionProvider};
pub use transcription::{
    TranscriptionError, TranscriptionRequest, TranscriptionResult, TranscriptionService,
};
