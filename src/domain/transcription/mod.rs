//! Transcription payloads and upload metadata

mod content_type;
mod model;
mod result;
mod task;
mod upload;

pub use content_type::AudioContentType;
pub use model::ModelStatus;
pub use result::TranscriptionResult;
pub use task::{CancelAck, TaskCreation, TaskList, TaskStatus, TaskSummary};
pub use upload::{
    upload_file_name, TranscribeOptions, FALLBACK_FILE_NAME, FILE_FIELD, VAD_FIELD,
};
