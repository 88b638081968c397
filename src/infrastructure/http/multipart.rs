//! Multipart body construction for uploads

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tokio::fs::File;

use crate::application::ports::ApiError;
use crate::domain::transcription::{
    upload_file_name, AudioContentType, TranscribeOptions, FILE_FIELD, VAD_FIELD,
};

/// Build the upload form for a file on disk.
///
/// The file is opened here, before any request exists, and its bytes are
/// streamed into the part instead of being read into memory.
pub async fn file_form(path: &Path, options: TranscribeOptions) -> Result<Form, ApiError> {
    let file_error = |message: String| ApiError::FileRead {
        path: path.display().to_string(),
        message,
    };

    let file = File::open(path)
        .await
        .map_err(|e| file_error(e.to_string()))?;
    let metadata = file
        .metadata()
        .await
        .map_err(|e| file_error(e.to_string()))?;
    if !metadata.is_file() {
        return Err(file_error("not a regular file".to_string()));
    }

    let part = Part::stream_with_length(Body::from(file), metadata.len());
    let form = Form::new().part(
        FILE_FIELD,
        describe(part, &upload_file_name(path))?,
    );
    Ok(apply_options(form, options))
}

/// Build the upload form for audio already in memory
pub fn bytes_form(
    audio: Vec<u8>,
    file_name: &str,
    options: TranscribeOptions,
) -> Result<Form, ApiError> {
    let part = describe(Part::bytes(audio), file_name)?;
    Ok(apply_options(Form::new().part(FILE_FIELD, part), options))
}

/// Attach file name and the advisory content type
fn describe(part: Part, file_name: &str) -> Result<Part, ApiError> {
    let content_type = AudioContentType::from_path(file_name);
    part.file_name(file_name.to_string())
        .mime_str(content_type.as_str())
        .map_err(|e| ApiError::RequestFailed(format!("Invalid content type: {}", e)))
}

fn apply_options(form: Form, options: TranscribeOptions) -> Form {
    match options.enable_vad {
        Some(enable) => form.text(VAD_FIELD, enable.to_string()),
        None => form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_file_read_error() {
        let err = file_form(Path::new("/definitely/not/here.wav"), TranscribeOptions::default())
            .await
            .unwrap_err();

        match err {
            ApiError::FileRead { path, .. } => assert_eq!(path, "/definitely/not/here.wav"),
            other => panic!("expected FileRead, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = file_form(dir.path(), TranscribeOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::FileRead { .. }));
    }

    #[tokio::test]
    async fn existing_file_builds_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.m4a");
        std::fs::write(&path, b"not really aac").unwrap();

        let form = file_form(&path, TranscribeOptions::with_vad(true)).await.unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn bytes_form_accepts_any_name() {
        assert!(bytes_form(vec![1, 2, 3], "memo", TranscribeOptions::default()).is_ok());
    }
}
