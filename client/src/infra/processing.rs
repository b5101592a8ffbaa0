use crate::core::api::ApiError;
use crate::core::models::ProcessingResult;
use crate::infra::http::Transport;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::path::Path;
use tracing::error;

/// Client for the video ingestion endpoints. Unlike the catalog
/// resources there is no store over this: callers fire a job and get a
/// `ProcessingResult` back, failed transport included.
#[derive(Clone)]
pub struct ProcessingClient {
    transport: Transport,
}

#[derive(Serialize)]
struct ProcessRequest<'a> {
    video_path: &'a str,
    extract_only: bool,
}

impl ProcessingClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Uploads a local video file for frame extraction. Never fails:
    /// an unreadable file or a dead backend both come back as a
    /// failure result.
    pub async fn upload_video(&self, path: &Path, extract_only: bool) -> ProcessingResult {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                error!("Error reading video file {}: {err}", path.display());
                return ProcessingResult::failure("Failed to upload video");
            }
        };

        match self.upload(path, bytes, extract_only).await {
            Ok(result) => result,
            Err(err) => {
                error!("Error uploading video: {err}");
                ProcessingResult::failure("Failed to upload video")
            }
        }
    }

    /// Processes a video already present on the backend host.
    pub async fn process_existing(&self, video_path: &str, extract_only: bool) -> ProcessingResult {
        let request = ProcessRequest {
            video_path,
            extract_only,
        };
        match self.transport.post_json("/processing/process", &request).await {
            Ok(result) => result,
            Err(err) => {
                error!("Error processing video: {err}");
                ProcessingResult::failure("Failed to process video")
            }
        }
    }

    /// Processes every video in a backend-side folder.
    pub async fn batch_process(&self, video_folder: &str, extract_only: bool) -> ProcessingResult {
        let form = Form::new()
            .text("video_folder", video_folder.to_string())
            .text("extract_only", extract_only.to_string());

        match self.transport.post_form("/processing/batch", form).await {
            Ok(result) => result,
            Err(err) => {
                error!("Error batch processing videos: {err}");
                ProcessingResult::failure("Failed to batch process videos")
            }
        }
    }

    async fn upload(
        &self,
        path: &Path,
        bytes: Vec<u8>,
        extract_only: bool,
    ) -> Result<ProcessingResult, ApiError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("extract_only", extract_only.to_string());

        self.transport.post_form("/processing/upload", form).await
    }
}
