use anyhow::anyhow;
use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::document::{DocumentKind, RawDocument};
use crate::extraction::models::ParsedCandidateData;
use crate::extraction::parser::extract_if_readable;

const UPLOAD_FIELD: &str = "file";

/// POST /upload-cv
///
/// Accepts one multipart `file` part (PDF or DOCX) and returns the auto-populated profile.
pub async fn handle_upload_cv(mut multipart: Multipart) -> Result<Json<ParsedCandidateData>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let kind = resolve_kind(content_type.as_deref(), &filename).ok_or_else(|| {
            AppError::UnsupportedFileType("Only PDF and DOCX files are supported".to_string())
        })?;

        let bytes = field.bytes().await.map_err(upload_error)?;
        if bytes.is_empty() {
            return Err(AppError::Validation("No file provided".to_string()));
        }

        let doc = RawDocument::new(bytes, kind);
        let size = doc.bytes.len();
        let parsed = tokio::task::spawn_blocking(move || extract_if_readable(&doc))
            .await
            .map_err(|e| AppError::Internal(anyhow!("Resume parsing task failed: {e}")))?;

        let Some(parsed) = parsed else {
            warn!(%filename, kind = kind.as_str(), size, "No text extracted from upload");
            return Err(AppError::Validation(
                "Could not extract text from file".to_string(),
            ));
        };

        info!(
            %filename,
            kind = kind.as_str(),
            size,
            auto_populated = parsed.auto_populated_fields.len(),
            "Parsed uploaded CV"
        );
        return Ok(Json(parsed));
    }

    Err(AppError::Validation("No file provided".to_string()))
}

/// The declared MIME type decides; the filename is consulted only for generic uploads.
fn resolve_kind(content_type: Option<&str>, filename: &str) -> Option<DocumentKind> {
    match content_type {
        Some(ct) if !ct.starts_with("application/octet-stream") => DocumentKind::from_mime(ct),
        _ => DocumentKind::from_filename(filename),
    }
}

fn upload_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Failed to read upload: {}", e.body_text()))
    }
}
