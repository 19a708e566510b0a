//! Common utilities for file upload handlers

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::{header::CONTENT_TYPE, StatusCode};
use bytes::Bytes;
use tubely_core::AppError;

/// A file part read fully into memory
#[derive(Debug)]
pub struct FormFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Client message for every "could not get the file part" failure
const PARSE_FORM_FILE: &str = "Unable to parse form file";

fn is_too_large(err: &MultipartError) -> bool {
    err.status() == StatusCode::PAYLOAD_TOO_LARGE
}

fn too_large(err: MultipartError) -> AppError {
    AppError::PayloadTooLarge(format!("Request body too large: {}", err.body_text()))
}

/// Errors while walking the form structure are client input errors.
fn form_error(err: MultipartError) -> AppError {
    if is_too_large(&err) {
        return too_large(err);
    }
    tracing::debug!(error = %err.body_text(), "Failed to parse multipart form");
    AppError::BadRequest(PARSE_FORM_FILE.to_string())
}

/// Errors while streaming the file content itself are read failures.
fn read_error(err: MultipartError) -> AppError {
    if is_too_large(&err) {
        return too_large(err);
    }
    AppError::FileRead(err.body_text())
}

/// Drain an auxiliary field, charging its size against the in-memory budget.
async fn discard_field(field: &mut Field<'_>, budget: &mut usize) -> Result<(), AppError> {
    while let Some(chunk) = field.chunk().await.map_err(form_error)? {
        *budget = budget.checked_sub(chunk.len()).ok_or_else(|| {
            AppError::BadRequest("Multipart form fields exceed the in-memory limit".to_string())
        })?;
    }
    Ok(())
}

/// Extract the file part named `field_name` from a multipart form.
///
/// Non-file fields preceding it may use at most `max_memory` bytes in total. The part must
/// carry a filename and a non-empty `Content-Type`; both are checked before the content is
/// read. Fields after the file part are ignored.
pub async fn read_form_file(
    multipart: &mut Multipart,
    field_name: &str,
    max_memory: usize,
) -> Result<FormFile, AppError> {
    let mut budget = max_memory;

    while let Some(mut field) = multipart.next_field().await.map_err(form_error)? {
        if field.name() != Some(field_name) {
            discard_field(&mut field, &mut budget).await?;
            continue;
        }

        let file_name = field.file_name().map(str::to_string).ok_or_else(|| {
            tracing::debug!(field = field_name, "Form field is not a file part");
            AppError::BadRequest(PARSE_FORM_FILE.to_string())
        })?;

        // Raw header value, so MIME types the parser rejects are still kept verbatim.
        let content_type = field
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if content_type.is_empty() {
            return Err(AppError::UnsupportedMediaType(format!(
                "File part '{}' has no Content-Type",
                field_name
            )));
        }

        let data = field.bytes().await.map_err(read_error)?;

        return Ok(FormFile {
            file_name,
            content_type,
            data,
        });
    }

    tracing::debug!(field = field_name, "Form file part missing");
    Err(AppError::BadRequest(PARSE_FORM_FILE.to_string()))
}
