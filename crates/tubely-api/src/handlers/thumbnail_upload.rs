use crate::auth::authenticate;
use crate::constants::THUMBNAIL_FIELD;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::read_form_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use tubely_core::models::Video;
use tubely_core::AppError;
use uuid::Uuid;

/// Upload a video's thumbnail
///
/// Checks run in a fixed order and the first failure ends the request: video id, bearer
/// token, multipart form, file part, content type, file content, video lookup, ownership.
/// The record is only written once the image has been read and stored. A thumbnail stored
/// for a request whose record update fails is deleted again, as is the thumbnail a successful
/// upload replaces.
#[utoipa::path(
    post,
    path = "/api/videos/{video_id}/thumbnail",
    tag = "videos",
    params(
        ("video_id" = String, Path, description = "Video ID (UUID)")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "File part named `thumbnail` with an image Content-Type"),
    responses(
        (status = 200, description = "Thumbnail stored", body = Video),
        (status = 400, description = "Invalid video ID, form or file part", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token, or not the owner", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 500, description = "Failed to read the file or update the video", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Video>, HttpAppError> {
    let video_id =
        Uuid::parse_str(&video_id).map_err(|_| AppError::InvalidInput("Invalid ID".to_string()))?;

    let user_id = authenticate(state.tokens.as_ref(), &headers)?;

    tracing::info!(video_id = %video_id, user_id = %user_id, "Uploading thumbnail");

    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Request body is not a multipart form");
        AppError::BadRequest("Unable to parse form file".to_string())
    })?;

    let file = read_form_file(
        &mut multipart,
        THUMBNAIL_FIELD,
        state.config.multipart_max_memory_bytes,
    )
    .await?;

    let mut video = match state.videos.get(video_id).await {
        Ok(Some(video)) => video,
        Ok(None) => return Err(AppError::NotFound("Couldn't get video".to_string()).into()),
        Err(e) => {
            tracing::warn!(video_id = %video_id, error = %e, "Video lookup failed");
            return Err(AppError::NotFound("Couldn't get video".to_string()).into());
        }
    };

    if !video.is_owned_by(user_id) {
        return Err(AppError::Unauthorized("Only owner can upload thumbnail".to_string()).into());
    }

    let size_bytes = file.data.len();
    let thumbnail_url = state
        .thumbnails
        .store(video.id, &file.content_type, file.data)
        .await?;

    let previous_url = video.thumbnail_url.replace(thumbnail_url.clone());
    let video = match state.videos.update(video).await {
        Ok(video) => video,
        Err(e) => {
            // The record still points at the previous thumbnail; drop the one nobody references.
            discard_thumbnail(&state, &thumbnail_url).await;
            return Err(AppError::StoreWrite(e.to_string()).into());
        }
    };

    if let Some(previous_url) = previous_url.filter(|url| *url != thumbnail_url) {
        discard_thumbnail(&state, &previous_url).await;
    }

    tracing::info!(
        video_id = %video.id,
        file_name = %file.file_name,
        content_type = %file.content_type,
        size_bytes,
        backend = %state.thumbnails.backend_type(),
        "Thumbnail uploaded"
    );

    Ok(Json(video))
}

/// Best-effort removal of a stored thumbnail that no record points at.
async fn discard_thumbnail(state: &AppState, uri: &str) {
    if let Err(e) = state.thumbnails.delete(uri).await {
        tracing::warn!(
            error = %e,
            backend = %state.thumbnails.backend_type(),
            "Failed to delete unreferenced thumbnail"
        );
    }
}
