use crate::auth::authenticate;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use std::sync::Arc;
use tubely_core::models::{CreateVideoRequest, Video};
use tubely_core::AppError;

#[utoipa::path(
    post,
    path = "/api/videos",
    tag = "videos",
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Video created", body = Video),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<ValidatedJson<CreateVideoRequest>, HttpAppError>,
) -> Result<(StatusCode, Json<Video>), HttpAppError> {
    let user_id = authenticate(state.tokens.as_ref(), &headers)?;
    let ValidatedJson(request) = body?;

    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()).into());
    }

    let video = state
        .videos
        .create(Video::new_draft(
            user_id,
            title.to_string(),
            request.description,
        ))
        .await?;

    tracing::info!(video_id = %video.id, user_id = %user_id, "Video created");

    Ok((StatusCode::CREATED, Json(video)))
}
