use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tubely_core::models::Video;
use tubely_core::AppError;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/videos/{video_id}",
    tag = "videos",
    params(
        ("video_id" = String, Path, description = "Video ID (UUID)")
    ),
    responses(
        (status = 200, description = "Video found", body = Video),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Json<Video>, HttpAppError> {
    let video_id =
        Uuid::parse_str(&video_id).map_err(|_| AppError::InvalidInput("Invalid ID".to_string()))?;

    let video = state
        .videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couldn't get video".to_string()))?;

    Ok(Json(video))
}
