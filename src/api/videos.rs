use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiJson, ApiResponse, AppState, MessageResponse};
use crate::api::validation::validate_id;
use crate::entities::videos;
use crate::models::{VideoDetails, VideoInput};

pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<videos::Model>>>, ApiError> {
    let videos = state.shared.video_service.get_all().await?;
    Ok(Json(ApiResponse::success(videos)))
}

/// Returns the video with its author and map embedded.
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VideoDetails>>, ApiError> {
    let id = validate_id("video", id)?;
    let video = state
        .shared
        .video_service
        .get_by_id_with_relations(id)
        .await?;
    Ok(Json(ApiResponse::success(video)))
}

pub async fn create_video(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<VideoInput>,
) -> Result<Json<ApiResponse<videos::Model>>, ApiError> {
    let video = state.shared.video_service.add(payload).await?;
    Ok(Json(ApiResponse::success(video)))
}

pub async fn update_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<VideoInput>,
) -> Result<Json<ApiResponse<videos::Model>>, ApiError> {
    let id = validate_id("video", id)?;
    let video = state.shared.video_service.update(id, payload).await?;
    Ok(Json(ApiResponse::success(video)))
}

pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validate_id("video", id)?;
    state.shared.video_service.delete(id).await?;
    Ok(Json(ApiResponse::success(MessageResponse::removed("Video"))))
}
