use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiJson, ApiResponse, AppState, MessageResponse};
use crate::api::validation::validate_id;
use crate::entities::maps;
use crate::models::{MapInput, MapWithVideos};

pub async fn list_maps(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<maps::Model>>>, ApiError> {
    let maps = state.shared.map_service.get_all().await?;
    Ok(Json(ApiResponse::success(maps)))
}

pub async fn get_map(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<maps::Model>>, ApiError> {
    let id = validate_id("map", id)?;
    let map = state.shared.map_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(map)))
}

pub async fn create_map(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<MapInput>,
) -> Result<Json<ApiResponse<maps::Model>>, ApiError> {
    let map = state.shared.map_service.add(payload).await?;
    Ok(Json(ApiResponse::success(map)))
}

pub async fn update_map(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<MapInput>,
) -> Result<Json<ApiResponse<maps::Model>>, ApiError> {
    let id = validate_id("map", id)?;
    let map = state.shared.map_service.update(id, payload).await?;
    Ok(Json(ApiResponse::success(map)))
}

pub async fn delete_map(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validate_id("map", id)?;
    state.shared.map_service.delete(id).await?;
    Ok(Json(ApiResponse::success(MessageResponse::removed("Map"))))
}

pub async fn get_map_videos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MapWithVideos>>, ApiError> {
    let id = validate_id("map", id)?;
    let map = state.shared.map_service.get_with_videos(id).await?;
    Ok(Json(ApiResponse::success(map)))
}
