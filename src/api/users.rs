use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiJson, ApiKeyResponse, ApiResponse, AppState, MessageResponse};
use crate::api::validation::validate_id;
use crate::models::{User, UserInput, UserWithArticles, UserWithVideos};

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.shared.user_service.get_all().await?;
    Ok(Json(ApiResponse::success(users)))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let id = validate_id("user", id)?;
    let user = state.shared.user_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(user)))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UserInput>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.shared.user_service.add(payload).await?;
    Ok(Json(ApiResponse::success(user)))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UserInput>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let id = validate_id("user", id)?;
    let user = state.shared.user_service.update(id, payload).await?;
    Ok(Json(ApiResponse::success(user)))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validate_id("user", id)?;
    state.shared.user_service.delete(id).await?;
    Ok(Json(ApiResponse::success(MessageResponse::removed("User"))))
}

pub async fn get_user_articles(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<UserWithArticles>>, ApiError> {
    let id = validate_id("user", id)?;
    let user = state.shared.user_service.get_with_articles(id).await?;
    Ok(Json(ApiResponse::success(user)))
}

pub async fn get_user_videos(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<UserWithVideos>>, ApiError> {
    let id = validate_id("user", id)?;
    let user = state.shared.user_service.get_with_videos(id).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// POST /users/{id}/api-key/regenerate
/// Issues a new random API key. The previous key is rejected from now on.
pub async fn regenerate_api_key(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ApiKeyResponse>>, ApiError> {
    let id = validate_id("user", id)?;
    let api_key = state.shared.user_service.regenerate_api_key(id).await?;
    Ok(Json(ApiResponse::success(ApiKeyResponse { api_key })))
}
