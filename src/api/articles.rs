use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiJson, ApiResponse, AppState, MessageResponse};
use crate::api::validation::validate_id;
use crate::entities::articles;
use crate::models::{ArticleInput, ArticleWithAuthor};

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<articles::Model>>>, ApiError> {
    let articles = state.shared.article_service.get_all().await?;
    Ok(Json(ApiResponse::success(articles)))
}

/// Returns the article with its author embedded.
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ArticleWithAuthor>>, ApiError> {
    let id = validate_id("article", id)?;
    let article = state.shared.article_service.get_by_id_with_author(id).await?;
    Ok(Json(ApiResponse::success(article)))
}

pub async fn create_article(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<ArticleInput>,
) -> Result<Json<ApiResponse<articles::Model>>, ApiError> {
    let article = state.shared.article_service.add(payload).await?;
    Ok(Json(ApiResponse::success(article)))
}

pub async fn update_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<ArticleInput>,
) -> Result<Json<ApiResponse<articles::Model>>, ApiError> {
    let id = validate_id("article", id)?;
    let article = state.shared.article_service.update(id, payload).await?;
    Ok(Json(ApiResponse::success(article)))
}

pub async fn delete_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let id = validate_id("article", id)?;
    state.shared.article_service.delete(id).await?;
    Ok(Json(ApiResponse::success(MessageResponse::removed("Article"))))
}
