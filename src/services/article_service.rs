//! Domain service for articles.
//!
//! Articles always belong to an existing user; the author is checked before
//! any write reaches the store.

use sea_orm::Condition;

use crate::entities::articles;
use crate::models::{ArticleInput, ArticleWithAuthor};
use crate::services::error::ServiceResult;

#[async_trait::async_trait]
pub trait ArticleService: Send + Sync {
    /// Validates and stores a new article.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ReferentialIntegrity`](crate::services::ServiceError)
    /// when `user_id` does not reference an existing user.
    async fn add(&self, input: ArticleInput) -> ServiceResult<articles::Model>;

    /// Replaces every field of article `id`.
    async fn update(&self, id: i32, input: ArticleInput) -> ServiceResult<articles::Model>;

    async fn delete(&self, id: i32) -> ServiceResult<()>;

    async fn get_all(&self) -> ServiceResult<Vec<articles::Model>>;

    async fn get_by_id(&self, id: i32) -> ServiceResult<articles::Model>;

    async fn find(&self, condition: Condition) -> ServiceResult<Vec<articles::Model>>;

    async fn get_by_id_with_author(&self, id: i32) -> ServiceResult<ArticleWithAuthor>;
}
