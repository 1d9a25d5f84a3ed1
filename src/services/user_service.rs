//! Domain service for user management and authentication.
//!
//! Passwords only ever leave this layer as Argon2id hashes, and users are
//! returned as [`User`] which carries neither the hash nor the API key.

use sea_orm::Condition;

use crate::models::{LoginResult, User, UserInput, UserWithArticles, UserWithVideos};
use crate::services::error::ServiceResult;

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Creates a user with a freshly generated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`](crate::services::ServiceError) for
    /// invalid input and `Constraint` when the username or email is taken.
    async fn add(&self, input: UserInput) -> ServiceResult<User>;

    /// Replaces the profile of user `id`. A missing password keeps the
    /// current one.
    async fn update(&self, id: i32, input: UserInput) -> ServiceResult<User>;

    /// Deletes a user together with their articles and videos.
    async fn delete(&self, id: i32) -> ServiceResult<()>;

    async fn get_all(&self) -> ServiceResult<Vec<User>>;

    async fn get_by_id(&self, id: i32) -> ServiceResult<User>;

    async fn find(&self, condition: Condition) -> ServiceResult<Vec<User>>;

    async fn get_with_articles(&self, id: i32) -> ServiceResult<UserWithArticles>;

    async fn get_with_videos(&self, id: i32) -> ServiceResult<UserWithVideos>;

    /// Verifies credentials and returns the user with their API key.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Unauthorized`](crate::services::ServiceError)
    /// for an unknown username or a wrong password.
    async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<LoginResult>;

    /// Replaces the API key of user `id` and returns the new one. The old key
    /// stops authenticating immediately.
    async fn regenerate_api_key(&self, id: i32) -> ServiceResult<String>;

    /// Resolves an API key to its owner, if any.
    async fn verify_api_key(&self, api_key: &str) -> ServiceResult<Option<User>>;
}
