//! Domain service for lineup videos.

use sea_orm::Condition;

use crate::entities::videos;
use crate::models::{VideoDetails, VideoInput};
use crate::services::error::ServiceResult;

#[async_trait::async_trait]
pub trait VideoService: Send + Sync {
    /// Validates and stores a new video. Both the author and the map must exist.
    async fn add(&self, input: VideoInput) -> ServiceResult<videos::Model>;

    async fn update(&self, id: i32, input: VideoInput) -> ServiceResult<videos::Model>;

    async fn delete(&self, id: i32) -> ServiceResult<()>;

    async fn get_all(&self) -> ServiceResult<Vec<videos::Model>>;

    async fn get_by_id(&self, id: i32) -> ServiceResult<videos::Model>;

    async fn find(&self, condition: Condition) -> ServiceResult<Vec<videos::Model>>;

    /// Loads a video together with its author and map.
    async fn get_by_id_with_relations(&self, id: i32) -> ServiceResult<VideoDetails>;
}
