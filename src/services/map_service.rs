//! Domain service for maps.

use sea_orm::Condition;

use crate::entities::maps;
use crate::models::{MapInput, MapWithVideos};
use crate::services::error::ServiceResult;

#[async_trait::async_trait]
pub trait MapService: Send + Sync {
    /// Stores a new map. Names are unique.
    async fn add(&self, input: MapInput) -> ServiceResult<maps::Model>;

    async fn update(&self, id: i32, input: MapInput) -> ServiceResult<maps::Model>;

    /// Removes a map and, through the cascade, every video recorded on it.
    async fn delete(&self, id: i32) -> ServiceResult<()>;

    async fn get_all(&self) -> ServiceResult<Vec<maps::Model>>;

    async fn get_by_id(&self, id: i32) -> ServiceResult<maps::Model>;

    async fn find(&self, condition: Condition) -> ServiceResult<Vec<maps::Model>>;

    async fn get_with_videos(&self, id: i32) -> ServiceResult<MapWithVideos>;
}
