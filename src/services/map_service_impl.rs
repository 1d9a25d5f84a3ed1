//! `SeaORM` implementation of the `MapService` trait.

use async_trait::async_trait;
use sea_orm::Condition;
use tracing::info;

use crate::db::{Repository, RepositoryError, Store};
use crate::entities::{maps, videos};
use crate::models::{MapInput, MapWithVideos};
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::map_service::MapService;

pub struct SeaOrmMapService {
    maps: Repository<maps::Entity>,
}

impl SeaOrmMapService {
    #[must_use]
    pub fn new(store: &Store) -> Self {
        Self { maps: store.maps() }
    }
}

#[async_trait]
impl MapService for SeaOrmMapService {
    async fn add(&self, input: MapInput) -> ServiceResult<maps::Model> {
        let map = self.maps.add(input.into_active_model()?).await?;
        info!(id = map.id, name = %map.name, "Map created");
        Ok(map)
    }

    async fn update(&self, id: i32, input: MapInput) -> ServiceResult<maps::Model> {
        match self.maps.update(input.into_model(id)?).await {
            Ok(map) => {
                info!(id, name = %map.name, "Map updated");
                Ok(map)
            }
            Err(RepositoryError::NotFound { .. }) => Err(ServiceError::not_found("Map")),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ServiceResult<()> {
        let map = self.get_by_id(id).await?;
        self.maps.delete(map).await?;
        info!(id, "Map deleted");
        Ok(())
    }

    async fn get_all(&self) -> ServiceResult<Vec<maps::Model>> {
        Ok(self.maps.get_all().await?)
    }

    async fn get_by_id(&self, id: i32) -> ServiceResult<maps::Model> {
        self.maps
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Map"))
    }

    async fn find(&self, condition: Condition) -> ServiceResult<Vec<maps::Model>> {
        Ok(self.maps.find(condition).await?)
    }

    async fn get_with_videos(&self, id: i32) -> ServiceResult<MapWithVideos> {
        let (map, videos) = self
            .maps
            .get_by_id_with_children::<videos::Entity>(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Map"))?;

        Ok(MapWithVideos { map, videos })
    }
}
