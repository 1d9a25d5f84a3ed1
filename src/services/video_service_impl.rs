//! `SeaORM` implementation of the `VideoService` trait.

use async_trait::async_trait;
use sea_orm::Condition;
use tracing::info;

use crate::db::{Repository, RepositoryError, Store};
use crate::entities::{maps, users, videos};
use crate::models::{VideoDetails, VideoInput, video};
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::video_service::VideoService;

pub struct SeaOrmVideoService {
    videos: Repository<videos::Entity>,
    users: Repository<users::Entity>,
    maps: Repository<maps::Entity>,
}

impl SeaOrmVideoService {
    #[must_use]
    pub fn new(store: &Store) -> Self {
        Self {
            videos: store.videos(),
            users: store.users(),
            maps: store.maps(),
        }
    }

    async fn ensure_parents_exist(&self, user_id: i32, map_id: i32) -> ServiceResult<()> {
        if self.users.get_by_id(user_id).await?.is_none() {
            return Err(ServiceError::missing_parent("User"));
        }
        if self.maps.get_by_id(map_id).await?.is_none() {
            return Err(ServiceError::missing_parent("Map"));
        }
        Ok(())
    }
}

#[async_trait]
impl VideoService for SeaOrmVideoService {
    async fn add(&self, input: VideoInput) -> ServiceResult<videos::Model> {
        let model = input.into_model(0)?;
        self.ensure_parents_exist(model.user_id, model.map_id)
            .await?;

        let video = self.videos.add(video::new_row(model)).await?;
        info!(
            id = video.id,
            map_id = video.map_id,
            grenade = ?video.grenade_type,
            "Video created"
        );
        Ok(video)
    }

    async fn update(&self, id: i32, input: VideoInput) -> ServiceResult<videos::Model> {
        let model = input.into_model(id)?;
        self.ensure_parents_exist(model.user_id, model.map_id)
            .await?;

        match self.videos.update(model).await {
            Ok(video) => {
                info!(id, "Video updated");
                Ok(video)
            }
            Err(RepositoryError::NotFound { .. }) => Err(ServiceError::not_found("Video")),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ServiceResult<()> {
        let video = self.get_by_id(id).await?;
        self.videos.delete(video).await?;
        info!(id, "Video deleted");
        Ok(())
    }

    async fn get_all(&self) -> ServiceResult<Vec<videos::Model>> {
        Ok(self.videos.get_all().await?)
    }

    async fn get_by_id(&self, id: i32) -> ServiceResult<videos::Model> {
        self.videos
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Video"))
    }

    async fn find(&self, condition: Condition) -> ServiceResult<Vec<videos::Model>> {
        Ok(self.videos.find(condition).await?)
    }

    async fn get_by_id_with_relations(&self, id: i32) -> ServiceResult<VideoDetails> {
        let (video, author) = self
            .videos
            .get_by_id_with_related::<users::Entity>(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Video"))?;
        let map = self.maps.get_by_id(video.map_id).await?;

        Ok(VideoDetails {
            video,
            author: author.map(Into::into),
            map,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::videos::{GrenadeType, TickRate};
    use chrono::NaiveDate;
    use sea_orm::{ColumnTrait, Set};

    struct Fixture {
        store: Store,
        service: SeaOrmVideoService,
        user_id: i32,
        map_id: i32,
    }

    async fn setup() -> Fixture {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .unwrap();
        let user_id = store.users().get_all().await.unwrap()[0].id;
        let map = store
            .maps()
            .add(maps::ActiveModel {
                name: Set("de_mirage".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        Fixture {
            service: SeaOrmVideoService::new(&store),
            store,
            user_id,
            map_id: map.id,
        }
    }

    fn input(user_id: i32, map_id: i32) -> VideoInput {
        VideoInput {
            title: "Window smoke".to_string(),
            release_date: NaiveDate::from_ymd_opt(2020, 5, 1),
            grenade_type: "Smoke".to_string(),
            tick_rate: "Tick64".to_string(),
            description: "Jump throw from T spawn".to_string(),
            user_id: Some(user_id),
            map_id: Some(map_id),
        }
    }

    #[tokio::test]
    async fn test_add_and_load_relations() {
        let f = setup().await;

        let video = f.service.add(input(f.user_id, f.map_id)).await.unwrap();
        assert_eq!(video.tick_rate, TickRate::Tick64);

        let details = f.service.get_by_id_with_relations(video.id).await.unwrap();
        assert_eq!(details.video, video);
        assert_eq!(details.author.unwrap().id, f.user_id);
        assert_eq!(details.map.unwrap().name, "de_mirage");
    }

    #[tokio::test]
    async fn test_unknown_user_or_map_is_rejected() {
        let f = setup().await;

        let err = f.service.add(input(777, f.map_id)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ReferentialIntegrity(ref m) if m == "User not found"));

        let err = f.service.add(input(f.user_id, 777)).await.unwrap_err();
        assert!(matches!(err, ServiceError::ReferentialIntegrity(ref m) if m == "Map not found"));

        assert_eq!(f.store.videos().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_and_find_by_grenade() {
        let f = setup().await;
        let video = f.service.add(input(f.user_id, f.map_id)).await.unwrap();

        let mut changed = input(f.user_id, f.map_id);
        changed.grenade_type = "Molotov".to_string();
        changed.tick_rate = "Tick128".to_string();
        f.service.update(video.id, changed).await.unwrap();

        let molotovs = f
            .service
            .find(Condition::all().add(videos::Column::GrenadeType.eq(GrenadeType::Molotov)))
            .await
            .unwrap();
        assert_eq!(molotovs.len(), 1);
        assert_eq!(molotovs[0].tick_rate, TickRate::Tick128);

        let err = f
            .service
            .update(video.id + 1, input(f.user_id, f.map_id))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_deleting_map_cascades_to_videos() {
        let f = setup().await;
        let video = f.service.add(input(f.user_id, f.map_id)).await.unwrap();

        let map = f.store.maps().get_by_id(f.map_id).await.unwrap().unwrap();
        f.store.maps().delete(map).await.unwrap();

        assert!(matches!(
            f.service.get_by_id(video.id).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
