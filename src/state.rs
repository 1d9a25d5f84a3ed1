use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    ArticleService, MapService, SeaOrmArticleService, SeaOrmMapService, SeaOrmUserService,
    SeaOrmVideoService, UserService, VideoService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub user_service: Arc<dyn UserService>,

    pub article_service: Arc<dyn ArticleService>,

    pub video_service: Arc<dyn VideoService>,

    pub map_service: Arc<dyn MapService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires the services over an already opened store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let user_service = Arc::new(SeaOrmUserService::new(&store, config.security.clone()));
        let article_service = Arc::new(SeaOrmArticleService::new(&store));
        let video_service = Arc::new(SeaOrmVideoService::new(&store));
        let map_service = Arc::new(SeaOrmMapService::new(&store));

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            user_service,
            article_service,
            video_service,
            map_service,
        }
    }
}
