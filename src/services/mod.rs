pub mod error;
pub mod password;

pub use error::{ServiceError, ServiceResult};

pub mod user_service;
pub mod user_service_impl;
pub use user_service::UserService;
pub use user_service_impl::SeaOrmUserService;

pub mod article_service;
pub mod article_service_impl;
pub use article_service::ArticleService;
pub use article_service_impl::SeaOrmArticleService;

pub mod video_service;
pub mod video_service_impl;
pub use video_service::VideoService;
pub use video_service_impl::SeaOrmVideoService;

pub mod map_service;
pub mod map_service_impl;
pub use map_service::MapService;
pub use map_service_impl::SeaOrmMapService;
