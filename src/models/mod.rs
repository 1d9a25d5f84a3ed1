pub mod article;
pub mod map;
pub mod user;
pub mod video;

pub use article::{ArticleInput, ArticleWithAuthor};
pub use map::{MapInput, MapWithVideos};
pub use user::{LoginResult, User, UserInput, UserWithArticles, UserWithVideos};
pub use video::{VideoDetails, VideoInput};
