pub use super::articles::Entity as Articles;
pub use super::maps::Entity as Maps;
pub use super::users::Entity as Users;
pub use super::videos::Entity as Videos;
