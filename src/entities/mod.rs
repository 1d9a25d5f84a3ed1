pub mod prelude;

pub mod articles;
pub mod maps;
pub mod users;
pub mod videos;
