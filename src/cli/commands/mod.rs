mod maps;
mod users;

pub use maps::cmd_list_maps;
pub use users::cmd_list_users;
