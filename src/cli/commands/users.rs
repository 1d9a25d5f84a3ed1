//! List users command handler

use crate::config::Config;
use crate::db::Store;
use crate::models::User;

pub async fn cmd_list_users(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let users: Vec<User> = store
        .users()
        .get_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    if users.is_empty() {
        println!("No users registered.");
        return Ok(());
    }

    println!("Users ({} total)", users.len());
    println!("{:-<70}", "");

    for user in users {
        println!("{} <{}> [{:?}]", user.username, user.email, user.role);
        println!("  ID: {} | Name: {} | Since: {}", user.id, user.name, user.created_at);
    }

    Ok(())
}
