//! List maps command handler

use crate::config::Config;
use crate::db::Store;
use crate::entities::videos;

pub async fn cmd_list_maps(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let maps = store
        .maps()
        .get_all_with_children::<videos::Entity>()
        .await?;

    if maps.is_empty() {
        println!("No maps registered.");
        println!();
        println!("Add maps with: POST /v1/maps");
        return Ok(());
    }

    println!("Maps ({} total)", maps.len());
    println!("{:-<70}", "");

    for (map, videos) in maps {
        println!("{} [{} videos]", map.name, videos.len());
        if let Some(description) = &map.description {
            println!("  ID: {} | {}", map.id, description);
        } else {
            println!("  ID: {}", map.id);
        }
    }

    Ok(())
}
