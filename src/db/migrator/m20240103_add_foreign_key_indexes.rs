use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Relationship lookups (user articles, user videos, map videos) filter on these.
        manager
            .create_index(
                Index::create()
                    .name("idx_articles_user_id")
                    .table(Articles::Table)
                    .col(Articles::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_videos_user_id")
                    .table(Videos::Table)
                    .col(Videos::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_videos_map_id")
                    .table(Videos::Table)
                    .col(Videos::MapId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_videos_map_id")
                    .table(Videos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_videos_user_id")
                    .table(Videos::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_articles_user_id")
                    .table(Articles::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Videos {
    Table,
    UserId,
    MapId,
}
