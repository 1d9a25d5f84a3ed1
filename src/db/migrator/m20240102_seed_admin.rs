use crate::entities::users;
use crate::entities::prelude::*;
use crate::services::password::hash_password;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Default admin password, meant to be changed right after the first login.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";

/// Bootstrap API key for the seeded admin.
pub const DEFAULT_API_KEY: &str = "csgo_essentials_default_api_key_please_regenerate";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = chrono::Utc::now().to_rfc3339();
        let password_hash = hash_password(DEFAULT_ADMIN_PASSWORD, None)
            .map_err(|e| DbErr::Custom(format!("Failed to hash default password: {e}")))?;

        let insert = Query::insert()
            .into_table(Users)
            .columns([
                users::Column::Name,
                users::Column::Email,
                users::Column::Username,
                users::Column::PasswordHash,
                users::Column::Role,
                users::Column::ApiKey,
                users::Column::CreatedAt,
                users::Column::UpdatedAt,
            ])
            .values([
                "Administrator".into(),
                "admin@example.com".into(),
                DEFAULT_ADMIN_USERNAME.into(),
                password_hash.into(),
                "Administrator".into(),
                DEFAULT_API_KEY.into(),
                now.clone().into(),
                now.into(),
            ])
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Users)
            .and_where(Expr::col(users::Column::Username).eq(DEFAULT_ADMIN_USERNAME))
            .to_owned();

        manager.exec_stmt(delete).await?;

        Ok(())
    }
}
