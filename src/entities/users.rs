use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::Identity;

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "Member")]
    Member,
    #[sea_orm(string_value = "Editor")]
    Editor,
    #[sea_orm(string_value = "Administrator")]
    Administrator,
}

impl UserRole {
    pub const NAMES: &'static [&'static str] = &["Member", "Editor", "Administrator"];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Member" => Some(Self::Member),
            "Editor" => Some(Self::Editor),
            "Administrator" => Some(Self::Administrator),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    #[sea_orm(unique)]
    pub username: String,

    /// Argon2id password hash
    pub password_hash: String,

    pub role: UserRole,

    /// Random API key (64-char hex string)
    #[sea_orm(unique)]
    pub api_key: String,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::articles::Entity")]
    Articles,
    #[sea_orm(has_many = "super::videos::Entity")]
    Videos,
}

impl Related<super::articles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Articles.def()
    }
}

impl Related<super::videos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Videos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Identity for Model {
    fn id(&self) -> i32 {
        self.id
    }
}
