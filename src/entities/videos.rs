use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::Identity;

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GrenadeType {
    #[sea_orm(string_value = "Smoke")]
    Smoke,
    #[sea_orm(string_value = "Flashbang")]
    Flashbang,
    #[sea_orm(string_value = "HighExplosive")]
    HighExplosive,
    #[sea_orm(string_value = "Molotov")]
    Molotov,
    #[sea_orm(string_value = "Incendiary")]
    Incendiary,
    #[sea_orm(string_value = "Decoy")]
    Decoy,
}

impl GrenadeType {
    pub const NAMES: &'static [&'static str] = &[
        "Smoke",
        "Flashbang",
        "HighExplosive",
        "Molotov",
        "Incendiary",
        "Decoy",
    ];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Smoke" => Some(Self::Smoke),
            "Flashbang" => Some(Self::Flashbang),
            "HighExplosive" => Some(Self::HighExplosive),
            "Molotov" => Some(Self::Molotov),
            "Incendiary" => Some(Self::Incendiary),
            "Decoy" => Some(Self::Decoy),
            _ => None,
        }
    }
}

/// Server tick rate the lineup was recorded on. Stored as the raw tick value.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum TickRate {
    Tick64 = 64,
    Tick128 = 128,
}

impl TickRate {
    pub const NAMES: &'static [&'static str] = &["Tick64", "Tick128"];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Tick64" => Some(Self::Tick64),
            "Tick128" => Some(Self::Tick128),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub release_date: Date,
    pub grenade_type: GrenadeType,
    pub tick_rate: TickRate,
    pub description: String,
    pub user_id: i32,
    pub map_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::maps::Entity",
        from = "Column::MapId",
        to = "super::maps::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Map,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::maps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Map.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Identity for Model {
    fn id(&self) -> i32 {
        self.id
    }
}
