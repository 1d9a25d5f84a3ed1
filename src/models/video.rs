use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::domain::validation::{
    FieldCheck, Rule, Validate, ValidationErrors, Value, Violation, check,
};
use crate::entities::videos::{self, GrenadeType, TickRate};
use crate::entities::maps;
use crate::models::User;

const TITLE_RULES: &[Rule] = &[Rule::Required, Rule::Length { min: 4, max: 60 }];
const DESCRIPTION_RULES: &[Rule] = &[Rule::Required, Rule::Length { min: 3, max: 60 }];
const DATE_RULES: &[Rule] = &[Rule::Required];
const GRENADE_RULES: &[Rule] = &[Rule::Required, Rule::OneOf(GrenadeType::NAMES)];
const TICK_RULES: &[Rule] = &[Rule::Required, Rule::OneOf(TickRate::NAMES)];
const ID_RULES: &[Rule] = &[Rule::Required, Rule::Positive];

/// Payload for a lineup video. Enumerations arrive by name, e.g.
/// `"grenade_type": "Smoke"` and `"tick_rate": "Tick128"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoInput {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub grenade_type: String,
    pub tick_rate: String,
    pub description: String,
    pub user_id: Option<i32>,
    pub map_id: Option<i32>,
}

impl VideoInput {
    /// Trims text fields so the validated value is the stored value.
    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        self.grenade_type = self.grenade_type.trim().to_string();
        self.tick_rate = self.tick_rate.trim().to_string();
    }

    pub fn into_model(mut self, id: i32) -> Result<videos::Model, ValidationErrors> {
        self.normalize();
        self.ensure_valid()?;
        match (
            self.release_date,
            GrenadeType::parse(&self.grenade_type),
            TickRate::parse(&self.tick_rate),
            self.user_id,
            self.map_id,
        ) {
            (Some(release_date), Some(grenade_type), Some(tick_rate), Some(user_id), Some(map_id)) => {
                Ok(videos::Model {
                    id,
                    title: self.title,
                    release_date,
                    grenade_type,
                    tick_rate,
                    description: self.description,
                    user_id,
                    map_id,
                })
            }
            _ => Err(ValidationErrors(self.validate())),
        }
    }
}

/// Insertable row for `model`; the store assigns the identity.
#[must_use]
pub fn new_row(model: videos::Model) -> videos::ActiveModel {
    videos::ActiveModel {
        title: Set(model.title),
        release_date: Set(model.release_date),
        grenade_type: Set(model.grenade_type),
        tick_rate: Set(model.tick_rate),
        description: Set(model.description),
        user_id: Set(model.user_id),
        map_id: Set(model.map_id),
        ..Default::default()
    }
}

impl Validate for VideoInput {
    fn validate(&self) -> Vec<Violation> {
        check(&[
            FieldCheck::new("title", "Title", self.title.as_str(), TITLE_RULES),
            FieldCheck::new(
                "release_date",
                "Release Date",
                Value::Present(self.release_date.is_some()),
                DATE_RULES,
            ),
            FieldCheck::new(
                "grenade_type",
                "Grenade Type",
                self.grenade_type.as_str(),
                GRENADE_RULES,
            ),
            FieldCheck::new("tick_rate", "Tick Rate", self.tick_rate.as_str(), TICK_RULES),
            FieldCheck::new(
                "description",
                "Description",
                self.description.as_str(),
                DESCRIPTION_RULES,
            ),
            FieldCheck::new("user_id", "User", self.user_id, ID_RULES),
            FieldCheck::new("map_id", "Map", self.map_id, ID_RULES),
        ])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoDetails {
    #[serde(flatten)]
    pub video: videos::Model,
    pub author: Option<User>,
    pub map: Option<maps::Model>,
}
