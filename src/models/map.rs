use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldCheck, Rule, Validate, ValidationErrors, Violation, check};
use crate::entities::{maps, videos};

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::Length { min: 3, max: 60 }];
const DESCRIPTION_RULES: &[Rule] = &[Rule::Length { min: 1, max: 255 }];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MapInput {
    pub name: String,
    pub description: Option<String>,
}

impl MapInput {
    /// Trims text fields so the validated value is the stored value.
    /// A blank description is treated as absent.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.description = self
            .description
            .take()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
    }

    pub fn into_model(mut self, id: i32) -> Result<maps::Model, ValidationErrors> {
        self.normalize();
        self.ensure_valid()?;
        Ok(maps::Model {
            id,
            name: self.name,
            description: self.description,
        })
    }

    pub fn into_active_model(self) -> Result<maps::ActiveModel, ValidationErrors> {
        Ok(new_row(self.into_model(0)?))
    }
}

/// Insertable row for `model`; the store assigns the identity.
#[must_use]
pub fn new_row(model: maps::Model) -> maps::ActiveModel {
    maps::ActiveModel {
        name: Set(model.name),
        description: Set(model.description),
        ..Default::default()
    }
}

impl Validate for MapInput {
    fn validate(&self) -> Vec<Violation> {
        check(&[
            FieldCheck::new("name", "Name", self.name.as_str(), NAME_RULES),
            FieldCheck::new(
                "description",
                "Description",
                self.description.as_deref(),
                DESCRIPTION_RULES,
            ),
        ])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapWithVideos {
    #[serde(flatten)]
    pub map: maps::Model,
    pub videos: Vec<videos::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_required() {
        let violations = MapInput::default().validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn test_blank_description_becomes_none() {
        let input = MapInput {
            name: "  de_mirage ".to_string(),
            description: Some("   ".to_string()),
        };
        let model = input.into_model(3).unwrap();
        assert_eq!(model.name, "de_mirage");
        assert!(model.description.is_none());
    }

    #[test]
    fn test_length_is_checked_after_trimming() {
        let input = MapInput {
            name: "   ab   ".to_string(),
            description: None,
        };
        let err = input.into_model(1).unwrap_err();
        assert!(err.has_field("name"));
        assert_eq!(
            err.violations()[0].message,
            "The field Name must be between 3 and 60 characters."
        );

        let padded = MapInput {
            name: format!("  {}  ", "d".repeat(60)),
            description: None,
        };
        assert_eq!(padded.into_model(1).unwrap().name.chars().count(), 60);
    }

    #[test]
    fn test_description_too_long() {
        let input = MapInput {
            name: "de_nuke".to_string(),
            description: Some("x".repeat(256)),
        };
        let err = input.into_active_model().unwrap_err();
        assert!(err.has_field("description"));
    }
}
