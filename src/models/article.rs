use chrono::NaiveDate;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::domain::validation::{
    FieldCheck, Rule, Validate, ValidationErrors, Value, Violation, check,
};
use crate::entities::articles;
use crate::models::User;

const TITLE_RULES: &[Rule] = &[Rule::Required, Rule::Length { min: 4, max: 60 }];
const BODY_RULES: &[Rule] = &[Rule::Required, Rule::Length { min: 3, max: 8000 }];
const DATE_RULES: &[Rule] = &[Rule::Required];
const ID_RULES: &[Rule] = &[Rule::Required, Rule::Positive];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArticleInput {
    pub title: String,
    pub body: String,
    pub release_date: Option<NaiveDate>,
    pub user_id: Option<i32>,
}

impl ArticleInput {
    /// Trims the title so the validated value is the stored value.
    pub fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
    }

    pub fn into_model(mut self, id: i32) -> Result<articles::Model, ValidationErrors> {
        self.normalize();
        self.ensure_valid()?;
        match (self.release_date, self.user_id) {
            (Some(release_date), Some(user_id)) => Ok(articles::Model {
                id,
                title: self.title,
                body: self.body,
                release_date,
                user_id,
            }),
            _ => Err(ValidationErrors(self.validate())),
        }
    }
}

/// Insertable row for `model`; the store assigns the identity.
#[must_use]
pub fn new_row(model: articles::Model) -> articles::ActiveModel {
    articles::ActiveModel {
        title: Set(model.title),
        body: Set(model.body),
        release_date: Set(model.release_date),
        user_id: Set(model.user_id),
        ..Default::default()
    }
}

impl Validate for ArticleInput {
    fn validate(&self) -> Vec<Violation> {
        check(&[
            FieldCheck::new("title", "Title", self.title.as_str(), TITLE_RULES),
            FieldCheck::new("body", "Body", self.body.as_str(), BODY_RULES),
            FieldCheck::new(
                "release_date",
                "Release Date",
                Value::Present(self.release_date.is_some()),
                DATE_RULES,
            ),
            FieldCheck::new("user_id", "User", self.user_id, ID_RULES),
        ])
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleWithAuthor {
    #[serde(flatten)]
    pub article: articles::Model,
    pub author: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ArticleInput {
        ArticleInput {
            title: "Molotov lineups".to_string(),
            body: "Throw from the corner of the box.".to_string(),
            release_date: NaiveDate::from_ymd_opt(2021, 3, 14),
            user_id: Some(1),
        }
    }

    #[test]
    fn test_valid_article_builds_model() {
        let model = valid().into_model(5).unwrap();
        assert_eq!(model.id, 5);
        assert_eq!(model.user_id, 1);
        assert_eq!(model.title, "Molotov lineups");
    }

    #[test]
    fn test_missing_fields() {
        let err = ArticleInput::default().into_model(0).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "body", "release_date", "user_id"]);
    }

    #[test]
    fn test_non_positive_author_and_short_body() {
        let mut input = valid();
        input.user_id = Some(0);
        input.body = "ok".to_string();

        let violations = input.validate();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "body");
        assert_eq!(
            violations[1].message,
            "The field User must be a positive identifier."
        );
    }

    #[test]
    fn test_padded_title_is_checked_after_trimming() {
        let mut input = valid();
        input.title = "  ab  ".to_string();
        assert!(input.into_model(1).unwrap_err().has_field("title"));

        let mut input = valid();
        input.title = "  Mid to B  ".to_string();
        assert_eq!(input.into_model(1).unwrap().title, "Mid to B");
    }

    #[test]
    fn test_body_upper_bound() {
        let mut input = valid();
        input.body = "a".repeat(8000);
        assert!(input.validate().is_empty());
        input.body.push('a');
        assert!(input.ensure_valid().unwrap_err().has_field("body"));
    }
}
