//! Declarative field validation.
//!
//! Each input type describes its constraints as a table of [`FieldCheck`]s and
//! hands them to [`check`], which evaluates the rules in order and reports at
//! most one [`Violation`] per field.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// A single failed constraint, keyed by the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// Non-empty list of violations returned to callers as one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<Violation>);

impl ValidationErrors {
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|v| v.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Self-validation contract implemented by every input record.
pub trait Validate {
    fn validate(&self) -> Vec<Violation>;

    /// Convenience wrapper turning a non-empty violation list into an error.
    fn ensure_valid(&self) -> Result<(), ValidationErrors> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(violations))
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    /// Inclusive bounds on the number of characters.
    Length { min: usize, max: usize },
    Email,
    Pattern(fn() -> &'static Regex),
    OneOf(&'static [&'static str]),
    /// Identifiers referencing other rows must be strictly positive.
    Positive,
}

#[derive(Debug, Clone, Copy)]
pub enum Value<'a> {
    Text(Option<&'a str>),
    Number(Option<i64>),
    /// Typed values (dates, parsed enums) where only presence matters.
    Present(bool),
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for Value<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Value::Text(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Number(Some(i64::from(value)))
    }
}

impl From<Option<i32>> for Value<'_> {
    fn from(value: Option<i32>) -> Self {
        Value::Number(value.map(i64::from))
    }
}

impl Value<'_> {
    fn is_missing(&self) -> bool {
        match self {
            Value::Text(text) => text.is_none_or(|t| t.trim().is_empty()),
            Value::Number(n) => n.is_none(),
            Value::Present(present) => !present,
        }
    }
}

/// One row of a validation table.
#[derive(Debug, Clone, Copy)]
pub struct FieldCheck<'a> {
    /// Field name as it appears in payloads.
    pub field: &'static str,
    /// Human readable label used in messages.
    pub label: &'static str,
    pub value: Value<'a>,
    pub rules: &'static [Rule],
}

impl<'a> FieldCheck<'a> {
    pub fn new(
        field: &'static str,
        label: &'static str,
        value: impl Into<Value<'a>>,
        rules: &'static [Rule],
    ) -> Self {
        Self {
            field,
            label,
            value: value.into(),
            rules,
        }
    }
}

/// Evaluates a validation table. Rules for a field stop at the first failure.
#[must_use]
pub fn check(fields: &[FieldCheck<'_>]) -> Vec<Violation> {
    fields
        .iter()
        .filter_map(|f| {
            first_failure(f).map(|message| Violation {
                field: f.field.to_string(),
                message,
            })
        })
        .collect()
}

fn first_failure(check: &FieldCheck<'_>) -> Option<String> {
    if check.value.is_missing() {
        return check
            .rules
            .iter()
            .any(|r| matches!(r, Rule::Required))
            .then(|| format!("The field {} is required.", check.label));
    }

    check
        .rules
        .iter()
        .find_map(|rule| apply(*rule, check.label, &check.value))
}

fn apply(rule: Rule, label: &str, value: &Value<'_>) -> Option<String> {
    match (rule, value) {
        (Rule::Length { min, max }, Value::Text(Some(text))) => {
            let len = text.chars().count();
            (len < min || len > max).then(|| {
                format!("The field {label} must be between {min} and {max} characters.")
            })
        }
        (Rule::Email, Value::Text(Some(text))) => {
            (!email_regex().is_match(text)).then(|| format!("The field {label} is invalid."))
        }
        (Rule::Pattern(regex), Value::Text(Some(text))) => {
            (!regex().is_match(text)).then(|| format!("The field {label} is invalid."))
        }
        (Rule::OneOf(variants), Value::Text(Some(text))) => {
            (!variants.contains(text)).then(|| {
                format!(
                    "The field {label} must be one of: {}.",
                    variants.join(", ")
                )
            })
        }
        (Rule::Positive, Value::Number(Some(n))) => {
            (*n <= 0).then(|| format!("The field {label} must be a positive identifier."))
        }
        _ => None,
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
    })
}

/// Lowercase alphanumerics, optionally separated by single `_` or `-`.
pub fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+([_-]?[a-z0-9])*$").expect("username regex must compile")
    })
}
