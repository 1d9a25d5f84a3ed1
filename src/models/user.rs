use serde::{Deserialize, Serialize};

use crate::domain::validation::{FieldCheck, Rule, Validate, Violation, check, username_regex};
use crate::entities::users::{self, UserRole};
use crate::entities::{articles, videos};

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::Length { min: 4, max: 60 }];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const USERNAME_RULES: &[Rule] = &[
    Rule::Required,
    Rule::Length { min: 4, max: 60 },
    Rule::Pattern(username_regex),
];
const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::Length { min: 6, max: 60 }];
const PASSWORD_CHANGE_RULES: &[Rule] = &[Rule::Length { min: 6, max: 60 }];
const ROLE_RULES: &[Rule] = &[Rule::Required, Rule::OneOf(UserRole::NAMES)];

/// User as exposed outside the persistence layer (never carries the password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub created_at: String,
    pub updated_at: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            username: model.username,
            role: model.role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Payload for creating or replacing a user.
///
/// `password` is mandatory on create. On update a missing or blank password
/// keeps the stored hash.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: Option<String>,
    pub role: String,
}

impl UserInput {
    /// Trims text fields so the validated value is the stored value.
    /// Usernames are case-insensitive and stored lowercase.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.username = self.username.trim().to_lowercase();
        self.email = self.email.trim().to_string();
    }

    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }

    /// The new password, if one was actually supplied.
    #[must_use]
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.trim().is_empty())
    }

    fn checks(&self, password_rules: &'static [Rule]) -> Vec<Violation> {
        check(&[
            FieldCheck::new("name", "Name", self.name.as_str(), NAME_RULES),
            FieldCheck::new("email", "Email", self.email.as_str(), EMAIL_RULES),
            FieldCheck::new("username", "Username", self.username.as_str(), USERNAME_RULES),
            FieldCheck::new("password", "Password", self.password.as_deref(), password_rules),
            FieldCheck::new("role", "Role", self.role.as_str(), ROLE_RULES),
        ])
    }

    /// Validation for updates, where the password may be omitted.
    #[must_use]
    pub fn validate_update(&self) -> Vec<Violation> {
        self.checks(PASSWORD_CHANGE_RULES)
    }
}

impl Validate for UserInput {
    fn validate(&self) -> Vec<Violation> {
        self.checks(PASSWORD_RULES)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserWithArticles {
    #[serde(flatten)]
    pub user: User,
    pub articles: Vec<articles::Model>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserWithVideos {
    #[serde(flatten)]
    pub user: User,
    pub videos: Vec<videos::Model>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub user: User,
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> UserInput {
        UserInput {
            name: "Joao da Silva Member User".to_string(),
            email: "joaozinho@gmail.com".to_string(),
            username: "joaomember".to_string(),
            password: Some("@123456*".to_string()),
            role: "Member".to_string(),
        }
    }

    fn fields(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn test_valid_member() {
        assert!(member().validate().is_empty());
        assert_eq!(member().role(), Some(UserRole::Member));
    }

    #[test]
    fn test_empty_required_fields_are_reported() {
        let input = UserInput::default();
        let violations = input.validate();
        assert_eq!(
            fields(&violations),
            vec!["name", "email", "username", "password", "role"]
        );
        assert_eq!(violations[0].message, "The field Name is required.");
    }

    #[test]
    fn test_length_bounds() {
        let mut input = member();
        input.name = "Leo".to_string();
        input.password = Some("12345".to_string());
        input.username =
            "nomedeusuariomuitograndenomedeusuariomuitograndenomedeusuariomuitogrande".to_string();

        let violations = input.validate();
        assert_eq!(fields(&violations), vec!["name", "username", "password"]);
        assert_eq!(
            violations[2].message,
            "The field Password must be between 6 and 60 characters."
        );
    }

    #[test]
    fn test_username_is_normalized_before_validation() {
        let mut input = member();
        input.username = "JoaoMember".to_string();
        input.normalize();
        assert_eq!(input.username, "joaomember");
        assert!(input.validate().is_empty());
    }

    #[test]
    fn test_padded_name_is_checked_after_trimming() {
        let mut input = member();
        input.name = "  Leo  ".to_string();
        input.normalize();
        assert_eq!(input.name, "Leo");
        assert_eq!(fields(&input.validate()), vec!["name"]);

        let mut input = member();
        input.name = format!("  {}  ", "n".repeat(60));
        input.email = "  joaozinho@gmail.com ".to_string();
        input.normalize();
        assert!(input.validate().is_empty());
        assert_eq!(input.email, "joaozinho@gmail.com");
    }

    #[test]
    fn test_username_with_spaces_is_invalid() {
        let mut input = member();
        input.username = "meu nome de usuario".to_string();
        input.normalize();

        let violations = input.validate();
        assert_eq!(fields(&violations), vec!["username"]);
        assert_eq!(violations[0].message, "The field Username is invalid.");
    }

    #[test]
    fn test_invalid_email_and_role() {
        let mut input = member();
        input.email = "abc.com".to_string();
        input.role = "Owner".to_string();

        let violations = input.validate();
        assert_eq!(fields(&violations), vec!["email", "role"]);
        assert_eq!(violations[0].message, "The field Email is invalid.");
    }

    #[test]
    fn test_update_allows_missing_password() {
        let mut input = member();
        input.password = None;
        assert!(input.validate_update().is_empty());
        assert!(input.new_password().is_none());
        assert_eq!(fields(&input.validate()), vec!["password"]);

        input.password = Some("123".to_string());
        assert_eq!(fields(&input.validate_update()), vec!["password"]);
    }

    #[test]
    fn test_user_serialization_hides_credentials() {
        let model = users::Model {
            id: 7,
            name: "Leandro".to_string(),
            email: "leo@leo.com".to_string(),
            username: "leandro".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: UserRole::Administrator,
            api_key: "key".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_value(User::from(model)).unwrap();
        assert_eq!(json["role"], "Administrator");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("api_key").is_none());
    }
}
