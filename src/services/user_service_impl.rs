//! `SeaORM` implementation of the `UserService` trait.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, ColumnTrait, Condition};
use tracing::{info, warn};

use crate::config::SecurityConfig;
use crate::db::{Repository, RepositoryError, Store};
use crate::domain::validation::{Validate, ValidationErrors};
use crate::entities::{articles, users, videos};
use crate::models::{LoginResult, User, UserInput, UserWithArticles, UserWithVideos};
use crate::services::error::{ServiceError, ServiceResult};
use crate::services::password::{generate_api_key, hash_password_async, verify_password_async};
use crate::services::user_service::UserService;

pub struct SeaOrmUserService {
    users: Repository<users::Entity>,
    security: SecurityConfig,
}

impl SeaOrmUserService {
    #[must_use]
    pub fn new(store: &Store, security: SecurityConfig) -> Self {
        Self {
            users: store.users(),
            security,
        }
    }

    async fn model_by_id(&self, id: i32) -> ServiceResult<users::Model> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    async fn model_by_username(&self, username: &str) -> ServiceResult<Option<users::Model>> {
        let mut found = self
            .users
            .find(users::Column::Username.eq(username.trim().to_lowercase()))
            .await?;
        Ok(found.pop())
    }

    async fn hash(&self, password: &str) -> ServiceResult<String> {
        Ok(hash_password_async(password.to_string(), self.security.clone()).await?)
    }
}

fn parsed_role(input: &UserInput) -> ServiceResult<users::UserRole> {
    input
        .role()
        .ok_or_else(|| ServiceError::Validation(ValidationErrors(input.validate_update())))
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn add(&self, mut input: UserInput) -> ServiceResult<User> {
        input.normalize();
        input.ensure_valid()?;
        let role = parsed_role(&input)?;
        let password = input.new_password().unwrap_or_default();

        let now = chrono::Utc::now().to_rfc3339();
        let active = users::ActiveModel {
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            username: Set(input.username.clone()),
            password_hash: Set(self.hash(password).await?),
            role: Set(role),
            api_key: Set(generate_api_key()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = self.users.add(active).await?;
        info!(id = user.id, username = %user.username, role = ?user.role, "User created");
        Ok(user.into())
    }

    async fn update(&self, id: i32, mut input: UserInput) -> ServiceResult<User> {
        input.normalize();
        let violations = input.validate_update();
        if !violations.is_empty() {
            return Err(ValidationErrors(violations).into());
        }
        let role = parsed_role(&input)?;

        let existing = self.model_by_id(id).await?;
        let password_hash = match input.new_password() {
            Some(password) => self.hash(password).await?,
            None => existing.password_hash,
        };

        let model = users::Model {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            username: input.username.clone(),
            password_hash,
            role,
            api_key: existing.api_key,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().to_rfc3339(),
        };

        match self.users.update(model).await {
            Ok(user) => {
                info!(id, username = %user.username, "User updated");
                Ok(user.into())
            }
            Err(RepositoryError::NotFound { .. }) => Err(ServiceError::not_found("User")),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ServiceResult<()> {
        let user = self.model_by_id(id).await?;
        self.users.delete(user).await?;
        info!(id, "User deleted");
        Ok(())
    }

    async fn get_all(&self) -> ServiceResult<Vec<User>> {
        let users = self.users.get_all().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ServiceResult<User> {
        Ok(self.model_by_id(id).await?.into())
    }

    async fn find(&self, condition: Condition) -> ServiceResult<Vec<User>> {
        let users = self.users.find(condition).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    async fn get_with_articles(&self, id: i32) -> ServiceResult<UserWithArticles> {
        let (user, articles) = self
            .users
            .get_by_id_with_children::<articles::Entity>(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        Ok(UserWithArticles {
            user: user.into(),
            articles,
        })
    }

    async fn get_with_videos(&self, id: i32) -> ServiceResult<UserWithVideos> {
        let (user, videos) = self
            .users
            .get_by_id_with_children::<videos::Entity>(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        Ok(UserWithVideos {
            user: user.into(),
            videos,
        })
    }

    async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<LoginResult> {
        let Some(user) = self.model_by_username(username).await? else {
            warn!(username, "Login attempt for unknown user");
            return Err(ServiceError::Unauthorized);
        };

        let valid =
            verify_password_async(password.to_string(), user.password_hash.clone()).await?;
        if !valid {
            warn!(username, "Login attempt with wrong password");
            return Err(ServiceError::Unauthorized);
        }

        let api_key = user.api_key.clone();
        Ok(LoginResult {
            user: user.into(),
            api_key,
        })
    }

    async fn regenerate_api_key(&self, id: i32) -> ServiceResult<String> {
        let mut user = self.model_by_id(id).await?;
        let api_key = generate_api_key();
        user.api_key.clone_from(&api_key);
        user.updated_at = chrono::Utc::now().to_rfc3339();

        let user = self.users.update(user).await?;
        info!(id, username = %user.username, "API key regenerated");
        Ok(api_key)
    }

    async fn verify_api_key(&self, api_key: &str) -> ServiceResult<Option<User>> {
        let mut found = self.users.find(users::Column::ApiKey.eq(api_key)).await?;
        Ok(found.pop().map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrator::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_API_KEY};
    use crate::entities::users::UserRole;
    use crate::services::password::verify_password;

    async fn setup() -> (Store, SeaOrmUserService) {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .unwrap();
        let security = SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
        };
        let service = SeaOrmUserService::new(&store, security);
        (store, service)
    }

    fn joao() -> UserInput {
        UserInput {
            name: "Joao da Silva Member User".to_string(),
            email: "joaozinho@gmail.com".to_string(),
            username: "JoaoMember".to_string(),
            password: Some("@123456*".to_string()),
            role: "Member".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_member_hashes_password() {
        let (store, service) = setup().await;

        let user = service.add(joao()).await.unwrap();
        assert!(user.id > 0);
        assert_eq!(user.username, "joaomember");
        assert_eq!(user.role, UserRole::Member);

        let stored = store.users().get_by_id(user.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "@123456*");
        assert!(verify_password("@123456*", &stored.password_hash).unwrap());
        assert_eq!(stored.api_key.len(), 64);
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let (store, service) = setup().await;

        let mut input = joao();
        input.name = String::new();
        let err = service.add(input).await.unwrap_err();

        let ServiceError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.violations()[0].message, "The field Name is required.");
        assert_eq!(store.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_name_and_role_keeps_password() {
        let (_store, service) = setup().await;
        let user = service.add(joao()).await.unwrap();

        let mut changed = joao();
        changed.name = "Joao da Silva Editor".to_string();
        changed.role = "Editor".to_string();
        changed.password = None;
        let updated = service.update(user.id, changed).await.unwrap();

        assert_eq!(updated.name, "Joao da Silva Editor");
        assert_eq!(updated.role, UserRole::Editor);
        assert_eq!(updated.created_at, user.created_at);

        let login = service.authenticate("joaomember", "@123456*").await.unwrap();
        assert_eq!(login.user.id, user.id);
    }

    #[tokio::test]
    async fn test_update_with_new_password() {
        let (_store, service) = setup().await;
        let user = service.add(joao()).await.unwrap();

        let mut changed = joao();
        changed.password = Some("n3w-secret".to_string());
        service.update(user.id, changed).await.unwrap();

        assert!(matches!(
            service.authenticate("joaomember", "@123456*").await.unwrap_err(),
            ServiceError::Unauthorized
        ));
        assert!(service.authenticate("joaomember", "n3w-secret").await.is_ok());
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_not_found() {
        let (store, service) = setup().await;

        let err = service.update(5000, joao()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(store.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_constraint_error() {
        let (_store, service) = setup().await;
        service.add(joao()).await.unwrap();

        let mut twin = joao();
        twin.email = "other@gmail.com".to_string();
        assert!(matches!(
            service.add(twin).await.unwrap_err(),
            ServiceError::Constraint(_)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_and_api_key() {
        let (_store, service) = setup().await;

        let login = service
            .authenticate(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .await
            .unwrap();
        assert_eq!(login.api_key, DEFAULT_API_KEY);
        assert_eq!(login.user.role, UserRole::Administrator);

        assert!(matches!(
            service.authenticate("nobody", "whatever").await.unwrap_err(),
            ServiceError::Unauthorized
        ));

        let owner = service.verify_api_key(DEFAULT_API_KEY).await.unwrap();
        assert_eq!(owner.unwrap().username, DEFAULT_ADMIN_USERNAME);
        assert!(service.verify_api_key("bogus").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_regenerate_api_key_revokes_old_key() {
        let (_store, service) = setup().await;
        let admin = service
            .verify_api_key(DEFAULT_API_KEY)
            .await
            .unwrap()
            .unwrap();

        let api_key = service.regenerate_api_key(admin.id).await.unwrap();
        assert_ne!(api_key, DEFAULT_API_KEY);
        assert_eq!(api_key.len(), 64);

        assert!(service.verify_api_key(DEFAULT_API_KEY).await.unwrap().is_none());
        let owner = service.verify_api_key(&api_key).await.unwrap().unwrap();
        assert_eq!(owner.id, admin.id);

        let login = service
            .authenticate(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .await
            .unwrap();
        assert_eq!(login.api_key, api_key);

        assert!(matches!(
            service.regenerate_api_key(5000).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_seeded_admin_can_be_saved_unchanged() {
        let (_store, service) = setup().await;
        let admin = service
            .verify_api_key(DEFAULT_API_KEY)
            .await
            .unwrap()
            .unwrap();

        let unchanged = UserInput {
            name: admin.name.clone(),
            email: admin.email.clone(),
            username: admin.username.clone(),
            password: None,
            role: "Administrator".to_string(),
        };
        let saved = service.update(admin.id, unchanged).await.unwrap();
        assert_eq!(saved.email, "admin@example.com");
        assert!(service
            .authenticate(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_padded_name_is_stored_trimmed() {
        let (_store, service) = setup().await;

        let mut short = joao();
        short.name = "   Leo   ".to_string();
        let err = service.add(short).await.unwrap_err();
        let ServiceError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.has_field("name"));

        let mut padded = joao();
        padded.name = "  Joao da Silva  ".to_string();
        let user = service.add(padded).await.unwrap();
        assert_eq!(user.name, "Joao da Silva");
    }

    #[tokio::test]
    async fn test_delete_cascades_to_articles() {
        let (store, service) = setup().await;
        let user = service.add(joao()).await.unwrap();

        store
            .articles()
            .add(articles::ActiveModel {
                title: Set("Short A smokes".to_string()),
                body: Set("Three smokes from the stairs.".to_string()),
                release_date: Set(chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
                user_id: Set(user.id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(service.get_with_articles(user.id).await.unwrap().articles.len(), 1);

        service.delete(user.id).await.unwrap();
        assert_eq!(store.articles().count().await.unwrap(), 0);
        assert!(matches!(
            service.get_by_id(user.id).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
