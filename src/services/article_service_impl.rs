//! `SeaORM` implementation of the `ArticleService` trait.

use async_trait::async_trait;
use sea_orm::Condition;
use tracing::info;

use crate::db::{Repository, RepositoryError, Store};
use crate::entities::{articles, users};
use crate::models::{ArticleInput, ArticleWithAuthor, article};
use crate::services::article_service::ArticleService;
use crate::services::error::{ServiceError, ServiceResult};

pub struct SeaOrmArticleService {
    articles: Repository<articles::Entity>,
    users: Repository<users::Entity>,
}

impl SeaOrmArticleService {
    #[must_use]
    pub fn new(store: &Store) -> Self {
        Self {
            articles: store.articles(),
            users: store.users(),
        }
    }

    async fn ensure_author_exists(&self, user_id: i32) -> ServiceResult<()> {
        if self.users.get_by_id(user_id).await?.is_none() {
            return Err(ServiceError::missing_parent("User"));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleService for SeaOrmArticleService {
    async fn add(&self, input: ArticleInput) -> ServiceResult<articles::Model> {
        let model = input.into_model(0)?;
        self.ensure_author_exists(model.user_id).await?;

        let article = self.articles.add(article::new_row(model)).await?;
        info!(id = article.id, user_id = article.user_id, "Article created");
        Ok(article)
    }

    async fn update(&self, id: i32, input: ArticleInput) -> ServiceResult<articles::Model> {
        let model = input.into_model(id)?;
        self.ensure_author_exists(model.user_id).await?;

        match self.articles.update(model).await {
            Ok(article) => {
                info!(id, "Article updated");
                Ok(article)
            }
            Err(RepositoryError::NotFound { .. }) => Err(ServiceError::not_found("Article")),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ServiceResult<()> {
        let article = self.get_by_id(id).await?;
        self.articles.delete(article).await?;
        info!(id, "Article deleted");
        Ok(())
    }

    async fn get_all(&self) -> ServiceResult<Vec<articles::Model>> {
        Ok(self.articles.get_all().await?)
    }

    async fn get_by_id(&self, id: i32) -> ServiceResult<articles::Model> {
        self.articles
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article"))
    }

    async fn find(&self, condition: Condition) -> ServiceResult<Vec<articles::Model>> {
        Ok(self.articles.find(condition).await?)
    }

    async fn get_by_id_with_author(&self, id: i32) -> ServiceResult<ArticleWithAuthor> {
        let (article, author) = self
            .articles
            .get_by_id_with_related::<users::Entity>(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Article"))?;

        Ok(ArticleWithAuthor {
            article,
            author: author.map(Into::into),
        })
    }
}
