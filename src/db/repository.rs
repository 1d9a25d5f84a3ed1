//! Generic CRUD repository over `SeaORM` entities.
//!
//! Every entity exposed through [`Repository`] has an integer primary key and a
//! model implementing [`Identity`]. Reads return detached models, writes are
//! single statements and commit atomically.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityName, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter, Related, SqlErr,
    sea_query::IntoCondition,
};
use thiserror::Error;
use tracing::debug;

/// Capability shared by every persisted model: a stable integer identity.
pub trait Identity {
    fn id(&self) -> i32;
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: i32 },

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                Self::Constraint(format!("duplicate value ({msg})"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                Self::Constraint(format!("referenced record does not exist ({msg})"))
            }
            _ => Self::Database(err),
        }
    }
}

pub type RepoResult<T> = Result<T, RepositoryError>;

/// Type-parameterized CRUD over a single entity table.
pub struct Repository<E> {
    conn: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> Repository<E>
where
    E: EntityTrait,
    E::Model: Identity + IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    fn entity_name() -> String {
        E::default().table_name().to_string()
    }

    fn not_found(id: i32) -> RepositoryError {
        RepositoryError::NotFound {
            entity: Self::entity_name(),
            id,
        }
    }

    /// Inserts a new row. The identity is assigned by the store.
    pub async fn add(&self, model: E::ActiveModel) -> RepoResult<E::Model> {
        let stored = model.insert(&self.conn).await?;
        debug!(entity = %Self::entity_name(), id = stored.id(), "Inserted row");
        Ok(stored)
    }

    /// Replaces every column of the row identified by `model.id()`.
    pub async fn update(&self, model: E::Model) -> RepoResult<E::Model> {
        let id = model.id();
        let active = model.into_active_model().reset_all();

        match E::update(active).exec(&self.conn).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated) => Err(Self::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, model: E::Model) -> RepoResult<()> {
        let id = model.id();
        let result = E::delete(model.into_active_model())
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> RepoResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.conn).await?)
    }

    pub async fn get_all(&self) -> RepoResult<Vec<E::Model>> {
        Ok(E::find().all(&self.conn).await?)
    }

    /// Filtered scan. The condition is compiled into the `WHERE` clause.
    pub async fn find<F>(&self, filter: F) -> RepoResult<Vec<E::Model>>
    where
        F: IntoCondition + Send,
    {
        Ok(E::find().filter(filter).all(&self.conn).await?)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        Ok(E::find().count(&self.conn).await?)
    }

    /// Filtered scan that also loads one belongs-to relation per row.
    pub async fn find_with_related<R, F>(
        &self,
        filter: F,
    ) -> RepoResult<Vec<(E::Model, Option<R::Model>)>>
    where
        R: EntityTrait,
        E: Related<R>,
        F: IntoCondition + Send,
    {
        Ok(E::find()
            .find_also_related(R::default())
            .filter(filter)
            .all(&self.conn)
            .await?)
    }

    pub async fn get_by_id_with_related<R>(
        &self,
        id: i32,
    ) -> RepoResult<Option<(E::Model, Option<R::Model>)>>
    where
        R: EntityTrait,
        E: Related<R>,
    {
        Ok(E::find_by_id(id)
            .find_also_related(R::default())
            .one(&self.conn)
            .await?)
    }

    /// Point lookup that also loads every row of a has-many relation.
    /// Every row with its children, loaded in a single joined query.
    pub async fn get_all_with_children<R>(&self) -> RepoResult<Vec<(E::Model, Vec<R::Model>)>>
    where
        R: EntityTrait,
        E: Related<R>,
    {
        Ok(E::find()
            .find_with_related(R::default())
            .all(&self.conn)
            .await?)
    }

    pub async fn get_by_id_with_children<R>(
        &self,
        id: i32,
    ) -> RepoResult<Option<(E::Model, Vec<R::Model>)>>
    where
        R: EntityTrait,
        E: Related<R>,
    {
        let mut rows = E::find_by_id(id)
            .find_with_related(R::default())
            .all(&self.conn)
            .await?;

        Ok(rows.pop())
    }
}
