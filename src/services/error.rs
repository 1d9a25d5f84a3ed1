use thiserror::Error;

use crate::db::RepositoryError;
use crate::domain::validation::ValidationErrors;

/// Errors surfaced by every domain service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A referenced parent record does not exist.
    #[error("{0}")]
    ReferentialIntegrity(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    #[must_use]
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{entity} not found"))
    }

    #[must_use]
    pub fn missing_parent(entity: &str) -> Self {
        Self::ReferentialIntegrity(format!("{entity} not found"))
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                Self::NotFound(format!("{entity} {id} not found"))
            }
            RepositoryError::Constraint(msg) => Self::Constraint(msg),
            RepositoryError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(err: sea_orm::DbErr) -> Self {
        RepositoryError::from(err).into()
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
