use axum::response::{Html, IntoResponse, Response};
use sea_orm::DbErr;

#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = crate::templates::error_page(self.to_string());
        Html(body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures of catalog store operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("database connection failed: {0}")]
    Connection(#[source] DbErr),

    #[error("database query failed: {0}")]
    Query(#[source] DbErr),

    #[error("no movie titled '{0}'")]
    NotFound(String),
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Connection(err),
            _ => Self::Query(err),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
