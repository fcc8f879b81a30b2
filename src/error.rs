use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use mongodb::bson::oid;
use thiserror::Error;

use crate::models::response::ApiResponse;
use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid ID format")]
    InvalidId(#[source] oid::Error),

    #[error("Cannot parse JSON")]
    InvalidJson(String),

    #[error("Body is required")]
    MissingBody,

    #[error("Todo not found")]
    NotFound,

    #[error("{message}")]
    Repository {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl ApiError {
    pub fn repository(message: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| ApiError::Repository { message, source }
    }

    fn detail(&self) -> Option<String> {
        match self {
            ApiError::InvalidId(err) => Some(err.to_string()),
            ApiError::InvalidJson(err) => Some(err.clone()),
            ApiError::MissingBody | ApiError::NotFound => None,
            ApiError::Repository { source, .. } => Some(source.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::InvalidJson(_) | ApiError::MissingBody => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Repository { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Repository { message, source } = self {
            tracing::error!(error = %source, "{}", message);
        }
        HttpResponse::build(self.status_code())
            .json(ApiResponse::error(self.to_string(), self.detail()))
    }
}
