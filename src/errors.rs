use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Not found: {_0}")]
    NotFound(String),

    #[display("Internal server error: {_0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("Serialization error: {}", err))
    }
}

/// Problems found while assembling the project catalog at startup.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum CatalogError {
    #[display("Duplicate project id: {_0}")]
    DuplicateId(String),

    #[display("Project {_0} has no images")]
    MissingImages(String),
}

impl std::error::Error for CatalogError {}
