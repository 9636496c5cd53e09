use actix_web::{
    web,
    http::StatusCode,
    ResponseError,
    HttpResponse,
    error::{PathError, QueryPayloadError},
};
use serde_json::json;

/// Makes extractor failures answer with the same JSON error body as handlers.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        JsonError::from(err).into()
    }));
}

#[derive(Debug)]
pub struct JsonError {
    message: String,
    status: StatusCode
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(json!({ "error": self.message }))
    }
}

impl From<QueryPayloadError> for JsonError {
    fn from(err: QueryPayloadError) -> Self {
        JsonError {
            message: format!("Query string error: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<PathError> for JsonError {
    fn from(err: PathError) -> Self {
        JsonError {
            message: format!("Path error: {}", err),
            status: StatusCode::NOT_FOUND,
        }
    }
}
