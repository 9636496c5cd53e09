use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::settings::AppConfig;

const MAX_AGE_SECS: usize = 3600;

/// Read-only CORS policy built from `cors_allowed_origins`.
pub fn cors_policy(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    let cors = Cors::default()
        .allowed_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allowed_headers([header::ACCEPT, header::CONTENT_TYPE])
        .max_age(MAX_AGE_SECS);

    if origins.iter().any(|origin| origin == "*") {
        cors.allow_any_origin()
    } else {
        origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}
