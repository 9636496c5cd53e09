use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use tracing::instrument;

use crate::{
    entities::{project::ProjectSummary, seo::SeoBundle},
    errors::AppError,
    AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteIdentity<'a> {
    name: &'a str,
    author: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HomeResponse<'a> {
    message: &'static str,
    version: &'static str,
    site: SiteIdentity<'a>,
    featured: Vec<ProjectSummary<'a>>,
    seo: SeoBundle,
}

#[instrument(skip(state))]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let featured = state.project_handler.featured_projects(state.featured_count);
    let site = state.metadata.site();

    HttpResponse::Ok().json(HomeResponse {
        message: "Welcome to the project showcase API!",
        version: env!("CARGO_PKG_VERSION"),
        site: SiteIdentity {
            name: &site.site_name,
            author: &site.author,
            url: &site.base_url,
        },
        seo: state.metadata.home_seo(&featured),
        featured: featured.iter().map(|project| project.to_summary()).collect(),
    })
}

/// Fallback for every unmatched route.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Resource not found".to_string()))
}
