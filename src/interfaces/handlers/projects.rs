use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{ProjectDetailResponse, ProjectFilter, ProjectListResponse},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectFilter>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let projects = project_handler.list_projects(&query);

    let response = ProjectListResponse {
        count: projects.len(),
        stats: project_handler.stats(),
        seo: state.metadata.catalog_seo(&projects),
        projects: projects.iter().map(|project| project.to_summary()).collect(),
    };

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn list_categories(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let categories = state.project_handler.categories();
    Ok(HttpResponse::Ok().json(categories))
}

#[instrument(skip(state))]
pub async fn get_project_by_id(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project_by_id(&project_id)?;

    let response = ProjectDetailResponse {
        project,
        status_label: project.status.label(),
        seo: state.metadata.project_seo(project),
    };

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn get_project_metadata(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project_by_id(&project_id)?;
    Ok(HttpResponse::Ok().json(state.metadata.project_metadata(project)))
}

#[instrument(skip(state))]
pub async fn get_project_structured_data(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.get_project_by_id(&project_id)?;
    let body = state.metadata.project_structured_data(project).to_json()?;

    Ok(HttpResponse::Ok()
        .content_type("application/ld+json")
        .body(body))
}
