use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{use_cases::sitemap::Sitemap, AppState};

#[instrument(skip(state))]
pub async fn sitemap(state: web::Data<AppState>) -> impl Responder {
    let sitemap = Sitemap::from_catalog(
        &state.metadata.site().base_url,
        state.project_handler.all_projects(),
    );

    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(sitemap.into_xml())
}
