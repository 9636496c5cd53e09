use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects))
            )
            // Registered before `/{project_id}` so it is not captured as an id.
            .service(
                web::resource("/categories")
                    .route(web::get().to(projects::list_categories))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::get().to(projects::get_project_by_id))
            )
            .service(
                web::resource("/{project_id}/metadata")
                    .route(web::get().to(projects::get_project_metadata))
            )
            .service(
                web::resource("/{project_id}/structured-data")
                    .route(web::get().to(projects::get_project_structured_data))
            )
    );
}
