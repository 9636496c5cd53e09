use actix_web::web;

use crate::{constants::API_PREFIX, handlers::{home::home, sitemap::sitemap}};

mod projects;
mod system;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)));
    cfg.service(web::resource("/sitemap.xml").route(web::get().to(sitemap)));

    cfg.service(
        web::scope(API_PREFIX)
            .configure(projects::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
