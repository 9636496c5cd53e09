use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use showcase_backend::{
    catalog::build_catalog,
    graceful_shutdown::shutdown_signal,
    handlers::home::not_found,
    middlewares::cors::cors_policy,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    telemetry::init_tracing,
    AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing(&AppEnvironment::from_env().unwrap_or(AppEnvironment::Development));

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = match build_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Catalog error: {:#}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config, catalog));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Showcase API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(cors_policy(&server_config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
            .default_service(web::to(not_found))
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
