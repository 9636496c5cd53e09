mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes, middlewares};
pub use infrastructure::{catalog, telemetry};

use repositories::in_memory::InMemoryProjectRepo;
use handlers::system::HealthCache;
use use_cases::{metadata::MetadataDeriver, projects::ProjectHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub metadata: MetadataDeriver,
    pub featured_count: usize,
    pub health_cache: HealthCache,
}

pub type AppProjectHandler = ProjectHandler<InMemoryProjectRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, project_repo: InMemoryProjectRepo) -> Self {
        let project_handler = ProjectHandler::new(project_repo);
        let metadata = MetadataDeriver::new(config.site.clone());

        AppState {
            project_handler,
            metadata,
            featured_count: config.featured_count,
            health_cache: HealthCache::default(),
        }
    }
}
