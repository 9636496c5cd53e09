use std::{collections::HashSet, sync::Arc};

use crate::{
    entities::project::Project,
    errors::CatalogError,
    repositories::project::ProjectRepository,
};

/// The catalog store: built once at startup, never mutated, shared by every worker.
#[derive(Clone, Debug)]
pub struct InMemoryProjectRepo {
    projects: Arc<[Project]>,
}

impl InMemoryProjectRepo {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(projects.len());

        for project in &projects {
            if !ids.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            if project.images.is_empty() {
                return Err(CatalogError::MissingImages(project.id.clone()));
            }
            if !project.has_chronological_dates() {
                tracing::warn!(
                    project = %project.id,
                    created = %project.date_created,
                    updated = %project.date_updated,
                    "Project dates are unparseable or out of order"
                );
            }
        }

        tracing::info!("Project catalog loaded with {} entries", projects.len());

        Ok(InMemoryProjectRepo { projects: projects.into() })
    }
}

impl ProjectRepository for InMemoryProjectRepo {
    fn all_projects(&self) -> &[Project] {
        &self.projects
    }
}
