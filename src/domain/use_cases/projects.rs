use crate::{
    entities::project::{CatalogStats, CategoryCount, Project, ProjectFilter, ProjectStatus},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects matching the filter, in catalog order
    pub fn list_projects(&self, filter: &ProjectFilter) -> Vec<&Project> {
        match (&filter.category, &filter.status) {
            (None, None) => self.project_repo.all_projects().iter().collect(),
            (Some(category), None) => self.project_repo.filter_by_category(category),
            (None, Some(status)) => self.project_repo.filter_by_status(status),
            (Some(category), Some(status)) => self
                .project_repo
                .filter_by_category(category)
                .into_iter()
                .filter(|project| &project.status == status)
                .collect(),
        }
    }

    /// Retrieves a project by its id, mapping a miss to `NotFound`
    pub fn get_project_by_id(&self, id: &str) -> Result<&Project, AppError> {
        self.project_repo
            .find_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Project '{}' not found", id)))
    }

    /// First `count` projects of the catalog
    pub fn featured_projects(&self, count: usize) -> Vec<&Project> {
        self.project_repo.all_projects().iter().take(count).collect()
    }

    /// Counts over the whole catalog, independent of any filter
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            completed: self.project_repo.filter_by_status(&ProjectStatus::Completed).len(),
            in_progress: self.project_repo.filter_by_status(&ProjectStatus::InProgress).len(),
            total: self.project_repo.count_projects(),
        }
    }

    pub fn categories(&self) -> Vec<CategoryCount<'_>> {
        self.project_repo
            .categories()
            .into_iter()
            .map(|name| CategoryCount {
                name,
                count: self.project_repo.filter_by_category(name).len(),
            })
            .collect()
    }

    pub fn all_projects(&self) -> &[Project] {
        self.project_repo.all_projects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::seed_projects, repositories::in_memory::InMemoryProjectRepo};

    fn handler() -> ProjectHandler<InMemoryProjectRepo> {
        ProjectHandler::new(InMemoryProjectRepo::new(seed_projects()).unwrap())
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let handler = handler();
        assert!(matches!(
            handler.get_project_by_id("does-not-exist"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(handler.get_project_by_id("sam").unwrap().id, "sam");
    }

    #[test]
    fn unfiltered_listing_is_whole_catalog() {
        let handler = handler();
        let listed = handler.list_projects(&ProjectFilter::default());
        assert_eq!(listed.len(), handler.all_projects().len());
    }

    #[test]
    fn combined_filters_intersect() {
        let handler = handler();
        let filter = ProjectFilter {
            category: Some("Game Development".into()),
            status: Some(ProjectStatus::Completed),
        };
        let ids: Vec<&str> = handler.list_projects(&filter).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["republic-of-gaming", "sam"]);

        let none = ProjectFilter {
            category: Some("App Development".into()),
            status: Some(ProjectStatus::Completed),
        };
        assert!(handler.list_projects(&none).is_empty());
    }

    #[test]
    fn stats_ignore_unrecognized_statuses() {
        let stats = handler().stats();
        assert_eq!(stats, CatalogStats { completed: 2, in_progress: 0, total: 3 });
    }

    #[test]
    fn featured_is_capped_by_catalog_size() {
        let handler = handler();
        assert_eq!(handler.featured_projects(2).len(), 2);
        assert_eq!(handler.featured_projects(10).len(), 3);
    }

    #[test]
    fn category_counts_cover_catalog() {
        let handler = handler();
        let categories = handler.categories();
        assert_eq!(
            categories,
            vec![
                CategoryCount { name: "Game Development", count: 2 },
                CategoryCount { name: "App Development", count: 1 },
            ]
        );
    }
}
