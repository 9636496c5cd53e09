use crate::entities::project::{Project, ProjectStatus};

/// Read-only queries over the project catalog.
///
/// Every method preserves catalog order. Lookups signal a miss with `None`;
/// turning that into a not-found outcome is the caller's decision.
pub trait ProjectRepository: Sync + Send {
    fn all_projects(&self) -> &[Project];

    /// Exact, case-sensitive match on `id`.
    fn find_by_id(&self, id: &str) -> Option<&Project> {
        self.all_projects().iter().find(|project| project.id == id)
    }

    fn filter_by_category(&self, category: &str) -> Vec<&Project> {
        self.all_projects()
            .iter()
            .filter(|project| project.category == category)
            .collect()
    }

    fn filter_by_status(&self, status: &ProjectStatus) -> Vec<&Project> {
        self.all_projects()
            .iter()
            .filter(|project| &project.status == status)
            .collect()
    }

    /// Distinct categories in order of first appearance.
    fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for project in self.all_projects() {
            if !seen.contains(&project.category.as_str()) {
                seen.push(&project.category);
            }
        }
        seen
    }

    fn count_projects(&self) -> usize {
        self.all_projects().len()
    }
}
