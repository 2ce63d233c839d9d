//! Project Queries

use crate::domain::project::{Project, ProjectStatusCount};

/// Count projects per status. The counts always add up to `projects.len()`.
pub fn project_status_count(projects: &[Project]) -> ProjectStatusCount {
    projects
        .iter()
        .fold(ProjectStatusCount::default(), |mut count, project| {
            count.record(project.status);
            count
        })
}

/// First project with the given id
pub fn project_by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::ProjectStatus;
    use crate::infra::mock::mock_projects;

    #[test]
    fn test_status_count_sums_to_len() {
        let projects = mock_projects();
        let count = project_status_count(projects);

        assert_eq!(count.total(), projects.len());
        for status in [ProjectStatus::Complete, ProjectStatus::Running, ProjectStatus::Setup] {
            let expected = projects.iter().filter(|p| p.status == status).count();
            assert_eq!(count.get(status), expected, "{}", status.as_str());
        }
    }

    #[test]
    fn test_status_count_empty() {
        assert_eq!(project_status_count(&[]), ProjectStatusCount::default());
    }

    #[test]
    fn test_project_by_id() {
        let projects = mock_projects();
        for project in projects {
            assert_eq!(project_by_id(projects, &project.id), Some(project));
        }
        assert_eq!(project_by_id(projects, "does-not-exist"), None);
    }
}
