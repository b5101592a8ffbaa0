use crate::core::api::ProjectsApi;
use crate::core::models::Project;
use tracing::error;

const FETCH_LIMIT: usize = 100;

/// Cache of the project list. No pagination: a fetch replaces the
/// whole cache, creating appends to it.
pub struct ProjectStore<A: ProjectsApi> {
    client: A,
    projects: Vec<Project>,
    loading: bool,
    last_error: Option<String>,
}

impl<A: ProjectsApi> ProjectStore<A> {
    pub fn new(client: A) -> Self {
        Self {
            client,
            projects: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    pub async fn fetch_projects(&mut self) {
        self.loading = true;
        self.last_error = None;

        match self.client.list(0, FETCH_LIMIT).await {
            Ok(projects) => self.projects = projects,
            Err(err) => {
                error!("Fetching projects failed: {err}");
                self.last_error = Some("Failed to fetch projects".to_string());
            }
        }

        self.loading = false;
    }

    /// Looks a single project up without touching the cached list.
    pub async fn get_project(&mut self, id: i64) -> Option<Project> {
        self.loading = true;
        self.last_error = None;

        let found = match self.client.get(id).await {
            Ok(project) => Some(project),
            Err(err) => {
                error!("Fetching project {id} failed: {err}");
                self.last_error = Some(format!("Failed to fetch project {id}"));
                None
            }
        };

        self.loading = false;
        found
    }

    pub async fn create_project(&mut self, name: &str, description: Option<&str>) -> Option<Project> {
        self.loading = true;
        self.last_error = None;

        let created = match self.client.create(name, description).await {
            Ok(project) => {
                self.projects.push(project.clone());
                Some(project)
            }
            Err(err) => {
                error!("Creating project failed: {err}");
                self.last_error = Some("Failed to create project".to_string());
                None
            }
        };

        self.loading = false;
        created
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::ApiError;
    use crate::core::models::Material;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockProjects {
        list_replies: Mutex<VecDeque<Result<Vec<Project>, ApiError>>>,
        get_replies: Mutex<VecDeque<Result<Project, ApiError>>>,
        create_replies: Mutex<VecDeque<Result<Project, ApiError>>>,
    }

    #[async_trait]
    impl ProjectsApi for MockProjects {
        async fn list(&self, _skip: usize, _limit: usize) -> Result<Vec<Project>, ApiError> {
            self.list_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_string())))
        }

        async fn get(&self, _id: i64) -> Result<Project, ApiError> {
            self.get_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_string())))
        }

        async fn create(
            &self,
            _name: &str,
            _description: Option<&str>,
        ) -> Result<Project, ApiError> {
            self.create_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_string())))
        }

        async fn list_materials(
            &self,
            _project_id: i64,
            _skip: usize,
            _limit: usize,
        ) -> Result<Vec<Material>, ApiError> {
            Err(ApiError::Network("no scripted reply".to_string()))
        }

        async fn attach_materials(
            &self,
            _project_id: i64,
            _material_ids: &[i64],
            _notes: Option<&str>,
        ) -> Result<(), ApiError> {
            Err(ApiError::Network("no scripted reply".to_string()))
        }
    }

    fn project(id: i64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: None,
            created_date: "2024-02-11T09:30:00".to_string(),
            material_count: 0,
        }
    }

    #[tokio::test]
    async fn test_fetch_replaces_cache_wholesale() {
        let mock = MockProjects::default();
        {
            let mut replies = mock.list_replies.lock().unwrap();
            replies.push_back(Ok(vec![project(1, "pilot")]));
            replies.push_back(Ok(vec![project(2, "trailer"), project(3, "recap")]));
        }

        let mut store = ProjectStore::new(mock);
        store.fetch_projects().await;
        assert_eq!(store.projects().len(), 1);

        store.fetch_projects().await;
        assert_eq!(store.projects().len(), 2);
        assert_eq!(store.projects()[0].id, 2);
    }

    #[tokio::test]
    async fn test_create_appends_to_cache() {
        let mock = MockProjects::default();
        mock.list_replies
            .lock()
            .unwrap()
            .push_back(Ok(vec![project(1, "pilot")]));
        mock.create_replies
            .lock()
            .unwrap()
            .push_back(Ok(project(2, "trailer")));

        let mut store = ProjectStore::new(mock);
        store.fetch_projects().await;

        let created = store.create_project("trailer", None).await;

        assert_eq!(created.map(|p| p.id), Some(2));
        assert_eq!(store.projects().len(), 2);
    }

    #[tokio::test]
    async fn test_create_failure_sets_error_and_keeps_cache() {
        let mock = MockProjects::default();
        mock.list_replies
            .lock()
            .unwrap()
            .push_back(Ok(vec![project(1, "pilot")]));
        mock.create_replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Status(422)));

        let mut store = ProjectStore::new(mock);
        store.fetch_projects().await;

        assert_eq!(store.create_project("", None).await, None);
        assert_eq!(store.last_error(), Some("Failed to create project"));
        assert_eq!(store.projects().len(), 1);
    }

    #[tokio::test]
    async fn test_get_project_failure_records_error() {
        let mock = MockProjects::default();
        mock.get_replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Status(404)));

        let mut store = ProjectStore::new(mock);
        assert_eq!(store.get_project(12).await, None);
        assert_eq!(store.last_error(), Some("Failed to fetch project 12"));
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_cache() {
        let mock = MockProjects::default();
        {
            let mut replies = mock.list_replies.lock().unwrap();
            replies.push_back(Ok(vec![project(1, "pilot")]));
            replies.push_back(Err(ApiError::Network("connection refused".to_string())));
        }

        let mut store = ProjectStore::new(mock);
        store.fetch_projects().await;
        store.fetch_projects().await;

        assert_eq!(store.last_error(), Some("Failed to fetch projects"));
        assert_eq!(store.projects().len(), 1);
    }
}
