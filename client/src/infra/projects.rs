use crate::core::api::{ApiError, ProjectsApi};
use crate::core::models::{Material, Project};
use crate::infra::http::Transport;
use async_trait::async_trait;
use serde::Serialize;
use tracing::error;

/// Client for the `/projects/` resource.
#[derive(Clone)]
pub struct ProjectsClient {
    transport: Transport,
}

#[derive(Serialize)]
struct NewProject<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct AttachMaterials<'a> {
    material_ids: &'a [i64],
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

impl ProjectsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl ProjectsApi for ProjectsClient {
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Project>, ApiError> {
        let query = [("skip", skip.to_string()), ("limit", limit.to_string())];
        self.transport.get_json("/projects/", &query).await
    }

    async fn get(&self, id: i64) -> Result<Project, ApiError> {
        self.transport
            .get_json(&format!("/projects/{id}"), &[])
            .await
    }

    async fn create(&self, name: &str, description: Option<&str>) -> Result<Project, ApiError> {
        self.transport
            .post_json("/projects/", &NewProject { name, description })
            .await
    }

    async fn list_materials(
        &self,
        project_id: i64,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Material>, ApiError> {
        let query = [("skip", skip.to_string()), ("limit", limit.to_string())];
        self.transport
            .get_json(&format!("/projects/{project_id}/materials"), &query)
            .await
    }

    async fn attach_materials(
        &self,
        project_id: i64,
        material_ids: &[i64],
        notes: Option<&str>,
    ) -> Result<(), ApiError> {
        self.transport
            .post_unit(
                &format!("/projects/{project_id}/materials"),
                &AttachMaterials {
                    material_ids,
                    notes,
                },
            )
            .await
    }
}

// Safe tier.

impl ProjectsClient {
    pub async fn get_all(&self, skip: usize, limit: usize) -> Vec<Project> {
        match self.list(skip, limit).await {
            Ok(projects) => projects,
            Err(err) => {
                error!("Error fetching projects: {err}");
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Project> {
        match self.get(id).await {
            Ok(project) => Some(project),
            Err(err) => {
                error!("Error fetching project {id}: {err}");
                None
            }
        }
    }

    pub async fn create_project(&self, name: &str, description: Option<&str>) -> Option<Project> {
        match self.create(name, description).await {
            Ok(project) => Some(project),
            Err(err) => {
                error!("Error creating project: {err}");
                None
            }
        }
    }

    pub async fn get_project_materials(
        &self,
        project_id: i64,
        skip: usize,
        limit: usize,
    ) -> Vec<Material> {
        match self.list_materials(project_id, skip, limit).await {
            Ok(materials) => materials,
            Err(err) => {
                error!("Error fetching materials for project {project_id}: {err}");
                Vec::new()
            }
        }
    }

    pub async fn add_materials(
        &self,
        project_id: i64,
        material_ids: &[i64],
        notes: Option<&str>,
    ) -> bool {
        match self.attach_materials(project_id, material_ids, notes).await {
            Ok(()) => true,
            Err(err) => {
                error!("Error adding materials to project {project_id}: {err}");
                false
            }
        }
    }
}
