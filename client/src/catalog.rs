use crate::core::material_store::MaterialStore;
use crate::core::project_store::ProjectStore;
use crate::core::tag_store::TagStore;
use crate::infra::http::Transport;
use crate::infra::materials::MaterialsClient;
use crate::infra::processing::ProcessingClient;
use crate::infra::projects::ProjectsClient;
use crate::infra::tags::TagsClient;

pub const BASE_URL_ENV: &str = "FRAMECAT_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Reads the backend address from the environment, after loading
    /// .env if one is present. Missing configuration falls back to the
    /// local development backend.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// One store per catalog resource plus the ingestion client, all
/// talking to the same backend. Owns every piece of client state;
/// dropping it is the only teardown there is.
pub struct Catalog {
    pub materials: MaterialStore<MaterialsClient>,
    pub tags: TagStore<TagsClient>,
    pub projects: ProjectStore<ProjectsClient>,
    pub processing: ProcessingClient,
}

impl Catalog {
    pub fn new(config: &Config) -> Self {
        let transport = Transport::new(&config.base_url);

        Self {
            materials: MaterialStore::new(MaterialsClient::new(transport.clone())),
            tags: TagStore::new(TagsClient::new(transport.clone())),
            projects: ProjectStore::new(ProjectsClient::new(transport.clone())),
            processing: ProcessingClient::new(transport),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&Config::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Material, Project};
    use crate::infra::testutil::spawn_backend;
    use axum::routing::get;
    use axum::{Json, Router};

    #[test]
    fn test_config_defaults_to_local_backend() {
        assert_eq!(Config::default().base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_catalog_stores_share_one_backend() {
        let router = Router::new()
            .route(
                "/materials/",
                get(|| async {
                    Json(vec![Material {
                        id: 1,
                        source_video: "clips/a.mp4".to_string(),
                        frame_path: "frames/1.jpg".to_string(),
                        timestamp: 0.0,
                        description: None,
                        added_date: "2024-01-01T00:00:00".to_string(),
                        tags: Vec::new(),
                        projects: None,
                    }])
                }),
            )
            .route(
                "/tags/categories",
                get(|| async { Json(vec!["lighting".to_string()]) }),
            )
            .route("/projects/", get(|| async { Json(Vec::<Project>::new()) }));
        let base = spawn_backend(router).await;

        let mut catalog = Catalog::new(&Config { base_url: base });
        catalog.materials.fetch_materials("", &[], true).await;
        catalog.tags.fetch_categories().await;
        catalog.projects.fetch_projects().await;

        assert_eq!(catalog.materials.materials().len(), 1);
        assert_eq!(catalog.materials.total_items(), 1);
        assert_eq!(catalog.tags.categories(), ["lighting"]);
        assert!(catalog.projects.projects().is_empty());
        assert_eq!(catalog.materials.last_error(), None);
    }
}
