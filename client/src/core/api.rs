use crate::core::models::{Material, MaterialUpdate, Project, Tag};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the backend answered but the payload was not the
    /// expected shape (e.g. an object where a collection was expected).
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}

// ── Resource contracts ───────────────────────────────────────────
//
// One trait per backend resource, consumed by the matching store.
// Every operation maps to exactly one backend call. These are the
// fallible tier; the concrete clients additionally expose safe-default
// wrappers that log and swallow any error.

#[async_trait]
pub trait MaterialsApi: Send + Sync {
    /// One page of materials matching the search text and tag filter.
    /// The query string repeats `tag_ids` once per value.
    async fn list(
        &self,
        search: &str,
        tag_ids: &[i64],
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Material>, ApiError>;

    async fn get(&self, id: i64) -> Result<Material, ApiError>;

    /// Partial update; returns the full entity as the backend stored it.
    async fn update(&self, id: i64, patch: &MaterialUpdate) -> Result<Material, ApiError>;

    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    async fn attach_tags(&self, material_id: i64, tag_ids: &[i64]) -> Result<(), ApiError>;

    async fn detach_tag(&self, material_id: i64, tag_id: i64) -> Result<(), ApiError>;
}

#[async_trait]
pub trait TagsApi: Send + Sync {
    async fn list(
        &self,
        category: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Tag>, ApiError>;

    async fn categories(&self) -> Result<Vec<String>, ApiError>;

    async fn create(&self, name: &str, category: Option<&str>) -> Result<Tag, ApiError>;
}

#[async_trait]
pub trait ProjectsApi: Send + Sync {
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Project>, ApiError>;

    async fn get(&self, id: i64) -> Result<Project, ApiError>;

    async fn create(&self, name: &str, description: Option<&str>) -> Result<Project, ApiError>;

    async fn list_materials(
        &self,
        project_id: i64,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Material>, ApiError>;

    async fn attach_materials(
        &self,
        project_id: i64,
        material_ids: &[i64],
        notes: Option<&str>,
    ) -> Result<(), ApiError>;
}
