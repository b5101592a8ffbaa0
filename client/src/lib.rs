//! Typed client for a frame-catalog backend. Per-resource HTTP
//! clients share one transport; in-memory stores cache listings,
//! track the paging cursor, and absorb backend failures into
//! readable error state instead of panics.

pub mod catalog;
pub mod core;
pub mod infra;

pub use crate::catalog::{BASE_URL_ENV, Catalog, Config, DEFAULT_BASE_URL};
pub use crate::core::api::{ApiError, MaterialsApi, ProjectsApi, TagsApi};
pub use crate::core::material_store::MaterialStore;
pub use crate::core::models::{Material, MaterialUpdate, ProcessingResult, Project, Tag};
pub use crate::core::project_store::ProjectStore;
pub use crate::core::tag_store::{TagStore, UNCATEGORIZED};
pub use crate::infra::http::Transport;
pub use crate::infra::materials::MaterialsClient;
pub use crate::infra::processing::ProcessingClient;
pub use crate::infra::projects::ProjectsClient;
pub use crate::infra::tags::TagsClient;
