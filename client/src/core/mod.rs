pub mod api;
pub mod material_store;
pub mod models;
pub mod project_store;
pub mod tag_store;
