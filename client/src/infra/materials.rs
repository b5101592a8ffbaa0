use crate::core::api::{ApiError, MaterialsApi};
use crate::core::models::{Material, MaterialUpdate};
use crate::infra::http::Transport;
use async_trait::async_trait;
use tracing::error;

/// Client for the `/materials/` resource.
#[derive(Clone)]
pub struct MaterialsClient {
    transport: Transport,
}

impl MaterialsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl MaterialsApi for MaterialsClient {
    async fn list(
        &self,
        search: &str,
        tag_ids: &[i64],
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Material>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        for tag_id in tag_ids {
            query.push(("tag_ids", tag_id.to_string()));
        }
        query.push(("skip", skip.to_string()));
        query.push(("limit", limit.to_string()));

        self.transport.get_json("/materials/", &query).await
    }

    async fn get(&self, id: i64) -> Result<Material, ApiError> {
        self.transport
            .get_json(&format!("/materials/{id}"), &[])
            .await
    }

    async fn update(&self, id: i64, patch: &MaterialUpdate) -> Result<Material, ApiError> {
        self.transport
            .put_json(&format!("/materials/{id}"), patch)
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.transport.delete(&format!("/materials/{id}")).await
    }

    async fn attach_tags(&self, material_id: i64, tag_ids: &[i64]) -> Result<(), ApiError> {
        // The backend expects the ids as a bare JSON array, not wrapped
        // in an object.
        self.transport
            .post_unit(&format!("/materials/{material_id}/tags"), tag_ids)
            .await
    }

    async fn detach_tag(&self, material_id: i64, tag_id: i64) -> Result<(), ApiError> {
        self.transport
            .delete(&format!("/materials/{material_id}/tags/{tag_id}"))
            .await
    }
}

// ─────────────────────────────────────────────────────────────
// Safe tier: log the failure, hand the caller a usable default
// ─────────────────────────────────────────────────────────────

impl MaterialsClient {
    pub async fn get_all(
        &self,
        search: &str,
        tag_ids: &[i64],
        skip: usize,
        limit: usize,
    ) -> Vec<Material> {
        match self.list(search, tag_ids, skip, limit).await {
            Ok(materials) => materials,
            Err(err) => {
                error!("Error fetching materials: {err}");
                Vec::new()
            }
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Material> {
        match self.get(id).await {
            Ok(material) => Some(material),
            Err(err) => {
                error!("Error fetching material {id}: {err}");
                None
            }
        }
    }

    pub async fn update_material(&self, id: i64, patch: &MaterialUpdate) -> Option<Material> {
        match self.update(id, patch).await {
            Ok(material) => Some(material),
            Err(err) => {
                error!("Error updating material {id}: {err}");
                None
            }
        }
    }

    pub async fn delete_material(&self, id: i64) -> bool {
        match self.delete(id).await {
            Ok(()) => true,
            Err(err) => {
                error!("Error deleting material {id}: {err}");
                false
            }
        }
    }

    pub async fn add_tags(&self, material_id: i64, tag_ids: &[i64]) -> bool {
        match self.attach_tags(material_id, tag_ids).await {
            Ok(()) => true,
            Err(err) => {
                error!("Error adding tags to material {material_id}: {err}");
                false
            }
        }
    }

    pub async fn remove_tag(&self, material_id: i64, tag_id: i64) -> bool {
        match self.detach_tag(material_id, tag_id).await {
            Ok(()) => true,
            Err(err) => {
                error!("Error removing tag {tag_id} from material {material_id}: {err}");
                false
            }
        }
    }
}
