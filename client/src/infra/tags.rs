use crate::core::api::{ApiError, TagsApi};
use crate::core::models::Tag;
use crate::infra::http::Transport;
use async_trait::async_trait;
use serde::Serialize;
use tracing::error;

/// Client for the `/tags/` resource.
#[derive(Clone)]
pub struct TagsClient {
    transport: Transport,
}

#[derive(Serialize)]
struct NewTag<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

impl TagsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl TagsApi for TagsClient {
    async fn list(
        &self,
        category: Option<&str>,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Tag>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }
        query.push(("skip", skip.to_string()));
        query.push(("limit", limit.to_string()));

        self.transport.get_json("/tags/", &query).await
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.transport.get_json("/tags/categories", &[]).await
    }

    async fn create(&self, name: &str, category: Option<&str>) -> Result<Tag, ApiError> {
        self.transport
            .post_json("/tags/", &NewTag { name, category })
            .await
    }
}

// Safe tier.

impl TagsClient {
    pub async fn get_all(&self, category: Option<&str>, skip: usize, limit: usize) -> Vec<Tag> {
        match self.list(category, skip, limit).await {
            Ok(tags) => tags,
            Err(err) => {
                error!("Error fetching tags: {err}");
                Vec::new()
            }
        }
    }

    pub async fn get_categories(&self) -> Vec<String> {
        match self.categories().await {
            Ok(categories) => categories,
            Err(err) => {
                error!("Error fetching tag categories: {err}");
                Vec::new()
            }
        }
    }

    pub async fn create_tag(&self, name: &str, category: Option<&str>) -> Option<Tag> {
        match self.create(name, category).await {
            Ok(tag) => Some(tag),
            Err(err) => {
                error!("Error creating tag: {err}");
                None
            }
        }
    }
}
