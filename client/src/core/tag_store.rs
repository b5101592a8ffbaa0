use crate::core::api::TagsApi;
use crate::core::models::Tag;
use std::collections::BTreeMap;
use tracing::error;

/// Bucket label for tags carrying no category.
pub const UNCATEGORIZED: &str = "uncategorized";

const FETCH_LIMIT: usize = 100;

/// Cache of the tag vocabulary and the known category names.
pub struct TagStore<A: TagsApi> {
    client: A,
    tags: Vec<Tag>,
    categories: Vec<String>,
    loading: bool,
    last_error: Option<String>,
}

impl<A: TagsApi> TagStore<A> {
    pub fn new(client: A) -> Self {
        Self {
            client,
            tags: Vec::new(),
            categories: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    pub async fn fetch_tags(&mut self, category: Option<&str>) {
        self.loading = true;
        self.last_error = None;

        match self.client.list(category, 0, FETCH_LIMIT).await {
            Ok(tags) => self.tags = tags,
            Err(err) => {
                error!("Fetching tags failed: {err}");
                self.last_error = Some("Failed to fetch tags".to_string());
            }
        }

        self.loading = false;
    }

    pub async fn fetch_categories(&mut self) {
        self.loading = true;
        self.last_error = None;

        match self.client.categories().await {
            Ok(categories) => self.categories = categories,
            Err(err) => {
                error!("Fetching tag categories failed: {err}");
                self.last_error = Some("Failed to fetch tag categories".to_string());
            }
        }

        self.loading = false;
    }

    pub async fn create_tag(&mut self, name: &str, category: Option<&str>) -> Option<Tag> {
        self.loading = true;
        self.last_error = None;

        let created = match self.client.create(name, category).await {
            Ok(tag) => {
                self.tags.push(tag.clone());
                Some(tag)
            }
            Err(err) => {
                error!("Creating tag failed: {err}");
                self.last_error = Some("Failed to create tag".to_string());
                None
            }
        };

        self.loading = false;
        created
    }

    /// Groups the cached tags by category, recomputed from the cache
    /// on every call. Every known category gets a bucket even when
    /// empty, the fixed fallback bucket is always present, and a tag
    /// naming a category the backend never listed still gets its own
    /// bucket.
    pub fn tags_by_category(&self) -> BTreeMap<&str, Vec<&Tag>> {
        let mut grouped: BTreeMap<&str, Vec<&Tag>> = BTreeMap::new();

        for category in &self.categories {
            grouped.entry(category.as_str()).or_default();
        }
        grouped.entry(UNCATEGORIZED).or_default();

        for tag in &self.tags {
            let bucket = tag
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(UNCATEGORIZED);
            grouped.entry(bucket).or_default().push(tag);
        }

        grouped
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
