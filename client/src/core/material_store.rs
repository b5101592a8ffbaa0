use crate::core::api::MaterialsApi;
use crate::core::models::{Material, MaterialUpdate};
use tracing::error;

const PAGE_SIZE: usize = 20;

/// Client-side cache of the materials listing plus the paging cursor
/// driving it. Pagination accumulates: page 0 replaces the cache,
/// later pages append to it.
pub struct MaterialStore<A: MaterialsApi> {
    client: A,
    materials: Vec<Material>,
    loading: bool,
    last_error: Option<String>,
    current_page: usize,
    total_items: usize,
    items_per_page: usize,
    search_query: String,
    selected_tag_ids: Vec<i64>,
}

impl<A: MaterialsApi> MaterialStore<A> {
    pub fn new(client: A) -> Self {
        Self {
            client,
            materials: Vec::new(),
            loading: false,
            last_error: None,
            current_page: 0,
            total_items: 0,
            items_per_page: PAGE_SIZE,
            search_query: String::new(),
            selected_tag_ids: Vec::new(),
        }
    }

    /// Fetches the slice at the current page cursor. `reset` clears the
    /// cache and rewinds the cursor to page 0 first; without it the
    /// fetched page is appended to what is already cached. The search
    /// string and tag filter become the context later page loads reuse.
    pub async fn fetch_materials(&mut self, search: &str, tag_ids: &[i64], reset: bool) {
        if reset {
            self.current_page = 0;
            self.materials.clear();
        }

        self.search_query = search.to_string();
        self.selected_tag_ids = tag_ids.to_vec();

        self.loading = true;
        self.last_error = None;

        let skip = self.current_page * self.items_per_page;
        match self
            .client
            .list(search, tag_ids, skip, self.items_per_page)
            .await
        {
            Ok(page) => {
                let fetched = page.len();
                if reset || self.current_page == 0 {
                    self.materials = page;
                } else {
                    self.materials.extend(page);
                }

                // A short page pins the total exactly. A full page only
                // proves more may exist, so the total becomes a
                // lower-bound estimate one past the fetched window.
                self.total_items = if fetched < self.items_per_page {
                    self.current_page * self.items_per_page + fetched
                } else {
                    (self.current_page + 1) * self.items_per_page + 1
                };
            }
            Err(err) if err.is_decode() => {
                self.last_error = Some("Invalid response format from API".to_string());
                self.materials.clear();
            }
            Err(err) => {
                error!("Fetching materials failed: {err}");
                self.last_error = Some("Failed to fetch materials".to_string());
            }
        }

        self.loading = false;
    }

    /// Advances the cursor and fetches the next slice with the
    /// last-used search context. Does nothing while a fetch is already
    /// in flight.
    pub async fn load_next_page(&mut self) {
        if self.loading {
            return;
        }
        self.current_page += 1;

        let search = self.search_query.clone();
        let tag_ids = self.selected_tag_ids.clone();
        self.fetch_materials(&search, &tag_ids, false).await;
    }

    pub async fn get_material(&mut self, id: i64) -> Option<Material> {
        self.loading = true;
        self.last_error = None;

        let found = match self.client.get(id).await {
            Ok(material) => Some(material),
            Err(err) => {
                error!("Fetching material {id} failed: {err}");
                self.last_error = Some(format!("Failed to fetch material {id}"));
                None
            }
        };

        self.loading = false;
        found
    }

    /// Sends a partial update and swaps the returned entity into the
    /// cache at the matching id.
    pub async fn update_material(&mut self, id: i64, patch: &MaterialUpdate) -> bool {
        self.loading = true;
        self.last_error = None;

        let updated = match self.client.update(id, patch).await {
            Ok(material) => {
                if let Some(entry) = self.materials.iter_mut().find(|m| m.id == id) {
                    *entry = material;
                }
                true
            }
            Err(err) => {
                error!("Updating material {id} failed: {err}");
                self.last_error = Some(format!("Failed to update material {id}"));
                false
            }
        };

        self.loading = false;
        updated
    }

    pub async fn delete_material(&mut self, id: i64) -> bool {
        self.loading = true;
        self.last_error = None;

        let deleted = match self.client.delete(id).await {
            Ok(()) => {
                self.materials.retain(|m| m.id != id);
                self.total_items = self.total_items.saturating_sub(1);
                true
            }
            Err(err) => {
                error!("Deleting material {id} failed: {err}");
                self.last_error = Some(format!("Failed to delete material {id}"));
                false
            }
        };

        self.loading = false;
        deleted
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Known item count. Exact once a short page has been seen,
    /// otherwise an estimate promising at least one more page.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_tag_ids(&self) -> &[i64] {
        &self.selected_tag_ids
    }
}

// ─────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────
