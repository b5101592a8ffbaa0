use serde::{Deserialize, Serialize};

// ── Catalog entities ─────────────────────────────────────────────

/// A tag attached to materials. Shared across materials (many-to-many);
/// `category` is empty for tags that only live in the fallback bucket.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub confidence: f32,
    #[serde(default)]
    pub usage_count: Option<u32>,
}

/// A still frame extracted from a source video, the unit the catalog
/// manages. `timestamp` is the offset into `source_video` in seconds.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Material {
    pub id: i64,
    pub source_video: String,
    pub frame_path: String,
    pub timestamp: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub added_date: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub projects: Option<Vec<i64>>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_date: String,
    #[serde(default)]
    pub material_count: u32,
}

/// Outcome of a video ingestion job. Transient; never cached.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ProcessingResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub frames_count: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProcessingResult {
    /// A failure value carrying only a generic message, for when the
    /// backend could not be reached at all.
    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            video_path: None,
            frames_count: None,
            error: Some(error.to_string()),
        }
    }
}

// ── Partial update ───────────────────────────────────────────────

/// Patch for `PUT /materials/{id}`. Fields left as `None` are omitted
/// from the request body and stay untouched server-side. Tag and project
/// membership are managed through the association endpoints, never here.
#[derive(Debug, Serialize, PartialEq, Clone, Default)]
pub struct MaterialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
