//! Model and model version types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ModelId, ModelType, UserId, UserSummary, VersionId};

/// A downloadable artifact attached to a version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFile {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub size_kb: f64,
}

/// A showcase post attached to a version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
}

/// A gallery image attached to a version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}

/// A named, ordered release of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersion {
    pub id: VersionId,
    pub model_id: ModelId,
    pub name: String,
    #[serde(default)]
    pub files: Vec<ModelFile>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub size_kb: f64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Aggregated model metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRank {
    pub download_count_all_time: u64,
    pub rating_all_time: f64,
    pub rating_count_all_time: u64,
}

/// A model with its versions in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: ModelId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(default)]
    pub trained_words: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummary,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub rank: Option<ModelRank>,
    pub model_versions: Vec<ModelVersion>,
}

impl Model {
    /// The most recently created version.
    pub fn latest_version(&self) -> Option<&ModelVersion> {
        self.model_versions.last()
    }

    pub fn version(&self, id: VersionId) -> Option<&ModelVersion> {
        self.model_versions.iter().find(|v| v.id == id)
    }
}

/// Input for creating a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModel {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(default)]
    pub trained_words: Vec<String>,
    pub user_id: UserId,
    #[serde(default)]
    pub tags: Vec<NewTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Input for creating a version together with its attachments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModelVersion {
    pub name: String,
    #[serde(default)]
    pub size_kb: f64,
    #[serde(default)]
    pub files: Vec<NewModelFile>,
    /// Post titles.
    #[serde(default)]
    pub posts: Vec<Option<String>>,
    #[serde(default)]
    pub images: Vec<NewImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModelFile {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub size_kb: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewImage {
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}
