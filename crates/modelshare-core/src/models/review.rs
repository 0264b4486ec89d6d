//! Review listing types.
//!
//! Reviews are owned by the data service; this crate only lists them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ModelId, ReviewId, UserId, VersionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub model_id: ModelId,
    #[serde(default)]
    pub model_version_id: Option<VersionId>,
    pub user_id: UserId,
    pub rating: u8,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub image_count: u32,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub dislike_count: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewFilter {
    #[serde(rename = "nsfw")]
    Nsfw,
    #[serde(rename = "includesImages")]
    IncludesImages,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewSort {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "mostLiked")]
    MostLiked,
    #[serde(rename = "mostDisliked")]
    MostDisliked,
}

/// Review listing request for one model.
///
/// NSFW reviews are only included when [`ReviewFilter::Nsfw`] is present;
/// [`ReviewFilter::IncludesImages`] restricts the list to reviews with images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    pub model_id: ModelId,
    #[serde(default)]
    pub filter_by: Vec<ReviewFilter>,
    #[serde(default)]
    pub sort: ReviewSort,
}

impl ReviewQuery {
    pub fn new(model_id: ModelId) -> Self {
        Self {
            model_id,
            filter_by: Vec::new(),
            sort: ReviewSort::default(),
        }
    }

    pub fn has_filter(&self, filter: ReviewFilter) -> bool {
        self.filter_by.contains(&filter)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub model_id: ModelId,
    #[serde(default)]
    pub model_version_id: Option<VersionId>,
    pub user_id: UserId,
    pub rating: u8,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub image_count: u32,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub dislike_count: u32,
}
