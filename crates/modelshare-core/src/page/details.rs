//! Derived display data for the model page.

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::format::{format_date, format_kilobytes, split_uppercase};
use crate::models::{Model, ModelId, ModelVersion, UserSummary, VersionId};
use crate::routes::Route;

/// One row of the details table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Details table: type, downloads, last update, versions, tags, trained
/// words and uploader.
pub fn details_table(model: &Model) -> Vec<DetailRow> {
    let row = |label, value: String| DetailRow { label, value };
    let downloads = model
        .rank
        .as_ref()
        .map(|rank| rank.download_count_all_time)
        .unwrap_or(0);

    vec![
        row("Type", split_uppercase(model.model_type.as_str())),
        row("Downloads", format_count(downloads)),
        row("Last Update", format_date(&model.updated_at)),
        row("Versions", model.model_versions.len().to_string()),
        row(
            "Tags",
            model
                .tags
                .iter()
                .map(|tag| tag.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        row("Trained Words", model.trained_words.join(", ")),
        row("Uploaded By", display_name(&model.user)),
    ]
}

/// Group digits in thousands: `1234567` -> `1,234,567`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn display_name(user: &UserSummary) -> String {
    user.username
        .clone()
        .or_else(|| user.name.clone())
        .unwrap_or_else(|| format!("User {}", user.id))
}

/// Download button for a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLink {
    pub href: String,
    pub label: String,
    pub sub_label: String,
}

impl DownloadLink {
    pub fn for_version(version: &ModelVersion) -> Self {
        Self {
            href: Route::Download {
                version_id: version.id,
            }
            .path(),
            label: format!("Download ({})", format_kilobytes(version.size_kb)),
            sub_label: format!("{} ({})", version.name, format_date(&version.created_at)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GalleryAlign {
    Start,
    Center,
}

/// Carousel layout for a version's images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryLayout {
    pub with_controls: bool,
    pub align: GalleryAlign,
}

impl GalleryLayout {
    pub fn for_image_count(count: usize) -> Self {
        if count > CatalogConfig::GALLERY_CONTROLS_THRESHOLD {
            Self {
                with_controls: true,
                align: GalleryAlign::Start,
            }
        } else {
            Self {
                with_controls: false,
                align: GalleryAlign::Center,
            }
        }
    }
}

/// Initial values for the add-review dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPrefill {
    pub title: String,
    pub model_id: ModelId,
    /// Preselected only when there is exactly one version to choose.
    pub model_version_id: Option<VersionId>,
    pub version_choices: Vec<(VersionId, String)>,
}

impl ReviewPrefill {
    pub fn for_model(model: &Model) -> Self {
        let model_version_id = match model.model_versions.as_slice() {
            [only] => Some(only.id),
            _ => None,
        };
        Self {
            title: format!("Reviewing {}", model.name),
            model_id: model.id,
            model_version_id,
            version_choices: model
                .model_versions
                .iter()
                .map(|v| (v.id, v.name.clone()))
                .collect(),
        }
    }
}
