//! Per-version contextual menu.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ModelShareError;
use crate::models::ModelVersion;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuAction {
    DeleteVersion,
    EditVersion,
    /// Reserved entry. Activating it does nothing.
    EditCarousel,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::DeleteVersion => "Delete version",
            MenuAction::EditVersion => "Edit version",
            MenuAction::EditCarousel => "Edit carousel",
        }
    }
}

impl FromStr for MenuAction {
    type Err = ModelShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deleteVersion" | "delete_version" => Ok(MenuAction::DeleteVersion),
            "editVersion" | "edit_version" => Ok(MenuAction::EditVersion),
            "editCarousel" | "edit_carousel" => Ok(MenuAction::EditCarousel),
            _ => Err(ModelShareError::InvalidParams {
                message: format!("Unknown menu action: {}", s),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: String,
    pub destructive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Whether a version may be deleted from a list of `version_count`.
///
/// The last remaining version can never be deleted.
pub fn can_delete(version_count: usize) -> bool {
    version_count > 1
}

/// Menu entries for one version, in display order.
pub fn entries(version: &ModelVersion, version_count: usize) -> Vec<MenuEntry> {
    let mut entries = Vec::with_capacity(3);
    if can_delete(version_count) {
        entries.push(MenuEntry {
            action: MenuAction::DeleteVersion,
            label: MenuAction::DeleteVersion.label().to_string(),
            destructive: true,
            href: None,
        });
    }
    entries.push(MenuEntry {
        action: MenuAction::EditVersion,
        label: MenuAction::EditVersion.label().to_string(),
        destructive: false,
        href: Some(edit_route(version).path()),
    });
    entries.push(MenuEntry {
        action: MenuAction::EditCarousel,
        label: MenuAction::EditCarousel.label().to_string(),
        destructive: false,
        href: None,
    });
    entries
}

pub(crate) fn edit_route(version: &ModelVersion) -> Route {
    Route::EditVersion {
        model_id: version.model_id,
        version_id: version.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn version() -> ModelVersion {
        ModelVersion {
            id: 5,
            model_id: 2,
            name: "v5".into(),
            files: Vec::new(),
            posts: Vec::new(),
            images: Vec::new(),
            size_kb: 0.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_single_version_has_no_delete() {
        let actions: Vec<_> = entries(&version(), 1).iter().map(|e| e.action).collect();
        assert_eq!(actions, vec![MenuAction::EditVersion, MenuAction::EditCarousel]);
    }

    #[test]
    fn test_multiple_versions_offer_delete_first() {
        let entries = entries(&version(), 2);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].action, MenuAction::DeleteVersion);
        assert!(entries[0].destructive);
        assert_eq!(
            entries[1].href.as_deref(),
            Some("/models/v2/2/model-versions/5/edit")
        );
        assert_eq!(entries[2].label, "Edit carousel");
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!(
            "deleteVersion".parse::<MenuAction>().unwrap(),
            MenuAction::DeleteVersion
        );
        assert_eq!(
            "edit_carousel".parse::<MenuAction>().unwrap(),
            MenuAction::EditCarousel
        );
        let err = "rename".parse::<MenuAction>().unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32602);
    }
}
