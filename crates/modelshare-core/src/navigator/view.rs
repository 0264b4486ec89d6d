//! Render output of the version navigator.

use serde::{Deserialize, Serialize};

use super::completeness::Completeness;
use super::menu::MenuEntry;
use super::style::ButtonVariant;
use crate::models::VersionId;

/// One button in the version list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionItemView {
    pub id: VersionId,
    pub label: String,
    pub active: bool,
    pub completeness: Completeness,
    /// Warning adornment for incomplete versions.
    pub show_warning: bool,
    pub variant: ButtonVariant,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_color: Option<String>,
    /// Present only when the caller asked for menus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<MenuEntry>>,
}

/// The whole horizontally scrollable list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionListView {
    pub items: Vec<VersionItemView>,
    pub show_left_arrow: bool,
    pub show_right_arrow: bool,
    pub spacing: u16,
}

impl VersionListView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: VersionId) -> Option<&VersionItemView> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn active_item(&self) -> Option<&VersionItemView> {
        self.items.iter().find(|item| item.active)
    }
}
