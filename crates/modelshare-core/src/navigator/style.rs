//! Style configuration for the version list.
//!
//! Passed into the navigator at construction; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::config::NavigatorConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonVariant {
    Filled,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorStyle {
    pub color_scheme: ColorScheme,
    pub active_color: String,
    pub inactive_color: String,
    pub warning_color: String,
    pub destructive_color: String,
    pub item_spacing: u16,
    pub icon_size: u16,
}

impl Default for NavigatorStyle {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            active_color: "blue".to_string(),
            inactive_color: "gray".to_string(),
            warning_color: "yellow".to_string(),
            destructive_color: "red".to_string(),
            item_spacing: NavigatorConfig::ITEM_SPACING,
            icon_size: NavigatorConfig::ICON_SIZE,
        }
    }
}

impl NavigatorStyle {
    pub fn dark() -> Self {
        Self {
            color_scheme: ColorScheme::Dark,
            ..Self::default()
        }
    }

    /// Active buttons are always filled; inactive ones are filled only on
    /// dark backgrounds.
    pub fn variant(&self, active: bool) -> ButtonVariant {
        if active || self.color_scheme == ColorScheme::Dark {
            ButtonVariant::Filled
        } else {
            ButtonVariant::Light
        }
    }

    pub fn color(&self, active: bool) -> &str {
        if active {
            &self.active_color
        } else {
            &self.inactive_color
        }
    }
}
