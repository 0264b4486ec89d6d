//! Page routes emitted as navigation requests.

use serde::{Deserialize, Serialize};

use crate::config::RoutesConfig;
use crate::models::{ModelId, VersionId};

/// Step of the version completion wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    /// Upload files.
    Files,
    /// Attach showcase posts.
    Posts,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Files => 2,
            WizardStep::Posts => 3,
        }
    }
}

/// A full-page navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Route {
    #[serde(rename_all = "camelCase")]
    Wizard {
        model_id: ModelId,
        version_id: VersionId,
        step: WizardStep,
    },
    #[serde(rename_all = "camelCase")]
    EditVersion {
        model_id: ModelId,
        version_id: VersionId,
    },
    #[serde(rename_all = "camelCase")]
    EditModel { model_id: ModelId },
    #[serde(rename_all = "camelCase")]
    Download { version_id: VersionId },
    Home,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Wizard {
                model_id,
                version_id,
                step,
            } => format!(
                "{}/wizard?step={}",
                version_base(*model_id, *version_id),
                step.number()
            ),
            Route::EditVersion {
                model_id,
                version_id,
            } => format!("{}/edit", version_base(*model_id, *version_id)),
            Route::EditModel { model_id } => {
                format!("{}/{}?edit=true", RoutesConfig::MODELS_PREFIX, model_id)
            }
            Route::Download { version_id } => {
                format!("{}/{}", RoutesConfig::DOWNLOAD_PREFIX, version_id)
            }
            Route::Home => RoutesConfig::HOME.to_string(),
        }
    }
}

fn version_base(model_id: ModelId, version_id: VersionId) -> String {
    format!(
        "{}/{}/{}/{}",
        RoutesConfig::MODELS_V2_PREFIX,
        model_id,
        RoutesConfig::MODEL_VERSIONS_SEGMENT,
        version_id
    )
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
