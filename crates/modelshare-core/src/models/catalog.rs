//! Catalogue enums and listing defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ModelShareError;

/// Kind of a shared model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    Checkpoint,
    TextualInversion,
    Hypernetwork,
    AestheticGradient,
    #[serde(rename = "LORA")]
    Lora,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Checkpoint => "Checkpoint",
            ModelType::TextualInversion => "TextualInversion",
            ModelType::Hypernetwork => "Hypernetwork",
            ModelType::AestheticGradient => "AestheticGradient",
            ModelType::Lora => "LORA",
        }
    }
}

impl FromStr for ModelType {
    type Err = ModelShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Checkpoint" => Ok(ModelType::Checkpoint),
            "TextualInversion" => Ok(ModelType::TextualInversion),
            "Hypernetwork" => Ok(ModelType::Hypernetwork),
            "AestheticGradient" => Ok(ModelType::AestheticGradient),
            "LORA" => Ok(ModelType::Lora),
            _ => Err(ModelShareError::InvalidParams {
                message: format!("Unknown model type: {}", s),
            }),
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelSort {
    HighestRated,
    MostDownloaded,
    Newest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricTimeframe {
    Day,
    Week,
    Month,
    Year,
    AllTime,
}

/// Default sort and period applied to model listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFilterDefaults {
    pub sort: ModelSort,
    pub period: MetricTimeframe,
}

impl Default for ModelFilterDefaults {
    fn default() -> Self {
        Self {
            sort: ModelSort::HighestRated,
            period: MetricTimeframe::AllTime,
        }
    }
}
