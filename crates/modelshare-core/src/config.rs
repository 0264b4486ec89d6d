//! Centralized configuration for ModelShare.
//!
//! Constants for version navigation, route building, networking, storage
//! paths and the model catalogue.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Model Share";
    pub const USER_AGENT: &'static str = "ModelShare/0.1";
}

/// Version navigator behaviour.
pub struct NavigatorConfig;

impl NavigatorConfig {
    /// Horizontal distance covered by one paging activation.
    pub const PAGE_STEP: f64 = 200.0;
    /// Sub-pixel tolerance applied at the right scroll edge.
    pub const EDGE_TOLERANCE: f64 = 1.0;
    /// Gap between version buttons.
    pub const ITEM_SPACING: u16 = 4;
    /// Size of the menu and warning icons.
    pub const ICON_SIZE: u16 = 14;
}

/// Route prefixes for page navigation.
pub struct RoutesConfig;

impl RoutesConfig {
    pub const MODELS_PREFIX: &'static str = "/models";
    pub const MODELS_V2_PREFIX: &'static str = "/models/v2";
    pub const MODEL_VERSIONS_SEGMENT: &'static str = "model-versions";
    pub const DOWNLOAD_PREFIX: &'static str = "/api/download/models";
    pub const HOME: &'static str = "/";
}

/// Network-related configuration for the remote data service.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const RPC_PATH: &'static str = "rpc";
    pub const HEALTH_PATH: &'static str = "health";
}

/// Storage paths.
pub struct PathsConfig;

impl PathsConfig {
    pub const DATA_DIR_NAME: &'static str = "modelshare";
    pub const DATABASE_FILENAME: &'static str = "modelshare.sqlite";
}

/// Model catalogue constants.
pub struct CatalogConfig;

impl CatalogConfig {
    pub const BASE_MODELS: [&'static str; 6] =
        ["SD 1.4", "SD 1.5", "SD 2.0", "SD 2.1", "SD 2.0 768", "Other"];
    /// Gallery controls appear above this many images.
    pub const GALLERY_CONTROLS_THRESHOLD: usize = 2;
}
