//! ModelShare Core - Headless library for shared-model pages.
//!
//! This crate provides the version navigator used on a model's page, the
//! page host that owns selection and delete flows, and the data service
//! that stores models, versions, reviews and users. It can be used
//! programmatically without any HTTP/RPC layer; `modelshare-rpc` exposes
//! the same operations over JSON-RPC.
//!
//! # Example
//!
//! ```rust,ignore
//! use modelshare_core::navigator::Extents;
//! use modelshare_core::ModelShareApi;
//!
//! #[tokio::main]
//! async fn main() -> modelshare_core::Result<()> {
//!     let api = ModelShareApi::open("/path/to/modelshare.sqlite").await?;
//!
//!     let mut page = api
//!         .open_model_page(42, Some(7), Extents::new(900.0, 400.0))
//!         .await?;
//!     let view = page.render_versions();
//!     println!("{} versions", view.items.len());
//!
//!     page.activate_version(view.items[0].id);
//!     if let Some(route) = page.take_navigation() {
//!         println!("navigate to {}", route);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod navigator;
pub mod page;
pub mod routes;
pub mod rpc;
pub mod store;

mod api;

// Re-export commonly used types
pub use error::{ErrorCode, ModelShareError, Result};
pub use models::{Model, ModelId, ModelVersion, VersionId};
pub use navigator::{
    EventLog, Extents, Measure, NavigatorEvent, NavigatorHost, VersionListView, VersionNavigator,
};
pub use page::{ModelDeleteOutcome, ModelPage};
pub use routes::{Route, WizardStep};
pub use rpc::RpcDataService;
pub use store::{DataService, DynDataService, SqliteStore};

pub use api::ModelShareApiBuilder;

use std::sync::Arc;

/// Main API struct for ModelShare operations.
///
/// Internally, `ModelShareApi` operates in one of two modes:
/// - **Local**: owns a SQLite database.
/// - **Remote**: forwards every call to a `modelshare-rpc` server.
///
/// The mode is transparent to callers; the public API is identical.
pub struct ModelShareApi {
    inner: ApiInner,
}

impl std::fmt::Debug for ModelShareApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mode = match self.inner {
            ApiInner::Local(_) => "Local",
            ApiInner::Remote(_) => "Remote",
        };
        f.debug_struct("ModelShareApi")
            .field("mode", &mode)
            .finish_non_exhaustive()
    }
}

/// Internal dispatch between the local store and the remote client.
enum ApiInner {
    Local(Arc<SqliteStore>),
    Remote(Arc<RpcDataService>),
}
