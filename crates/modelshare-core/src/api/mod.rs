//! Public API surface of [`ModelShareApi`].
//!
//! Data service calls are forwarded to whichever backend the instance was
//! built with. The struct definitions remain in `lib.rs`.

mod builder;

pub use builder::ModelShareApiBuilder;

use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    Model, ModelId, Review, ReviewQuery, User, UserId, UserQuery, UserSummary, UserUpdate,
    VersionId,
};
use crate::navigator::Measure;
use crate::page::ModelPage;
use crate::store::{DataService, DynDataService, SqliteStore};
use crate::{ApiInner, ModelShareApi};

impl ModelShareApi {
    /// Create a builder for ModelShareApi.
    pub fn builder() -> ModelShareApiBuilder {
        ModelShareApiBuilder::new()
    }

    /// Open (creating if needed) a local database at `db_path`.
    pub async fn open(db_path: impl Into<std::path::PathBuf>) -> Result<Self> {
        Self::builder()
            .database(db_path)
            .auto_create_dirs(true)
            .build()
            .await
    }

    /// Connect to a running `modelshare-rpc` server.
    pub async fn connect(base_url: &str) -> Result<Self> {
        Self::builder().remote(base_url).build().await
    }

    /// Returns true if this instance owns a local database.
    pub fn is_local(&self) -> bool {
        matches!(&self.inner, ApiInner::Local(_))
    }

    /// The local store, for seeding. `None` in remote mode.
    pub fn store(&self) -> Option<&Arc<SqliteStore>> {
        match &self.inner {
            ApiInner::Local(store) => Some(store),
            ApiInner::Remote(_) => None,
        }
    }

    /// Shared handle to the active data service.
    pub fn data_service(&self) -> DynDataService {
        match &self.inner {
            ApiInner::Local(store) => store.clone() as DynDataService,
            ApiInner::Remote(client) => client.clone() as DynDataService,
        }
    }

    fn service(&self) -> &dyn DataService {
        match &self.inner {
            ApiInner::Local(store) => &**store as &dyn DataService,
            ApiInner::Remote(client) => &**client as &dyn DataService,
        }
    }

    // ========================================
    // Models
    // ========================================

    pub async fn get_model_by_id(&self, id: ModelId) -> Result<Model> {
        self.service().get_model_by_id(id).await
    }

    pub async fn delete_model(&self, id: ModelId) -> Result<ModelId> {
        self.service().delete_model(id).await
    }

    pub async fn delete_model_version(&self, id: VersionId) -> Result<VersionId> {
        self.service().delete_model_version(id).await
    }

    /// Load a model and open its page for `viewer`.
    pub async fn open_model_page<M: Measure>(
        &self,
        id: ModelId,
        viewer: Option<UserId>,
        measure: M,
    ) -> Result<ModelPage<M>> {
        let model = self.get_model_by_id(id).await?;
        Ok(ModelPage::new(model, viewer, measure))
    }

    // ========================================
    // Reviews
    // ========================================

    pub async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>> {
        self.service().list_reviews(query).await
    }

    // ========================================
    // Users
    // ========================================

    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<UserSummary>> {
        self.service().list_users(query).await
    }

    pub async fn get_user_by_id(&self, id: UserId) -> Result<User> {
        self.service().get_user_by_id(id).await
    }

    pub async fn update_user(&self, update: &UserUpdate) -> Result<User> {
        self.service().update_user(update).await
    }

    pub async fn delete_user(&self, id: UserId) -> Result<User> {
        self.service().delete_user(id).await
    }
}
