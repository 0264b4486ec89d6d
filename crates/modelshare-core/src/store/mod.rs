//! Data service abstraction.
//!
//! The model page and the RPC server talk to storage only through
//! [`DataService`]. Two implementations exist:
//! - [`SqliteStore`]: local SQLite database
//! - [`crate::rpc::RpcDataService`]: a remote `modelshare-rpc` server
//!
//! Every operation is a request/response pair. Failures carry a
//! [`crate::ErrorCode`] class through [`crate::ModelShareError::code`].

mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    Model, ModelId, Review, ReviewQuery, User, UserId, UserQuery, UserSummary, UserUpdate,
    VersionId,
};

/// Procedures exposed by the data service.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Fetch a model with its versions in creation order.
    async fn get_model_by_id(&self, id: ModelId) -> Result<Model>;

    /// Delete a model and everything attached to it. Returns the deleted id.
    async fn delete_model(&self, id: ModelId) -> Result<ModelId>;

    /// Delete one version. Returns the deleted id.
    async fn delete_model_version(&self, id: VersionId) -> Result<VersionId>;

    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>>;

    async fn list_users(&self, query: &UserQuery) -> Result<Vec<UserSummary>>;

    async fn get_user_by_id(&self, id: UserId) -> Result<User>;

    /// Apply a partial update and return the updated user.
    async fn update_user(&self, update: &UserUpdate) -> Result<User>;

    /// Delete a user and return the removed row.
    async fn delete_user(&self, id: UserId) -> Result<User>;
}

/// Shared handle to any data service.
pub type DynDataService = Arc<dyn DataService>;

#[async_trait]
impl<T: DataService + ?Sized> DataService for Arc<T> {
    async fn get_model_by_id(&self, id: ModelId) -> Result<Model> {
        (**self).get_model_by_id(id).await
    }

    async fn delete_model(&self, id: ModelId) -> Result<ModelId> {
        (**self).delete_model(id).await
    }

    async fn delete_model_version(&self, id: VersionId) -> Result<VersionId> {
        (**self).delete_model_version(id).await
    }

    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>> {
        (**self).list_reviews(query).await
    }

    async fn list_users(&self, query: &UserQuery) -> Result<Vec<UserSummary>> {
        (**self).list_users(query).await
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<User> {
        (**self).get_user_by_id(id).await
    }

    async fn update_user(&self, update: &UserUpdate) -> Result<User> {
        (**self).update_user(update).await
    }

    async fn delete_user(&self, id: UserId) -> Result<User> {
        (**self).delete_user(id).await
    }
}
