//! HTTP JSON-RPC client for a remote `modelshare-rpc` server.
//!
//! Implements [`DataService`] so the model page can run against either the
//! local SQLite store or a remote server without changes.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use url::Url;

use super::protocol::{methods, RpcRequest, RpcResponse};
use crate::config::{AppConfig, NetworkConfig};
use crate::error::{ModelShareError, Result};
use crate::models::{
    Model, ModelId, Review, ReviewQuery, User, UserId, UserQuery, UserSummary, UserUpdate,
    VersionId,
};
use crate::store::DataService;

/// Data service backed by a remote JSON-RPC endpoint.
#[derive(Debug)]
pub struct RpcDataService {
    client: Client,
    endpoint: Url,
    next_id: AtomicU64,
}

impl RpcDataService {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:8400/`).
    pub fn new(base_url: &str) -> Result<Self> {
        let endpoint = endpoint_url(base_url)?;

        let client = Client::builder()
            .timeout(NetworkConfig::REQUEST_TIMEOUT)
            .user_agent(AppConfig::USER_AGENT)
            .build()
            .map_err(|e| ModelShareError::Network {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Call a JSON-RPC method and return its raw result.
    pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(method, params, id);
        debug!("RPC call {} -> {}", method, self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| ModelShareError::Network {
                message: format!("RPC request {} failed: {}", method, e),
            })?;

        if !response.status().is_success() {
            return Err(ModelShareError::Network {
                message: format!("RPC server returned {}", response.status()),
            });
        }

        let response: RpcResponse = response.json().await.map_err(|e| ModelShareError::Json {
            message: format!("Failed to parse RPC response: {}", e),
            source: None,
        })?;

        response.into_result()
    }

    async fn call_as<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let value = self.call(method, params).await?;
        decode(value)
    }
}

fn endpoint_url(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url).map_err(|e| ModelShareError::Config {
        message: format!("Invalid server URL '{}': {}", base_url, e),
    })?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(NetworkConfig::RPC_PATH)
        .map_err(|e| ModelShareError::Config {
            message: format!("Invalid server URL '{}': {}", base_url, e),
        })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ModelShareError::Json {
        message: format!("Unexpected RPC result shape: {}", e),
        source: Some(e),
    })
}

/// Pull a field out of a `{success, <field>}` envelope.
fn unwrap_field<T: DeserializeOwned>(mut value: Value, field: &str) -> Result<T> {
    match value.get_mut(field) {
        Some(inner) => decode(inner.take()),
        None => Err(ModelShareError::Json {
            message: format!("RPC result missing '{}'", field),
            source: None,
        }),
    }
}

#[async_trait]
impl DataService for RpcDataService {
    async fn get_model_by_id(&self, id: ModelId) -> Result<Model> {
        self.call_as(methods::MODEL_GET_BY_ID, json!({ "id": id })).await
    }

    async fn delete_model(&self, id: ModelId) -> Result<ModelId> {
        let value = self.call(methods::MODEL_DELETE, json!({ "id": id })).await?;
        unwrap_field(value, "id")
    }

    async fn delete_model_version(&self, id: VersionId) -> Result<VersionId> {
        let value = self
            .call(methods::MODEL_VERSION_DELETE, json!({ "id": id }))
            .await?;
        unwrap_field(value, "id")
    }

    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>> {
        let value = self
            .call(methods::REVIEW_GET_ALL, serde_json::to_value(query)?)
            .await?;
        unwrap_field(value, "reviews")
    }

    async fn list_users(&self, query: &UserQuery) -> Result<Vec<UserSummary>> {
        let value = self
            .call(methods::USER_GET_ALL, serde_json::to_value(query)?)
            .await?;
        unwrap_field(value, "users")
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<User> {
        self.call_as(methods::USER_GET_BY_ID, json!({ "id": id })).await
    }

    async fn update_user(&self, update: &UserUpdate) -> Result<User> {
        self.call_as(methods::USER_UPDATE, serde_json::to_value(update)?)
            .await
    }

    async fn delete_user(&self, id: UserId) -> Result<User> {
        self.call_as(methods::USER_DELETE, json!({ "id": id })).await
    }
}
