//! JSON-RPC 2.0 wire types shared by the remote client and `modelshare-rpc`.

use serde::{Deserialize, Serialize};

use crate::error::ModelShareError;

/// Method names understood by the server.
pub mod methods {
    pub const MODEL_GET_BY_ID: &str = "model.getById";
    pub const MODEL_DELETE: &str = "model.delete";
    pub const MODEL_VERSION_DELETE: &str = "modelVersion.delete";
    pub const REVIEW_GET_ALL: &str = "review.getAll";
    pub const USER_GET_ALL: &str = "user.getAll";
    pub const USER_GET_BY_ID: &str = "user.getById";
    pub const USER_UPDATE: &str = "user.update";
    pub const USER_DELETE: &str = "user.delete";
    pub const NAVIGATOR_RENDER: &str = "navigator.render";
    pub const NAVIGATOR_ACTIVATE: &str = "navigator.activate";
    pub const NAVIGATOR_MENU_ACTION: &str = "navigator.menuAction";
    pub const NAVIGATOR_PAGE: &str = "navigator.page";
    pub const HEALTH_CHECK: &str = "health_check";
}

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
    pub id: Option<serde_json::Value>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: serde_json::Value, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params: Some(params),
            id: Some(serde_json::Value::Number(id.into())),
        }
    }
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

impl RpcResponse {
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<serde_json::Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(RpcError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }

    /// Error response for a library error, tagged with its procedure class.
    pub fn from_error(id: Option<serde_json::Value>, err: &ModelShareError) -> Self {
        let mut response = Self::error(id, err.to_rpc_error_code(), err.to_string());
        if let Some(error) = response.error.as_mut() {
            error.data = Some(serde_json::json!({ "code": err.code().as_str() }));
        }
        response
    }

    /// Unwrap the result, converting an error object into
    /// [`ModelShareError::Remote`].
    pub fn into_result(self) -> crate::Result<serde_json::Value> {
        if let Some(err) = self.error {
            return Err(ModelShareError::Remote {
                code: err.code,
                message: err.message,
            });
        }
        self.result
            .ok_or_else(|| ModelShareError::Other("RPC response missing result".to_string()))
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
