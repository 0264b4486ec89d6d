//! JSON-RPC request handlers, split by domain.

mod models;
mod navigator;
mod reviews;
mod shared;
mod status;
mod users;

pub(crate) use shared::*;

use crate::server::AppState;
use crate::wrapper::wrap_response;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use modelshare_core::rpc::{methods, RpcRequest, RpcResponse};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

// ============================================================================
// HTTP endpoints
// ============================================================================

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Main JSON-RPC handler.
pub async fn handle_rpc(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RpcRequest>,
) -> impl IntoResponse {
    let method = &request.method;
    let params = request.params.unwrap_or(Value::Object(Default::default()));
    let id = request.id.clone();

    debug!("RPC call: {}({:?})", method, params);

    let result = dispatch_method(&state, method, &params).await;

    match result {
        Ok(value) => {
            let wrapped = wrap_response(method, value);
            (StatusCode::OK, Json(RpcResponse::success(id, wrapped)))
        }
        Err(e) => {
            error!("RPC error for {}: {}", method, e);
            (StatusCode::OK, Json(RpcResponse::from_error(id, &e)))
        }
    }
}

// ============================================================================
// Method dispatcher
// ============================================================================

/// Dispatch a method call to the appropriate domain handler.
async fn dispatch_method(
    state: &AppState,
    method: &str,
    params: &Value,
) -> modelshare_core::Result<Value> {
    match method {
        methods::HEALTH_CHECK => status::health_check(state, params).await,

        // Models
        methods::MODEL_GET_BY_ID => models::get_model_by_id(state, params).await,
        methods::MODEL_DELETE => models::delete_model(state, params).await,
        methods::MODEL_VERSION_DELETE => models::delete_model_version(state, params).await,

        // Reviews
        methods::REVIEW_GET_ALL => reviews::get_all(state, params).await,

        // Users
        methods::USER_GET_ALL => users::get_all(state, params).await,
        methods::USER_GET_BY_ID => users::get_by_id(state, params).await,
        methods::USER_UPDATE => users::update(state, params).await,
        methods::USER_DELETE => users::delete(state, params).await,

        // Version navigator
        methods::NAVIGATOR_RENDER => navigator::render(state, params).await,
        methods::NAVIGATOR_ACTIVATE => navigator::activate(state, params).await,
        methods::NAVIGATOR_MENU_ACTION => navigator::menu_action(state, params).await,
        methods::NAVIGATOR_PAGE => navigator::page(state, params).await,

        _ => Err(modelshare_core::ModelShareError::InvalidParams {
            message: format!("Unknown method: {}", method),
        }),
    }
}
