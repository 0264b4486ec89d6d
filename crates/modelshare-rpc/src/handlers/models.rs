//! Model and model version handlers.

use super::require_i64_param;
use crate::server::AppState;
use serde_json::{json, Value};

pub async fn get_model_by_id(state: &AppState, params: &Value) -> modelshare_core::Result<Value> {
    let id = require_i64_param(params, "id", "id")?;
    let model = state.api.get_model_by_id(id).await?;
    Ok(serde_json::to_value(model)?)
}

pub async fn delete_model(state: &AppState, params: &Value) -> modelshare_core::Result<Value> {
    let id = require_i64_param(params, "id", "id")?;
    let deleted = state.api.delete_model(id).await?;
    Ok(json!(deleted))
}

pub async fn delete_model_version(
    state: &AppState,
    params: &Value,
) -> modelshare_core::Result<Value> {
    let id = require_i64_param(params, "id", "id")?;
    let deleted = state.api.delete_model_version(id).await?;
    Ok(json!(deleted))
}
