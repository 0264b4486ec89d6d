//! User handlers.

use super::{get_bool_param, get_i64_param, get_str_param, require_i64_param};
use crate::server::AppState;
use modelshare_core::models::{UserQuery, UserUpdate};
use serde_json::Value;

pub async fn get_all(state: &AppState, params: &Value) -> modelshare_core::Result<Value> {
    let query = UserQuery {
        limit: get_i64_param(params, "limit", "limit").map(|l| l.clamp(0, u32::MAX as i64) as u32),
        query: get_str_param(params, "query", "query").map(String::from),
        email: get_str_param(params, "email", "email").map(String::from),
    };
    let users = state.api.list_users(&query).await?;
    Ok(serde_json::to_value(users)?)
}

pub async fn get_by_id(state: &AppState, params: &Value) -> modelshare_core::Result<Value> {
    let id = require_i64_param(params, "id", "id")?;
    let user = state.api.get_user_by_id(id).await?;
    Ok(serde_json::to_value(user)?)
}

pub async fn update(state: &AppState, params: &Value) -> modelshare_core::Result<Value> {
    let update = UserUpdate {
        id: require_i64_param(params, "id", "id")?,
        username: get_str_param(params, "username", "username").map(String::from),
        show_nsfw: get_bool_param(params, "show_nsfw", "showNsfw"),
        blur_nsfw: get_bool_param(params, "blur_nsfw", "blurNsfw"),
    };
    let user = state.api.update_user(&update).await?;
    Ok(serde_json::to_value(user)?)
}

pub async fn delete(state: &AppState, params: &Value) -> modelshare_core::Result<Value> {
    let id = require_i64_param(params, "id", "id")?;
    let user = state.api.delete_user(id).await?;
    Ok(serde_json::to_value(user)?)
}
