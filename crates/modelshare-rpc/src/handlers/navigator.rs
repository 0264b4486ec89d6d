//! Version navigator handlers.
//!
//! The navigator is stateless across requests: each call carries the
//! version snapshot (or a model id to load it from), the measured extents
//! and the last reported scroll offset.

use super::{
    get_bool_param, get_f64_param, get_i64_param, get_typed_param, require_i64_param,
    require_str_param,
};
use crate::server::AppState;
use modelshare_core::models::ModelVersion;
use modelshare_core::navigator::{
    duplicate_id, EventLog, Extents, MenuAction, ScrollDirection, ScrollPosition,
    VersionNavigator,
};
use modelshare_core::{ModelShareError, Result};
use serde_json::{json, Value};

async fn resolve_versions(state: &AppState, params: &Value) -> Result<Vec<ModelVersion>> {
    let versions = match get_typed_param::<Vec<ModelVersion>>(params, "versions", "versions")? {
        Some(versions) => versions,
        None => {
            let model_id = get_i64_param(params, "model_id", "modelId").ok_or_else(|| {
                ModelShareError::InvalidParams {
                    message: "Missing required parameter: versions or model_id".to_string(),
                }
            })?;
            state.api.get_model_by_id(model_id).await?.model_versions
        }
    };

    if let Some(id) = duplicate_id(&versions) {
        return Err(ModelShareError::Validation {
            field: "versions".to_string(),
            message: format!("Duplicate model version id {}", id),
        });
    }
    Ok(versions)
}

fn build_navigator(state: &AppState, params: &Value) -> VersionNavigator<Extents> {
    let extents = Extents::new(
        get_f64_param(params, "content_width", "contentWidth").unwrap_or_default(),
        get_f64_param(params, "viewport_width", "viewportWidth").unwrap_or_default(),
    );
    let mut navigator = VersionNavigator::with_style(state.style.clone(), extents);
    navigator.on_scroll_position_change(ScrollPosition {
        x: get_f64_param(params, "scroll_x", "scrollX").unwrap_or_default(),
        y: 0.0,
    });
    navigator
}

fn show_menu(params: &Value) -> bool {
    get_bool_param(params, "show_menu", "showMenu").unwrap_or(false)
}

pub async fn render(state: &AppState, params: &Value) -> Result<Value> {
    let versions = resolve_versions(state, params).await?;
    let navigator = build_navigator(state, params);
    let selected = get_i64_param(params, "selected", "selected");
    let view = navigator.render(&versions, selected, show_menu(params));
    Ok(serde_json::to_value(view)?)
}

pub async fn activate(state: &AppState, params: &Value) -> Result<Value> {
    let versions = resolve_versions(state, params).await?;
    let version_id = require_i64_param(params, "version_id", "versionId")?;
    let navigator = build_navigator(state, params);

    let mut log = EventLog::default();
    let handled = navigator.activate(&versions, version_id, &mut log);
    Ok(json!({ "handled": handled, "events": log }))
}

pub async fn menu_action(state: &AppState, params: &Value) -> Result<Value> {
    let versions = resolve_versions(state, params).await?;
    let version_id = require_i64_param(params, "version_id", "versionId")?;
    let action: MenuAction = require_str_param(params, "action", "action")?.parse()?;
    let navigator = build_navigator(state, params);

    let mut log = EventLog::default();
    let handled =
        navigator.activate_menu_action(&versions, version_id, action, show_menu(params), &mut log);
    Ok(json!({ "handled": handled, "events": log }))
}

pub async fn page(state: &AppState, params: &Value) -> Result<Value> {
    let direction = match require_str_param(params, "direction", "direction")? {
        "left" => ScrollDirection::Left,
        "right" => ScrollDirection::Right,
        other => {
            return Err(ModelShareError::InvalidParams {
                message: format!("Unknown scroll direction: {}", other),
            })
        }
    };
    let navigator = build_navigator(state, params);

    let mut log = EventLog::default();
    let request = navigator.page(direction, &mut log);
    Ok(json!({
        "request": request,
        "affordances": navigator.affordances(),
    }))
}
