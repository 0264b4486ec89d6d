//! Status handlers.

use crate::server::AppState;
use serde_json::{json, Value};

pub async fn health_check(state: &AppState, _params: &Value) -> modelshare_core::Result<Value> {
    Ok(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "mode": if state.api.is_local() { "local" } else { "remote" },
    }))
}
