//! Review listing handler.

use super::{get_typed_param, require_i64_param};
use crate::server::AppState;
use modelshare_core::models::{ReviewFilter, ReviewQuery, ReviewSort};
use serde_json::Value;

pub async fn get_all(state: &AppState, params: &Value) -> modelshare_core::Result<Value> {
    let query = ReviewQuery {
        model_id: require_i64_param(params, "model_id", "modelId")?,
        filter_by: get_typed_param::<Vec<ReviewFilter>>(params, "filter_by", "filterBy")?
            .unwrap_or_default(),
        sort: get_typed_param::<ReviewSort>(params, "sort", "sort")?.unwrap_or_default(),
    };
    let reviews = state.api.list_reviews(&query).await?;
    Ok(serde_json::to_value(reviews)?)
}
