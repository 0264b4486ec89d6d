//! Shared handler utilities used across RPC domains.

use modelshare_core::{ModelShareError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn lookup<'a>(params: &'a Value, snake: &str, camel: &str) -> Option<&'a Value> {
    params
        .get(snake)
        .or_else(|| params.get(camel))
        .filter(|v| !v.is_null())
}

/// Extract an optional string parameter, supporting both snake_case and camelCase.
pub(crate) fn get_str_param<'a>(params: &'a Value, snake: &str, camel: &str) -> Option<&'a str> {
    lookup(params, snake, camel).and_then(|v| v.as_str())
}

/// Extract an optional bool parameter, supporting both snake_case and camelCase.
pub(crate) fn get_bool_param(params: &Value, snake: &str, camel: &str) -> Option<bool> {
    lookup(params, snake, camel).and_then(|v| v.as_bool())
}

/// Extract an optional i64 parameter, supporting both snake_case and camelCase.
pub(crate) fn get_i64_param(params: &Value, snake: &str, camel: &str) -> Option<i64> {
    lookup(params, snake, camel).and_then(|v| v.as_i64())
}

/// Extract an optional f64 parameter, supporting both snake_case and camelCase.
pub(crate) fn get_f64_param(params: &Value, snake: &str, camel: &str) -> Option<f64> {
    lookup(params, snake, camel).and_then(|v| v.as_f64())
}

/// Extract a required i64 parameter or return an error.
pub(crate) fn require_i64_param(params: &Value, snake: &str, camel: &str) -> Result<i64> {
    get_i64_param(params, snake, camel).ok_or_else(|| ModelShareError::InvalidParams {
        message: format!("Missing required parameter: {}", snake),
    })
}

/// Extract a required string parameter or return an error.
pub(crate) fn require_str_param<'a>(params: &'a Value, snake: &str, camel: &str) -> Result<&'a str> {
    get_str_param(params, snake, camel).ok_or_else(|| ModelShareError::InvalidParams {
        message: format!("Missing required parameter: {}", snake),
    })
}

/// Deserialize an optional structured parameter.
pub(crate) fn get_typed_param<T: DeserializeOwned>(
    params: &Value,
    snake: &str,
    camel: &str,
) -> Result<Option<T>> {
    lookup(params, snake, camel)
        .map(|v| {
            serde_json::from_value(v.clone()).map_err(|e| ModelShareError::InvalidParams {
                message: format!("Invalid parameter {}: {}", snake, e),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snake_and_camel_case() {
        let params = json!({"model_id": 3, "showMenu": true, "scrollX": 12.5});
        assert_eq!(get_i64_param(&params, "model_id", "modelId"), Some(3));
        assert_eq!(get_bool_param(&params, "show_menu", "showMenu"), Some(true));
        assert_eq!(get_f64_param(&params, "scroll_x", "scrollX"), Some(12.5));
    }

    #[test]
    fn test_null_is_absent() {
        let params = json!({"id": null});
        assert!(require_i64_param(&params, "id", "id").is_err());
    }

    #[test]
    fn test_typed_param_errors_are_invalid_params() {
        let params = json!({"sort": 5});
        let err = get_typed_param::<String>(&params, "sort", "sort").unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32602);
    }
}
