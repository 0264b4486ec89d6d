//! Response wrapping for client compatibility.
//!
//! List procedures answer `{success, <field>: [...]}` and delete procedures
//! answer `{success, id}`. Everything else is returned as the handler
//! produced it.

use modelshare_core::rpc::methods;
use serde_json::{json, Value};

/// Wrap a handler result in the envelope expected for `method`.
pub fn wrap_response(method: &str, result: Value) -> Value {
    match method {
        // List wrappers
        methods::REVIEW_GET_ALL => {
            json!({
                "success": true,
                "reviews": if result.is_null() { json!([]) } else { result }
            })
        }

        methods::USER_GET_ALL => {
            json!({
                "success": true,
                "users": if result.is_null() { json!([]) } else { result }
            })
        }

        // Delete acknowledgements
        methods::MODEL_DELETE | methods::MODEL_VERSION_DELETE => {
            json!({
                "success": true,
                "id": result
            })
        }

        _ => result,
    }
}
