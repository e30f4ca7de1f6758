//! JSON-RPC 2.0 endpoint

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::middleware::accept::accepts_json;
use super::state::AppState;
use super::types::{Json, JsonRejection, RpcError, RpcRequest, RpcResponse, JSONRPC_VERSION};
use crate::domain::advice::AdviceArgs;

/// Service-qualified name of the advice method
pub const GIVE_ME_ADVICE: &str = "AdviceService.GiveMeAdvice";

/// Bare alias of [`GIVE_ME_ADVICE`]
pub const GIVE_ME_ADVICE_SHORT: &str = "GiveMeAdvice";

/// Handles `POST /rpc`
pub async fn handle_rpc(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    if !accepts_json(&headers) {
        return StatusCode::NOT_ACCEPTABLE.into_response();
    }

    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => return rejection.into_response(),
    };

    let id = readable_id(&body);
    let request = match decode_request(body) {
        Ok(request) => request,
        Err(error) => return Json(RpcResponse::failure(id, error)).into_response(),
    };

    let outcome = dispatch(&state, &request.method, request.params).await;

    if let Err(error) = &outcome {
        warn!(method = %request.method, code = error.code, message = %error.message, "RPC call failed");
    }

    match request.id {
        Some(id) => Json(RpcResponse::from_outcome(id, outcome)).into_response(),
        None => {
            debug!(method = %request.method, "Notification handled");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

/// Request id of a malformed call, when it carries a usable one
fn readable_id(body: &Value) -> Value {
    match body.get("id") {
        Some(id @ (Value::Number(_) | Value::String(_))) => id.clone(),
        _ => Value::Null,
    }
}

fn decode_request(body: Value) -> Result<RpcRequest, RpcError> {
    if body.is_array() {
        return Err(RpcError::invalid_request("Batch requests are not supported"));
    }

    let request: RpcRequest = serde_json::from_value(body)
        .map_err(|e| RpcError::invalid_request(format!("Invalid request: {}", e)))?;

    if request.jsonrpc != JSONRPC_VERSION {
        return Err(RpcError::invalid_request(format!(
            "Unsupported jsonrpc version: {}",
            request.jsonrpc
        )));
    }

    Ok(request)
}

async fn dispatch(state: &AppState, method: &str, params: Option<Value>) -> Result<Value, RpcError> {
    match method {
        GIVE_ME_ADVICE | GIVE_ME_ADVICE_SHORT => {
            let args: AdviceArgs = decode_params(params)?;
            let reply = state.advice_service.give_me_advice(args).await?;

            serde_json::to_value(reply)
                .map_err(|e| RpcError::internal(format!("Failed to encode reply: {}", e)))
        }
        _ => Err(RpcError::method_not_found(method)),
    }
}

/// Accepts the argument object itself or a one-element array wrapping it
fn decode_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, RpcError> {
    let value = match params {
        None | Some(Value::Null) => return Err(RpcError::invalid_params("Missing params")),
        Some(Value::Array(mut items)) if items.len() == 1 => items.remove(0),
        Some(other) => other,
    };

    serde_json::from_value(value)
        .map_err(|e| RpcError::invalid_params("Invalid params").with_data(json!(e.to_string())))
}
