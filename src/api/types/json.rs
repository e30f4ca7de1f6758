//! JSON extractor whose rejections are JSON-RPC error responses

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::RpcError;
use super::rpc::RpcResponse;

/// Wrapper around `axum::Json` that answers malformed bodies with a
/// JSON-RPC error object instead of plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Body rejection; the request id is unknown at this point
#[derive(Debug)]
pub struct JsonRejection {
    status: StatusCode,
    error: RpcError,
}

impl JsonRejection {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &RpcError {
        &self.error
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        let body = RpcResponse::failure(Value::Null, self.error);
        (self.status, AxumJson(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection {
                status: rejection.status(),
                error: rejection_error(&rejection),
            }),
        }
    }
}

fn rejection_error(rejection: &axum::extract::rejection::JsonRejection) -> RpcError {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonSyntaxError(err) => {
            RpcError::parse_error(format!("Parse error: {}", err.body_text()))
        }
        JsonDataError(err) => {
            RpcError::invalid_request(format!("Invalid request: {}", err.body_text()))
        }
        MissingJsonContentType(_) => RpcError::invalid_request(
            "Missing Content-Type header. Expected 'application/json'.",
        ),
        BytesRejection(err) => {
            RpcError::invalid_request(format!("Failed to read request body: {}", err.body_text()))
        }
        _ => RpcError::invalid_request("Invalid JSON request"),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/rpc");

        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let Json(value) = Json::<Value>::from_request(request(Some("application/json"), "{\"a\":1}"), &())
            .await
            .unwrap();

        assert_eq!(value, serde_json::json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_syntax_error_is_parse_error() {
        let rejection = Json::<Value>::from_request(request(Some("application/json"), "{\"a\":"), &())
            .await
            .unwrap_err();

        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
        assert_eq!(rejection.error().code, -32700);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let rejection = Json::<Value>::from_request(request(None, "{}"), &())
            .await
            .unwrap_err();

        assert_eq!(rejection.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(rejection.error().code, -32600);
    }

    #[test]
    fn test_json_deref() {
        let json = Json("hello".to_string());
        assert_eq!(*json, "hello");
    }
}
