//! JSON-RPC 2.0 error objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// Error codes reserved by JSON-RPC 2.0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    /// Failure raised by the called method itself
    ServerError,
}

impl RpcErrorCode {
    pub fn code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::ServerError => -32000,
        }
    }
}

/// Error member of a JSON-RPC response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::ParseError, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::InvalidRequest, message)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            RpcErrorCode::MethodNotFound,
            format!("Method not found: {}", method),
        )
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::InvalidParams, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::InternalError, message)
    }
}

/// Every domain failure reaches the caller as opaque text
impl From<DomainError> for RpcError {
    fn from(err: DomainError) -> Self {
        Self::new(RpcErrorCode::ServerError, err.to_string())
    }
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for RpcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_codes() {
        assert_eq!(RpcError::parse_error("").code, -32700);
        assert_eq!(RpcError::invalid_request("").code, -32600);
        assert_eq!(RpcError::method_not_found("x").code, -32601);
        assert_eq!(RpcError::invalid_params("").code, -32602);
        assert_eq!(RpcError::internal("").code, -32603);
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: RpcError =
            DomainError::validation("Cannot accept an amount that is less than 0").into();

        assert_eq!(err.code, -32000);
        assert_eq!(
            err.message,
            "Validation error: Cannot accept an amount that is less than 0"
        );
    }

    #[test]
    fn test_error_serialization_omits_empty_data() {
        let json = serde_json::to_value(RpcError::method_not_found("Nope")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"code": -32601, "message": "Method not found: Nope"})
        );
    }
}
