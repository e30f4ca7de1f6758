//! JSON-RPC wire types

pub mod error;
pub mod json;
pub mod rpc;

pub use error::{RpcError, RpcErrorCode};
pub use json::{Json, JsonRejection};
pub use rpc::{RpcRequest, RpcResponse, JSONRPC_VERSION};
