//! API layer - JSON-RPC endpoint, health check and middleware

pub mod health;
pub mod middleware;
pub mod router;
pub mod rpc;
pub mod state;
pub mod types;

pub use router::create_router;
pub use state::AppState;
