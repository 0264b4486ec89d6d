//! Remote data service over HTTP JSON-RPC 2.0.
//!
//! - **Protocol**: request/response types and method names, shared with the
//!   `modelshare-rpc` server
//! - **Client**: [`RpcDataService`], a [`crate::store::DataService`] that
//!   forwards every procedure to the server

pub mod client;
pub mod protocol;

pub use client::RpcDataService;
pub use protocol::{methods, RpcError, RpcRequest, RpcResponse};
