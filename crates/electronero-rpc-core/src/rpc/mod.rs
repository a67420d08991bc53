//! Electronero RPC abstraction layer.
//!
//! Defines the [`ElectroneroRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]).

mod http_adapter;
pub mod request_id;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use request_id::RequestIds;
pub use types::{Balance, Service};

use async_trait::async_trait;

use crate::error::CoreError;

/// Typed subset of the daemon and wallet RPC surface.
///
/// The generic `call` / `post_json` entry points live on [`HttpRpcClient`]
/// because their type parameters keep them out of a trait object.
#[async_trait]
pub trait ElectroneroRpc: Send + Sync {
    /// Current blockchain height as reported by the daemon (`getblockcount`).
    async fn get_block_count(&self) -> Result<u64, CoreError>;

    /// Total and unlocked balance of a wallet account (`get_balance`).
    async fn get_balance(&self, account_index: u32) -> Result<Balance, CoreError>;
}
