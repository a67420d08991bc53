//! Client for the Electronero daemon (`electronerod`) and wallet
//! (`electronero-wallet-rpc`) JSON-RPC services.
//!
//! ```no_run
//! use electronero_rpc_core::rpc::{ElectroneroRpc, HttpRpcClient};
//!
//! # async fn run() -> Result<(), electronero_rpc_core::CoreError> {
//! let daemon = HttpRpcClient::daemon("http://127.0.0.1:26968")?;
//! let height = daemon.get_block_count().await?;
//! # let _ = height;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod rpc;

pub use error::{CoreError, RpcError};
pub use rpc::{Balance, ElectroneroRpc, HttpRpcClient, RequestIds, Service};
