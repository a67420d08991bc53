//! JSON-RPC client for the Electronero daemon and wallet over HTTP(S).
//!
//! Implements [`ElectroneroRpc`](super::ElectroneroRpc) using `reqwest`,
//! with enveloped JSON-RPC calls on `/json_rpc` and raw JSON posts to the
//! daemon's other HTTP endpoints.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
