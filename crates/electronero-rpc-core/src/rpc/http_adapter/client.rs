use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};

use super::super::request_id::RequestIds;
use super::super::types::{Balance, BalanceParams, BlockCount, Service};
use super::super::ElectroneroRpc;
use super::connection::{join_path, parse_endpoint, JSON_RPC_PATH};
use super::protocol::{encode_request, parse_jsonrpc_error, JsonRpcResponse};

/// Electronero JSON-RPC client over HTTP(S).
///
/// Every call is a single POST; nothing is retried or cached. The client is
/// `Send + Sync` and can be shared between tasks, but note that with the
/// default [`RequestIds`] all requests carry the id `"0"`.
pub struct HttpRpcClient {
    client: reqwest::Client,
    service: Service,
    endpoint: String,
    json_rpc_url: String,
    request_ids: RequestIds,
}

impl HttpRpcClient {
    /// Client for `electronerod` using a default `reqwest::Client`.
    pub fn daemon(endpoint: &str) -> Result<Self, CoreError> {
        Self::with_http_client(Service::Daemon, endpoint, reqwest::Client::new())
    }

    /// Client for `electronero-wallet-rpc` using a default `reqwest::Client`.
    pub fn wallet(endpoint: &str) -> Result<Self, CoreError> {
        Self::with_http_client(Service::Wallet, endpoint, reqwest::Client::new())
    }

    /// Create a client on top of a caller-configured transport.
    ///
    /// The client applies no timeouts of its own; whatever `client` was
    /// built with is what calls get.
    pub fn with_http_client(
        service: Service,
        endpoint: &str,
        client: reqwest::Client,
    ) -> Result<Self, CoreError> {
        let endpoint = parse_endpoint(endpoint)?;
        let json_rpc_url = join_path(&endpoint, JSON_RPC_PATH);

        Ok(Self {
            client,
            service,
            endpoint,
            json_rpc_url,
            request_ids: RequestIds::default(),
        })
    }

    pub fn with_request_ids(mut self, request_ids: RequestIds) -> Self {
        self.request_ids = request_ids;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn service(&self) -> Service {
        self.service
    }

    /// Invoke `method` through the `/json_rpc` envelope and decode its
    /// result into `R`.
    ///
    /// A server-reported error always wins over the result, whatever the
    /// result contains.
    pub async fn call<P, R>(&self, method: &str, params: &P) -> Result<R, CoreError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let result = self.rpc_call(method, params).await?;
        serde_json::from_value(result).map_err(|source| CoreError::InvalidResult {
            method: method.to_owned(),
            source,
        })
    }

    /// Like [`call`](Self::call), but the result is discarded undecoded.
    pub async fn call_unit<P>(&self, method: &str, params: &P) -> Result<(), CoreError>
    where
        P: Serialize + ?Sized,
    {
        self.rpc_call(method, params).await.map(|_| ())
    }

    /// POST `params` as the whole request body to `path` and decode the
    /// response body into `R`.
    ///
    /// This is for the daemon's plain HTTP endpoints (`/get_info`,
    /// `/get_transactions`, ...). The body is not treated as a JSON-RPC
    /// envelope, so an `error` field in it is just another field.
    pub async fn post_json<P, R>(&self, path: &str, params: &P) -> Result<R, CoreError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send_raw(path, params).await?;
        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.service = %self.service, rpc.path = path, body_len = body.len(), "rpc post response");
        trace!(rpc.path = path, body = %body, "rpc post response body");

        serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!("decode {path} response: {e}; body={body}")).into()
        })
    }

    /// Like [`post_json`](Self::post_json), but the call succeeds as soon as
    /// the server answers `200 OK`; the body is never read.
    pub async fn post_json_unit<P>(&self, path: &str, params: &P) -> Result<(), CoreError>
    where
        P: Serialize + ?Sized,
    {
        self.send_raw(path, params).await.map(|_| ())
    }

    async fn send_raw<P>(&self, path: &str, params: &P) -> Result<reqwest::Response, CoreError>
    where
        P: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(params).map_err(RpcError::Encode)?;
        let url = join_path(&self.endpoint, path);
        debug!(rpc.service = %self.service, rpc.path = path, "rpc post");

        Ok(self.send(&url, payload).await?)
    }

    async fn rpc_call<P>(&self, method: &str, params: &P) -> Result<serde_json::Value, CoreError>
    where
        P: Serialize + ?Sized,
    {
        let id = self.request_ids.next();
        let payload = encode_request(&id, method, params)?;
        debug!(
            rpc.service = %self.service,
            rpc.id = %id,
            rpc.method = method,
            "rpc call"
        );

        let response = self.send(&self.json_rpc_url, payload).await?;
        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.id = %id, rpc.method = method, body_len = body.len(), "rpc response");
        trace!(rpc.id = %id, rpc.method = method, body = %body, "rpc response body");

        let decoded: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!("decode JSON-RPC response: {e}; body={body}"))
        })?;
        if decoded.id.as_str() != Some(id.as_str()) {
            trace!(rpc.id = %id, rpc.response_id = %decoded.id, "rpc response id differs");
        }

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err));
        }

        Ok(decoded.result.unwrap_or(serde_json::Value::Null))
    }

    /// Send one POST and hand back the response once it is known to be
    /// `200 OK`. The body is left unread.
    async fn send(&self, url: &str, payload: Vec<u8>) -> Result<reqwest::Response, RpcError> {
        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(url, %status, "rpc request rejected");
            return Err(RpcError::HttpStatus { status });
        }

        Ok(response)
    }
}

#[async_trait]
impl ElectroneroRpc for HttpRpcClient {
    async fn get_block_count(&self) -> Result<u64, CoreError> {
        let res: BlockCount = self.call("getblockcount", &()).await?;
        Ok(res.count)
    }

    async fn get_balance(&self, account_index: u32) -> Result<Balance, CoreError> {
        self.call("get_balance", &BalanceParams { account_index }).await
    }
}
