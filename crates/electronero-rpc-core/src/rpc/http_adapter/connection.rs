use reqwest::Url;

use crate::error::CoreError;

/// Path of the JSON-RPC entry point on both the daemon and the wallet.
pub(super) const JSON_RPC_PATH: &str = "/json_rpc";

/// Validate an HTTP(S) endpoint and strip any trailing `/` so paths can be
/// appended directly.
pub(super) fn parse_endpoint(endpoint: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(endpoint).map_err(|e| {
        CoreError::InvalidEndpoint(format!("`{endpoint}`: expected HTTP(S) URL ({e})"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(endpoint.trim_end_matches('/').to_owned()),
        other => Err(CoreError::InvalidEndpoint(format!(
            "unsupported scheme `{other}`; expected http or https"
        ))),
    }
}

pub(super) fn join_path(endpoint: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{endpoint}{path}")
    } else {
        format!("{endpoint}/{path}")
    }
}
