use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("invalid {method} result: {source}")]
    InvalidResult {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures on the wire: encoding the request, moving bytes over HTTP, or
/// interpreting what came back.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {status}")]
    HttpStatus { status: StatusCode },

    /// Error object reported by the server inside a JSON-RPC envelope.
    #[error("RPC error {code}: {message}")]
    ServerError { code: i64, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
