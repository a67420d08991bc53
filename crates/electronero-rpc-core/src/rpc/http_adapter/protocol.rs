use serde::Serialize;

use crate::error::{CoreError, RpcError};

pub(super) const JSONRPC_VERSION: &str = "2.0";

#[derive(Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: &'a str,
    pub(super) method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) params: Option<serde_json::Value>,
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    #[serde(default)]
    pub(super) id: serde_json::Value,
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Serialize a JSON-RPC envelope for `method`.
///
/// Parameters that encode to `null` or to an empty object/array are left
/// off the wire entirely.
pub(super) fn encode_request<P>(id: &str, method: &str, params: &P) -> Result<Vec<u8>, RpcError>
where
    P: Serialize + ?Sized,
{
    let params = serde_json::to_value(params).map_err(RpcError::Encode)?;
    let req = JsonRpcRequest {
        jsonrpc: JSONRPC_VERSION,
        id,
        method,
        params: non_empty_params(params),
    };
    serde_json::to_vec(&req).map_err(RpcError::Encode)
}

fn non_empty_params(params: serde_json::Value) -> Option<serde_json::Value> {
    match &params {
        serde_json::Value::Null => None,
        serde_json::Value::Object(map) if map.is_empty() => None,
        serde_json::Value::Array(items) if items.is_empty() => None,
        _ => Some(params),
    }
}

/// Parse a JSON-RPC error value into a structured `CoreError`.
///
/// Errors of the form `{"code": <int>, "message": <string>}` become
/// `ServerError`; anything else is reported as `InvalidResponse` with the
/// raw JSON.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> CoreError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    if let Ok(parsed) = serde_json::from_value::<JsonRpcError>(err.clone()) {
        CoreError::Rpc(RpcError::ServerError {
            code: parsed.code,
            message: parsed.message,
        })
    } else {
        CoreError::Rpc(RpcError::InvalidResponse(format!(
            "non-standard JSON-RPC error: {err}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn encoded<P: Serialize + ?Sized>(method: &str, params: &P) -> serde_json::Value {
        let body = encode_request("0", method, params).expect("request must encode");
        serde_json::from_slice(&body).expect("request must be valid JSON")
    }

    #[test]
    fn encode_request_with_params() {
        assert_eq!(
            encoded("get_balance", &json!({ "account_index": 0 })),
            json!({
                "jsonrpc": "2.0",
                "id": "0",
                "method": "get_balance",
                "params": { "account_index": 0 }
            })
        );
    }

    #[test]
    fn encode_request_omits_unit_params() {
        assert_eq!(
            encoded("getblockcount", &()),
            json!({ "jsonrpc": "2.0", "id": "0", "method": "getblockcount" })
        );
    }

    #[test]
    fn encode_request_omits_empty_params() {
        let expected = json!({ "jsonrpc": "2.0", "id": "0", "method": "get_info" });
        assert_eq!(encoded("get_info", &json!({})), expected);
        assert_eq!(encoded("get_info", &Vec::<u32>::new()), expected);
        assert_eq!(encoded("get_info", &None::<u32>), expected);
    }

    #[test]
    fn encode_request_keeps_positional_params() {
        let value = encoded("on_getblockhash", &[42u64]);
        assert_eq!(value["params"], json!([42]));
    }

    #[test]
    fn encode_request_surfaces_serializer_errors() {
        use std::collections::HashMap;

        // JSON object keys must be strings.
        let mut params = HashMap::new();
        params.insert(vec![1u8], 1u8);
        let err = encode_request("0", "bad", &params).expect_err("non-string keys must fail");
        assert!(matches!(err, RpcError::Encode(_)));
    }

    #[test]
    fn parse_jsonrpc_error_standard_shape() {
        let err = parse_jsonrpc_error(json!({ "code": -1, "message": "boom" }));
        assert!(matches!(
            err,
            CoreError::Rpc(RpcError::ServerError { code: -1, ref message }) if message == "boom"
        ));
    }

    #[test]
    fn parse_jsonrpc_error_non_standard_shape() {
        let err = parse_jsonrpc_error(json!("wallet is locked"));
        assert!(matches!(err, CoreError::Rpc(RpcError::InvalidResponse(_))));
        assert!(err.to_string().contains("wallet is locked"));
    }
}
